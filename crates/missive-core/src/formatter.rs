//! Message templates.
//!
//! Formatting is total: every input produces exactly one message and nothing
//! here performs I/O. Rejecting an empty body is the caller's job (see
//! [`crate::composer::Composer::send`]).

use std::fmt;

use crate::tone::Tone;

/// Name substituted when the sender name is empty or blank.
pub const DEFAULT_NAME: &str = "Friend";

/// Formats a message, parsing `tone` leniently.
///
/// ```rust
/// use missive_core::format;
///
/// assert_eq!(
///     format("", "formal", "Hello"),
///     "Dear Friend,\n\nHello\n\nSincerely,\nFriend"
/// );
/// ```
pub fn format(name: &str, tone: &str, body: &str) -> String {
    format_message(name, Tone::parse_lenient(tone), body)
}

/// Formats a message with an already-resolved tone.
///
/// `name` is trimmed (or replaced by [`DEFAULT_NAME`] when blank); `body` is
/// used verbatim.
pub fn format_message(name: &str, tone: Tone, body: &str) -> String {
    let name = display_name(name);
    match tone {
        Tone::Formal => format!("Dear {name},\n\n{body}\n\nSincerely,\n{name}"),
        Tone::Funny => format!("Yo {name}!\n\n{body} 😂\n\nCheers,\nYour pal"),
        Tone::Friendly => format!("Hi {name} 👋\n\n{body}\n\nTake care,\n{name}"),
    }
}

/// True when `body` has nothing but whitespace; such a body must not be sent.
pub fn is_blank(body: &str) -> bool {
    body.trim().is_empty()
}

fn display_name(name: &str) -> &str {
    match name.trim() {
        "" => DEFAULT_NAME,
        trimmed => trimmed,
    }
}

/// Input of a single formatting call, assembled by a host from its fields.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormatRequest {
    pub name: String,
    pub tone: Tone,
    pub body: String,
}

impl FormatRequest {
    /// Creates a request from raw field values.
    pub fn new(name: impl Into<String>, tone: Tone, body: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tone,
            body: body.into(),
        }
    }

    /// Runs the formatter over this request.
    pub fn format(&self) -> String {
        format_message(&self.name, self.tone, &self.body)
    }
}

impl fmt::Display for FormatRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}
