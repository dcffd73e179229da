//! Host-agnostic composer form.
//!
//! [`Composer`] holds the values a compose screen would keep in its widgets:
//! the sender name, the selected tone, the message body and the read-only
//! output pane. Hosts mutate the input fields directly and drive the form
//! through its actions; every action re-reads the fields at call time so no
//! state is shared with the host beyond this struct.
//!
//! [`Composer::handle_key`] serves hosts that deliver key events (a GUI or a
//! raw-mode terminal): it maps Ctrl+Enter in the body to a send and Tab to a
//! focus change. Line-driven hosts call the actions directly instead.
//!
//! ```rust
//! use missive_core::{Composer, Outcome, Tone};
//!
//! let mut composer = Composer::new();
//! composer.name = "Ana".to_string();
//! composer.tone = Tone::Formal;
//! composer.body = "  See you at noon.  ".to_string();
//!
//! assert_eq!(composer.send(), Outcome::Formatted);
//! assert!(composer.output().starts_with("Dear Ana,"));
//! ```

use log::{debug, warn};

use crate::{
    clipboard::Clipboard,
    error::Result,
    formatter::{format_message, is_blank, FormatRequest},
    tone::Tone,
};

/// Text placed in the output pane when a send is attempted with no body.
pub const EMPTY_BODY_PROMPT: &str = "Write a message before sending.";

/// Input fields of the compose form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Field {
    #[default]
    Name,
    Tone,
    Body,
}

impl Field {
    /// Next field in tab order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Tone,
            Field::Tone => Field::Body,
            Field::Body => Field::Name,
        }
    }
}

/// Keys the composer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Tab,
    Char(char),
    Other,
}

/// A key event together with the modifier state the accelerator needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
}

impl KeyPress {
    pub fn plain(key: Key) -> Self {
        Self { key, ctrl: false }
    }

    pub fn ctrl(key: Key) -> Self {
        Self { key, ctrl: true }
    }
}

/// Result of a send or preview action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The output pane holds a formatted message
    Formatted,
    /// The body was blank; the output pane holds [`EMPTY_BODY_PROMPT`]
    Rejected,
}

/// State of the compose form.
#[derive(Debug, Clone, Default)]
pub struct Composer {
    pub name: String,
    pub tone: Tone,
    pub body: String,
    output: String,
    focus: Field,
    default_name: String,
    default_tone: Tone,
}

impl Composer {
    /// Creates an empty form with the default tone selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty form pre-filled with a sender name and tone.
    ///
    /// [`Composer::clear`] restores these values rather than blanking them.
    pub fn with_defaults(name: impl Into<String>, tone: Tone) -> Self {
        let name = name.into();
        Self {
            name: name.clone(),
            tone,
            default_name: name,
            default_tone: tone,
            ..Self::default()
        }
    }

    /// Current contents of the read-only output pane.
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Field that currently holds input focus.
    pub fn focus(&self) -> Field {
        self.focus
    }

    pub fn set_focus(&mut self, field: Field) {
        self.focus = field;
    }

    /// Snapshot of the current field values.
    pub fn request(&self) -> FormatRequest {
        FormatRequest::new(self.name.clone(), self.tone, self.body.clone())
    }

    /// Formats the trimmed fields into the output pane.
    ///
    /// A body that is empty after trimming is not formatted: the output pane
    /// shows [`EMPTY_BODY_PROMPT`] and focus moves to the body field.
    pub fn send(&mut self) -> Outcome {
        if is_blank(&self.body) {
            warn!("send rejected: message body is empty");
            self.output = EMPTY_BODY_PROMPT.to_string();
            self.focus = Field::Body;
            return Outcome::Rejected;
        }

        debug!("send: tone={} name={:?}", self.tone.as_str(), self.name);
        self.output = format_message(self.name.trim(), self.tone, self.body.trim());
        Outcome::Formatted
    }

    /// Formats the raw fields into the output pane without validation.
    pub fn preview(&mut self) -> Outcome {
        debug!("preview: tone={} name={:?}", self.tone.as_str(), self.name);
        self.output = self.request().format();
        Outcome::Formatted
    }

    /// Empties the body and the output pane and puts the name and tone back
    /// to the pre-fill values (blank and Friendly unless created with
    /// [`Composer::with_defaults`]).
    pub fn clear(&mut self) {
        self.name.clone_from(&self.default_name);
        self.tone = self.default_tone;
        self.body.clear();
        self.output.clear();
        self.focus = Field::default();
    }

    /// Copies the output pane to `clipboard` when it has content.
    ///
    /// Returns `Ok(false)` without touching the clipboard when the output is
    /// empty.
    pub fn copy(&self, clipboard: &mut dyn Clipboard) -> Result<bool> {
        if self.output.is_empty() {
            debug!("copy skipped: output is empty");
            return Ok(false);
        }
        clipboard.set_text(&self.output)?;
        Ok(true)
    }

    /// Applies the Ctrl+Enter accelerator while the body has focus; Tab
    /// moves focus to the next field.
    ///
    /// Returns the send outcome when the key triggered a send, `None`
    /// otherwise.
    pub fn handle_key(&mut self, press: KeyPress) -> Option<Outcome> {
        match press {
            KeyPress {
                key: Key::Enter,
                ctrl: true,
            } if self.focus == Field::Body => Some(self.send()),
            KeyPress {
                key: Key::Tab,
                ctrl: false,
            } => {
                self.focus = self.focus.next();
                None
            }
            _ => None,
        }
    }
}
