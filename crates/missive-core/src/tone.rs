//! Message registers.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Type-safe enumeration of the message tones.
///
/// Each tone selects one template in [`crate::formatter`]. Hosts that receive
/// free-form tone strings should go through [`Tone::parse_lenient`], which
/// never fails and falls back to [`Tone::Friendly`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub enum Tone {
    /// Warm greeting signed with the sender's name
    #[default]
    Friendly,

    /// Letter-style salutation and sign-off
    Formal,

    /// Casual greeting with a laughing emoji
    Funny,
}

impl Tone {
    /// All tones in selector order.
    pub const ALL: [Tone; 3] = [Tone::Friendly, Tone::Formal, Tone::Funny];

    /// Parses a tone name case-insensitively, falling back to
    /// [`Tone::Friendly`] for anything unrecognized.
    ///
    /// ```rust
    /// use missive_core::Tone;
    ///
    /// assert_eq!(Tone::parse_lenient("FORMAL"), Tone::Formal);
    /// assert_eq!(Tone::parse_lenient("sarcastic"), Tone::Friendly);
    /// assert_eq!(Tone::parse_lenient(""), Tone::Friendly);
    /// ```
    pub fn parse_lenient(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "formal" => Tone::Formal,
            "funny" => Tone::Funny,
            _ => Tone::Friendly,
        }
    }

    /// Lower-case identifier, as passed between hosts and the formatter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Friendly => "friendly",
            Tone::Formal => "formal",
            Tone::Funny => "funny",
        }
    }

    /// Capitalized label shown in tone selectors.
    pub fn label(&self) -> &'static str {
        match self {
            Tone::Friendly => "Friendly",
            Tone::Formal => "Formal",
            Tone::Funny => "Funny",
        }
    }
}

impl FromStr for Tone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "friendly" => Ok(Tone::Friendly),
            "formal" => Ok(Tone::Formal),
            "funny" => Ok(Tone::Funny),
            _ => Err(format!("Invalid tone: {s}")),
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
