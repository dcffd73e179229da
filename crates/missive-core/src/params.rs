//! Parameter structures for Missive operations
//!
//! These structures are shared by the interfaces (CLI, MCP) and carry no
//! framework-specific derives beyond serde. JSON schema generation is gated
//! behind the `schema` feature so the core stays lightweight.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │   CLI Args      │    │   MCP Params    │    │  Core Params    │
//! │  (clap derives) │───▶│ (serde derives) │───▶│ (minimal deps)  │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```
//!
//! Interface layers wrap or convert into these types, then hand them to
//! [`FormatMessage::into_composer`] to obtain a ready-to-drive
//! [`Composer`].

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{
    composer::{Composer, EMPTY_BODY_PROMPT},
    config::Config,
    error::{ComposerError, Result},
    formatter::is_blank,
    tone::Tone,
};

/// Parameters for formatting a single message.
///
/// `name` and `tone` are optional; missing values fall back to the
/// configured defaults. `tone` is matched case-insensitively and unknown
/// names select the friendly template.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct FormatMessage {
    /// Sender name; blank names are signed as "Friend"
    pub name: Option<String>,
    /// One of "friendly", "formal" or "funny"
    pub tone: Option<String>,
    /// Message body (required, must not be blank)
    pub body: String,
}

impl FormatMessage {
    /// Checks the body precondition of a send.
    ///
    /// # Errors
    ///
    /// Returns `ComposerError::InvalidInput` for a blank body, carrying the
    /// prompt shown to interactive users.
    pub fn validate(&self) -> Result<()> {
        if is_blank(&self.body) {
            return Err(ComposerError::invalid_input("body").with_reason(EMPTY_BODY_PROMPT));
        }
        Ok(())
    }

    /// Resolves the tone, using `fallback` when none was given.
    pub fn resolved_tone(&self, fallback: Tone) -> Tone {
        self.tone
            .as_deref()
            .map_or(fallback, Tone::parse_lenient)
    }

    /// Builds a composer whose fields hold these parameters, with `config`
    /// supplying any missing name or tone.
    pub fn into_composer(self, config: &Config) -> Composer {
        let tone = self.resolved_tone(config.default_tone);
        let name = self
            .name
            .or_else(|| config.default_name.clone())
            .unwrap_or_default();
        let mut composer = Composer::with_defaults(name, tone);
        composer.body = self.body;
        composer
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(name: Option<&str>, tone: Option<&str>, body: &str) -> FormatMessage {
        FormatMessage {
            name: name.map(str::to_string),
            tone: tone.map(str::to_string),
            body: body.to_string(),
        }
    }

    #[test]
    fn blank_body_fails_validation() {
        let err = params(None, None, "  \n").validate().unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid input for field 'body': Write a message before sending."
        );
        assert!(params(None, None, "hi").validate().is_ok());
    }

    #[test]
    fn tone_is_lenient_and_falls_back() {
        assert_eq!(params(None, Some("FUNNY"), "x").resolved_tone(Tone::Formal), Tone::Funny);
        assert_eq!(params(None, Some("odd"), "x").resolved_tone(Tone::Formal), Tone::Friendly);
        assert_eq!(params(None, None, "x").resolved_tone(Tone::Formal), Tone::Formal);
    }

    #[test]
    fn config_fills_missing_fields() {
        let config = Config {
            default_name: Some("Ana".to_string()),
            default_tone: Tone::Formal,
        };

        let composer = params(None, None, "Hello").into_composer(&config);
        assert_eq!(composer.name, "Ana");
        assert_eq!(composer.tone, Tone::Formal);
        assert_eq!(composer.body, "Hello");

        let composer = params(Some("Bo"), Some("funny"), "Hello").into_composer(&config);
        assert_eq!(composer.name, "Bo");
        assert_eq!(composer.tone, Tone::Funny);
    }

    #[test]
    fn deserializes_with_optional_fields() {
        let parsed: FormatMessage = serde_json::from_str(r#"{"body": "Hi"}"#).unwrap();
        assert!(parsed.name.is_none());
        assert!(parsed.tone.is_none());
        assert_eq!(parsed.body, "Hi");
    }
}
