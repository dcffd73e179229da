//! Core library for the Missive message composer.
//!
//! The heart of the crate is a pure formatter that turns a sender name, a
//! [`Tone`] and a message body into one of three letter templates. Around it
//! sit the pieces every host needs:
//!
//! - [`formatter`]: the templates and the [`FormatRequest`] value type
//! - [`tone`]: the tone enumeration with its friendly fallback
//! - [`composer`]: form state with send, preview, clear and copy, plus
//!   [`Composer::handle_key`] for hosts that deliver key events (Ctrl+Enter
//!   sends from the body, Tab moves focus)
//! - [`clipboard`]: the clipboard seam and an in-memory implementation
//! - [`config`]: optional settings file with default name and tone
//! - [`params`]: interface-neutral parameters for CLI and MCP hosts
//!
//! # Quick Start
//!
//! ```rust
//! use missive_core::{format, Composer, MemoryClipboard, Tone};
//!
//! assert!(format("Bo", "unknown-tone", "X").starts_with("Hi Bo 👋"));
//!
//! let mut composer = Composer::with_defaults("Ana", Tone::Funny);
//! composer.body = "Pizza tonight?".to_string();
//! composer.send();
//!
//! let mut clipboard = MemoryClipboard::new();
//! assert!(composer.copy(&mut clipboard)?);
//! assert_eq!(clipboard.contents(), Some("Yo Ana!\n\nPizza tonight? 😂\n\nCheers,\nYour pal"));
//! # Ok::<(), missive_core::ComposerError>(())
//! ```

pub mod clipboard;
pub mod composer;
pub mod config;
pub mod error;
pub mod formatter;
pub mod params;
pub mod tone;

// Re-export commonly used types
pub use clipboard::{Clipboard, MemoryClipboard};
pub use composer::{Composer, Field, Key, KeyPress, Outcome, EMPTY_BODY_PROMPT};
pub use config::{Config, ConfigBuilder};
pub use error::{ComposerError, Result};
pub use formatter::{format, format_message, is_blank, FormatRequest, DEFAULT_NAME};
pub use params::FormatMessage;
pub use tone::Tone;
