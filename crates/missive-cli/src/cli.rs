//! Command handlers and argument wrappers
//!
//! Clap argument structures stay in this crate and convert into the
//! interface-neutral [`FormatMessage`] parameters of the core:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Composer
//! ```

use std::{
    fmt,
    io::{self, Read, Write},
};

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use log::{debug, info};
use missive_core::{
    Clipboard, Composer, Config, FormatMessage, Outcome, Tone, EMPTY_BODY_PROMPT,
};

use crate::{clipboard::SystemClipboard, renderer::TerminalRenderer, session::Session};

/// Inputs of a single compose command
#[derive(Args)]
pub struct ComposeArgs {
    /// Message body; read from stdin when omitted
    pub body: Option<String>,
    /// Sender name used in the greeting and signature
    #[arg(short, long)]
    pub name: Option<String>,
    /// Tone of the message
    #[arg(short, long, value_enum)]
    pub tone: Option<ToneArg>,
    /// Copy the formatted message to the system clipboard
    #[arg(short, long)]
    pub copy: bool,
}

impl ComposeArgs {
    /// Fills in the body from `input` when it was not given as an argument.
    pub fn with_body_from<R: Read>(mut self, mut input: R) -> Result<Self> {
        if self.body.is_none() {
            let mut body = String::new();
            input
                .read_to_string(&mut body)
                .context("Failed to read message body from stdin")?;
            self.body = Some(body);
        }
        Ok(self)
    }
}

impl From<ComposeArgs> for FormatMessage {
    fn from(val: ComposeArgs) -> Self {
        FormatMessage {
            name: val.name,
            tone: val.tone.map(|tone| tone.to_string()),
            body: val.body.unwrap_or_default(),
        }
    }
}

/// Command-line argument representation of tones
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum)]
pub enum ToneArg {
    /// Warm greeting signed with your name
    Friendly,
    /// Letter-style salutation and sign-off
    Formal,
    /// Casual greeting with a laughing emoji
    Funny,
}

impl From<ToneArg> for Tone {
    fn from(val: ToneArg) -> Self {
        match val {
            ToneArg::Friendly => Tone::Friendly,
            ToneArg::Formal => Tone::Formal,
            ToneArg::Funny => Tone::Funny,
        }
    }
}

impl fmt::Display for ToneArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(Tone::from(*self).as_str())
    }
}

/// Runs CLI commands against the loaded settings
pub struct Cli {
    config: Config,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(config: Config, renderer: TerminalRenderer) -> Self {
        Self { config, renderer }
    }

    /// Format with send semantics and print the result.
    pub fn send(&self, args: ComposeArgs) -> Result<()> {
        let args = args.with_body_from(io::stdin())?;
        let copy = args.copy;
        let mut composer = FormatMessage::from(args).into_composer(&self.config);

        if composer.send() == Outcome::Rejected {
            bail!(EMPTY_BODY_PROMPT);
        }
        self.show(&composer, copy)
    }

    /// Format with preview semantics and print the result.
    pub fn preview(&self, args: ComposeArgs) -> Result<()> {
        let args = args.with_body_from(io::stdin())?;
        let copy = args.copy;
        let mut composer = FormatMessage::from(args).into_composer(&self.config);

        composer.preview();
        self.show(&composer, copy)
    }

    /// List the tones, marking the configured default.
    pub fn tones(&self) -> Result<()> {
        self.renderer.render(&tone_listing(self.config.default_tone))
    }

    /// Run an interactive session on stdin/stdout.
    pub fn session(&self) -> Result<()> {
        info!("Starting compose session");
        let stdin = io::stdin();
        let stdout = io::stdout();
        Session::new(self.config.composer(), SystemClipboard::new(), &self.renderer)
            .run(stdin.lock(), &mut stdout.lock())
    }

    fn show(&self, composer: &Composer, copy: bool) -> Result<()> {
        self.renderer.message(composer.output())?;
        if copy {
            let mut clipboard = SystemClipboard::detached();
            self.copy(composer, &mut clipboard, &mut io::stderr().lock())?;
        }
        Ok(())
    }

    /// Copies the output; the status line goes to `status` (stderr) so that
    /// stdout carries only the message.
    fn copy<W: Write>(
        &self,
        composer: &Composer,
        clipboard: &mut dyn Clipboard,
        status: &mut W,
    ) -> Result<()> {
        if composer
            .copy(clipboard)
            .context("Failed to copy message")?
        {
            debug!("Copied {} bytes to clipboard", composer.output().len());
            self.renderer.write_markdown(status, "*Copied to clipboard.*")?;
        }
        Ok(())
    }
}

/// Markdown listing of the tones in selector order.
pub fn tone_listing(default: Tone) -> String {
    let mut listing = String::from("# Tones\n\n");
    for tone in Tone::ALL {
        if tone == default {
            listing.push_str(&format!("- **{}** (default)\n", tone.label()));
        } else {
            listing.push_str(&format!("- {}\n", tone.label()));
        }
    }
    listing
}
