//! Line-driven compose session.
//!
//! Plain lines are appended to the message body. Lines starting with `:`
//! are commands that edit the other fields or trigger composer actions.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::{debug, warn};
use missive_core::{Clipboard, Composer, Tone};

use crate::renderer::TerminalRenderer;

const HELP: &str = "\
# Commands

- `:name NAME` set the sender name (empty to clear)
- `:tone TONE` choose Friendly, Formal or Funny
- `:send` format the message
- `:preview` format without trimming or validation
- `:copy` copy the output to the clipboard
- `:clear` empty the body and output, restore the default name and tone
- `:show` show the current fields
- `:quit` leave the session

Any other line is added to the message body.";

/// A parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Command<'a> {
    Name(&'a str),
    Tone(&'a str),
    Send,
    Preview,
    Copy,
    Clear,
    Show,
    Help,
    Quit,
    Unknown(&'a str),
    Body(&'a str),
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Self {
        let Some(command) = line.strip_prefix(':') else {
            return Command::Body(line);
        };
        let (verb, rest) = command
            .split_once(char::is_whitespace)
            .unwrap_or((command, ""));
        match verb {
            "name" => Command::Name(rest.trim()),
            "tone" => Command::Tone(rest.trim()),
            "send" => Command::Send,
            "preview" => Command::Preview,
            "copy" => Command::Copy,
            "clear" => Command::Clear,
            "show" => Command::Show,
            "help" => Command::Help,
            "quit" | "q" => Command::Quit,
            _ => Command::Unknown(verb),
        }
    }
}

/// Interactive composer bound to a clipboard and a renderer.
pub struct Session<'r, C: Clipboard> {
    composer: Composer,
    clipboard: C,
    renderer: &'r TerminalRenderer,
}

impl<'r, C: Clipboard> Session<'r, C> {
    pub fn new(composer: Composer, clipboard: C, renderer: &'r TerminalRenderer) -> Self {
        Self {
            composer,
            clipboard,
            renderer,
        }
    }

    /// Reads lines from `input` until `:quit` or end of input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> Result<()> {
        self.renderer
            .write_markdown(out, "Write your message. Type `:help` for commands.")?;

        for line in input.lines() {
            let line = line.context("Failed to read session input")?;
            if !self.apply(Command::parse(&line), out)? {
                break;
            }
        }
        debug!("Compose session finished");
        Ok(())
    }

    /// Runs one command; returns false when the session should end.
    fn apply<W: Write>(&mut self, command: Command<'_>, out: &mut W) -> Result<bool> {
        match command {
            Command::Body(line) => {
                if !self.composer.body.is_empty() {
                    self.composer.body.push('\n');
                }
                self.composer.body.push_str(line);
            }
            Command::Name(name) => self.composer.name = name.to_string(),
            Command::Tone(name) => match name.parse::<Tone>() {
                Ok(tone) => self.composer.tone = tone,
                Err(_) => self.renderer.write_markdown(
                    out,
                    &format!("Unknown tone `{name}`. Choose Friendly, Formal or Funny."),
                )?,
            },
            Command::Send => {
                self.composer.send();
                TerminalRenderer::write_message(out, self.composer.output())?;
            }
            Command::Preview => {
                self.composer.preview();
                TerminalRenderer::write_message(out, self.composer.output())?;
            }
            Command::Copy => self.copy(out)?,
            Command::Clear => self.composer.clear(),
            Command::Show => self.show(out)?,
            Command::Help => self.renderer.write_markdown(out, HELP)?,
            Command::Quit => return Ok(false),
            Command::Unknown(verb) => self.renderer.write_markdown(
                out,
                &format!("Unknown command `:{verb}`. Type `:help` for commands."),
            )?,
        }
        Ok(true)
    }

    fn copy<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let status = match self.composer.copy(&mut self.clipboard) {
            Ok(true) => "*Copied to clipboard.*".to_string(),
            Ok(false) => "Nothing to copy yet.".to_string(),
            Err(e) => {
                warn!("copy failed: {e}");
                format!("Copy failed: {e}")
            }
        };
        self.renderer.write_markdown(out, &status)
    }

    fn show<W: Write>(&self, out: &mut W) -> Result<()> {
        let composer = &self.composer;
        let fields = format!(
            "**Name:** {}\n**Tone:** {}\n**Body:** {} line(s)",
            if composer.name.is_empty() { "(empty)" } else { composer.name.as_str() },
            composer.tone.label(),
            composer.body.lines().count(),
        );
        self.renderer.write_markdown(out, &fields)
    }
}
