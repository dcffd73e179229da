//! Terminal rendering module for composer output
//!
//! Status lines and listings are markdown rendered through termimad.
//! Composed messages are printed verbatim: they are user text, and markdown
//! characters in a message body must reach the terminal (and the clipboard)
//! unchanged.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to stdout
    pub fn render(&self, markdown: &str) -> Result<()> {
        self.write_markdown(&mut io::stdout().lock(), markdown)
    }

    /// Render markdown text to `out`
    pub fn write_markdown<W: Write>(&self, out: &mut W, markdown: &str) -> Result<()> {
        for line in markdown.lines() {
            if !self.rich_enabled {
                writeln!(out, "{line}")?;
            } else if line.starts_with('#') {
                writeln!(out, "\x1b[34m{line}\x1b[0m")?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
            }
        }
        Ok(())
    }

    /// Print a composed message to stdout
    pub fn message(&self, text: &str) -> Result<()> {
        Self::write_message(&mut io::stdout().lock(), text)
    }

    /// Write a composed message to `out`, exactly as formatted
    pub fn write_message<W: Write>(out: &mut W, text: &str) -> Result<()> {
        writeln!(out, "{text}")?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
    }

    #[test]
    fn test_default_is_rich() {
        let renderer = TerminalRenderer::default();
        assert!(renderer.rich_enabled);
    }

    #[test]
    fn test_plain_markdown_passes_through() {
        let renderer = TerminalRenderer::new(false);
        let mut out = Vec::new();
        renderer
            .write_markdown(&mut out, "# Tones\n\n- **Friendly**")
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "# Tones\n\n- **Friendly**\n");
    }

    #[test]
    fn test_message_is_verbatim() {
        let mut out = Vec::new();
        TerminalRenderer::write_message(&mut out, "Hi *Ana* 👋\n\nx").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Hi *Ana* 👋\n\nx\n");
    }
}
