//! System clipboard backed by arboard.
//!
//! On Linux a selection is served by the process that set it and vanishes
//! when that process exits. Commands that copy and then exit use
//! [`SystemClipboard::detached`], which hands the text to a background
//! `missive hold-clipboard` process that keeps serving it until another
//! application takes the clipboard over.

use log::debug;
use missive_core::{Clipboard, ComposerError, Result};

/// Name of the hidden subcommand that keeps a copied text available.
pub const HOLD_COMMAND: &str = "hold-clipboard";

/// Clipboard of the desktop session.
///
/// The arboard handle is opened on the first copy, so commands that never
/// copy work on machines without a display server.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
    detach: bool,
}

impl SystemClipboard {
    /// Clipboard for long-lived hosts such as the session, which keep the
    /// handle (and with it the selection) alive themselves.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clipboard for one-shot commands; copied text outlives the process.
    pub fn detached() -> Self {
        Self {
            detach: true,
            ..Self::default()
        }
    }

    fn handle(&mut self) -> Result<&mut arboard::Clipboard> {
        if self.inner.is_none() {
            debug!("Opening system clipboard");
            self.inner = Some(arboard::Clipboard::new().map_err(ComposerError::clipboard)?);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| ComposerError::clipboard("clipboard unavailable"))
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        self.handle()?
            .set_text(text.to_owned())
            .map_err(ComposerError::clipboard)?;
        if self.detach {
            spawn_holder(text)?;
        }
        Ok(())
    }
}

/// Starts `missive hold-clipboard` with `text` on its stdin.
#[cfg(target_os = "linux")]
#[allow(clippy::zombie_processes)]
fn spawn_holder(text: &str) -> Result<()> {
    use std::{
        io::Write,
        process::{Command, Stdio},
    };

    let exe = std::env::current_exe().map_err(ComposerError::clipboard)?;
    // Not waited on: the holder outlives this process.
    let mut child = Command::new(exe)
        .arg(HOLD_COMMAND)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(ComposerError::clipboard)?;
    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(text.as_bytes())
            .map_err(ComposerError::clipboard)?;
    }
    debug!("Clipboard holder started (pid {})", child.id());
    Ok(())
}

#[cfg(not(target_os = "linux"))]
fn spawn_holder(_text: &str) -> Result<()> {
    Ok(())
}

/// Sets `text` and blocks until another application replaces it.
///
/// Outside Linux the clipboard keeps its contents without an owner, so this
/// returns right after setting them.
pub fn hold(text: String) -> Result<()> {
    let mut clipboard = arboard::Clipboard::new().map_err(ComposerError::clipboard)?;
    debug!("Holding {} bytes on the clipboard", text.len());

    #[cfg(target_os = "linux")]
    {
        use arboard::SetExtLinux;
        clipboard
            .set()
            .wait()
            .text(text)
            .map_err(ComposerError::clipboard)
    }

    #[cfg(not(target_os = "linux"))]
    {
        clipboard.set_text(text).map_err(ComposerError::clipboard)
    }
}
