use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::{cli::ComposeArgs, clipboard::HOLD_COMMAND};

/// Compose friendly, formal or funny messages from the terminal
///
/// Missive formats a sender name and a message body into one of three
/// templates, prints the result and can place it on the system clipboard.
/// Run without a command to start an interactive compose session, or use
/// `serve` to expose the formatter as an MCP tool.
#[derive(Parser)]
#[command(version, about, name = "missive")]
pub struct Args {
    /// Path to the settings file. Defaults to
    /// $XDG_CONFIG_HOME/missive/config.json
    #[arg(long, global = true)]
    pub config_file: Option<PathBuf>,

    /// Disable colored output and use plain text
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands for the Missive CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Format a message; the body must not be blank
    #[command(alias = "s")]
    Send(ComposeArgs),
    /// Format a message verbatim, without trimming or validation
    #[command(alias = "p")]
    Preview(ComposeArgs),
    /// List the available tones
    Tones,
    /// Start an interactive compose session on stdin
    Session,
    /// Start the MCP server
    Serve,
    /// Keep text read from stdin on the clipboard until it is replaced
    #[command(name = HOLD_COMMAND, hide = true)]
    HoldClipboard,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hold_clipboard_command_parses() {
        let args = Args::try_parse_from(["missive", HOLD_COMMAND]).unwrap();
        assert!(matches!(args.command, Some(Commands::HoldClipboard)));
    }

    #[test]
    fn test_no_command_starts_session() {
        let args = Args::try_parse_from(["missive", "--no-color"]).unwrap();
        assert!(args.command.is_none());
        assert!(args.no_color);
    }
}
