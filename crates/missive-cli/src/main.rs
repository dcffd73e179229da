//! Missive CLI Application
//!
//! Command-line interface for the Missive message composer.

mod args;
mod cli;
mod clipboard;
mod mcp;
mod renderer;
mod session;

use std::{
    io::{self, Read},
    path::PathBuf,
};

use anyhow::{Context, Result};
use args::{Args, Commands};
use clap::Parser;
use cli::Cli;
use log::info;
use mcp::{run_stdio_server, MissiveMcpServer};
use missive_core::{Config, ConfigBuilder};
use renderer::TerminalRenderer;

fn load_config(config_file: Option<PathBuf>) -> Result<Config> {
    ConfigBuilder::new()
        .with_config_path(config_file)
        .build()
        .context("Failed to load settings")
}

fn cli(config_file: Option<PathBuf>, no_color: bool) -> Result<Cli> {
    Ok(Cli::new(
        load_config(config_file)?,
        TerminalRenderer::new(!no_color),
    ))
}

fn hold_clipboard() -> Result<()> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("Failed to read clipboard text from stdin")?;
    clipboard::hold(text).context("Failed to hold clipboard")
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let Args {
        config_file,
        no_color,
        command,
    } = Args::parse();

    info!("Missive started");

    match command {
        Some(Commands::Send(args)) => cli(config_file, no_color)?.send(args),
        Some(Commands::Preview(args)) => cli(config_file, no_color)?.preview(args),
        Some(Commands::Tones) => cli(config_file, no_color)?.tones(),
        Some(Commands::Serve) => {
            let config = load_config(config_file)?;
            info!("Starting Missive MCP server");
            run_stdio_server(MissiveMcpServer::new(config))
                .await
                .context("MCP server failed")
        }
        Some(Commands::HoldClipboard) => hold_clipboard(),
        Some(Commands::Session) | None => cli(config_file, no_color)?.session(),
    }
}
