//! MCP server implementation for Missive
//!
//! Exposes the message formatter as Model Context Protocol tools so that
//! assistants can draft messages with the same templates as the CLI.

use std::sync::Arc;

use anyhow::Result;
use log::{debug, error, info};
use missive_core::Config;
use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};
use tokio::signal::unix::{signal, SignalKind};

pub mod errors;
pub mod handlers;

pub use handlers::{FormatMessage, McpResult};

/// MCP server for Missive
#[derive(Clone)]
pub struct MissiveMcpServer {
    config: Arc<Config>,
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl MissiveMcpServer {
    /// Create a new Missive MCP server
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            tool_router: Self::tool_router(),
        }
    }

    #[tool(
        name = "format_message",
        description = "Format a message from a body, an optional sender name and an optional tone ('friendly', 'formal' or 'funny', case-insensitive; unknown tones use 'friendly'). Name and body are trimmed; a blank name is signed as 'Friend'. Fails with invalid params when the body is blank. Returns the composed message text."
    )]
    async fn format_message(&self, Parameters(params): Parameters<FormatMessage>) -> McpResult {
        handlers::McpHandlers::new(self.config.clone()).format_message(params)
    }

    #[tool(
        name = "list_tones",
        description = "List the available message tones and which one is used when no tone is given."
    )]
    async fn list_tones(&self) -> McpResult {
        handlers::McpHandlers::new(self.config.clone()).list_tones()
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for MissiveMcpServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "missive".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                ..Default::default()
            },
            instructions: Some(r#"Missive drafts short messages from a body, a sender name and a tone.

## Tones
- **friendly** (default): "Hi {name} 👋" greeting, signed with the name
- **formal**: "Dear {name}," salutation, "Sincerely," sign-off
- **funny**: "Yo {name}!" greeting with 😂, signed "Your pal"

## Tools
- `format_message`: compose a message; the body must not be blank
- `list_tones`: show the tones and the configured default"#.to_string()),
        }
    }
}

/// Run the MCP server with stdio transport
pub async fn run_stdio_server(server: MissiveMcpServer) -> Result<()> {
    use rmcp::{transport::stdio, ServiceExt};

    info!("Starting Missive MCP server on stdio");
    debug!(
        "Server created with {} tools",
        server.tool_router.list_all().len()
    );

    let service = server.serve(stdio()).await.inspect_err(|e| {
        error!("serving error: {e:?}");
    })?;

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;

    tokio::select! {
        result = service.waiting() => {
            match result {
                Ok(_) => info!("MCP server stopped normally"),
                Err(e) => error!("MCP server error: {e:?}"),
            }
        }
        _ = sigint.recv() => {
            info!("Received SIGINT, shutting down gracefully...");
        }
        _ = sigterm.recv() => {
            info!("Received SIGTERM, shutting down gracefully...");
        }
    }

    info!("MCP server shutdown complete");
    Ok(())
}
