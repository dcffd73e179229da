//! MCP tool handlers implementation

use std::sync::Arc;

use log::debug;
use missive_core::{params as core, Config};
use rmcp::{
    model::{CallToolResult, Content},
    ErrorData,
};
use schemars::JsonSchema;
use serde::Deserialize;

use super::errors::to_mcp_error;
use crate::cli::tone_listing;

// ============================================================================
// Generic Parameter Wrapper Implementation
// ============================================================================
//
// The wrapper adds the MCP-facing derives to a core parameter type while the
// core type itself stays free of protocol concerns. #[serde(transparent)]
// passes (de)serialization straight through to the wrapped type.

/// Generic MCP wrapper for core parameter types with serde integration
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct McpParams<T>(T)
where
    T: JsonSchema;

impl<T> JsonSchema for McpParams<T>
where
    T: JsonSchema,
{
    fn schema_name() -> std::borrow::Cow<'static, str> {
        T::schema_name()
    }

    fn json_schema(g: &mut schemars::SchemaGenerator) -> schemars::Schema {
        T::json_schema(g)
    }
}

impl<T> McpParams<T>
where
    T: JsonSchema,
{
    pub fn into_inner(self) -> T {
        self.0
    }
}

pub type FormatMessage = McpParams<core::FormatMessage>;

pub type McpResult = Result<CallToolResult, ErrorData>;

/// Handler implementations for the MCP server
pub struct McpHandlers {
    config: Arc<Config>,
}

impl McpHandlers {
    pub fn new(config: Arc<Config>) -> Self {
        Self { config }
    }

    /// Formats a message with send semantics.
    pub fn format_message(&self, params: FormatMessage) -> McpResult {
        debug!("format_message: {:?}", params);

        let params = params.into_inner();
        params
            .validate()
            .map_err(|e| to_mcp_error("Failed to format message", &e))?;

        let mut composer = params.into_composer(&self.config);
        composer.send();
        Ok(CallToolResult::success(vec![Content::text(
            composer.output(),
        )]))
    }

    /// Lists the tones with the configured default marked.
    pub fn list_tones(&self) -> McpResult {
        debug!("list_tones");
        Ok(CallToolResult::success(vec![Content::text(tone_listing(
            self.config.default_tone,
        ))]))
    }
}
