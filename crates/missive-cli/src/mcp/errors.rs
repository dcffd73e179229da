//! Error handling utilities for MCP server

use missive_core::ComposerError;
use rmcp::ErrorData;

/// Helper to convert composer errors to MCP errors
///
/// Input validation failures are reported as invalid parameters so clients
/// can correct the call; everything else is an internal error.
pub fn to_mcp_error(message: &str, error: &ComposerError) -> ErrorData {
    match error {
        ComposerError::InvalidInput { reason, .. } => {
            ErrorData::invalid_params(reason.clone(), None)
        }
        _ => ErrorData::internal_error(format!("{}: {}", message, error), None),
    }
}
