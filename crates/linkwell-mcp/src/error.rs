//! Error types for the agent-tool server.

use thiserror::Error;

/// Server-side error for one request.
#[derive(Error, Debug)]
pub enum McpError {
    /// Invalid request format or parameters
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Tool not found
    #[error("Tool not found: {0}")]
    ToolNotFound(String),

    /// Tool parameters failed to deserialize
    #[error("Invalid params: {0}")]
    InvalidParams(String),

    /// A tool operation failed
    #[error("Tool error: {0}")]
    Tool(#[from] linkwell_tools::ToolError),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl McpError {
    /// Convert to a JSON-RPC error code.
    pub fn error_code(&self) -> i32 {
        match self {
            McpError::InvalidRequest(_) => -32600,
            McpError::ToolNotFound(_) => -32601,
            McpError::InvalidParams(_) => -32602,
            McpError::Tool(_) => -32000,
            McpError::Json(_) => -32700,
            McpError::Io(_) => -32000,
        }
    }
}
