//! Agent-tool server over stdio.

use linkwell_store::SqliteStore;
use linkwell_tools::{ToolError, UrlTools};
use linkwell_workflow::Workflow;
use serde_json::{json, Value};
use std::io::{BufRead, BufReader, Write};
use tokio::runtime::Runtime;
use tracing::{debug, error, info};

use crate::error::McpError;
use crate::protocol::*;
use crate::tools;

/// The stdio JSON-RPC server.
///
/// Reads one request per line from stdin and writes one response per line to
/// stdout; all logging goes to stderr so the transport stays clean.
pub struct McpServer {
    workflow: Workflow<UrlTools>,
    runtime: Runtime,
}

impl McpServer {
    /// Create a server over a SQLite database at `db_path`.
    pub fn new(db_path: &str) -> Result<Self, McpError> {
        let runtime = Runtime::new()?;
        let store = SqliteStore::new(db_path).map_err(ToolError::from)?;
        let tools = UrlTools::new(store)?;
        let workflow = Workflow::new(tools);

        Ok(Self { workflow, runtime })
    }

    /// Run the server until stdin closes.
    pub fn run(&mut self) -> Result<(), McpError> {
        info!("linkwell MCP server started");

        let stdin = std::io::stdin();
        let reader = BufReader::new(stdin);
        let mut stdout = std::io::stdout();

        for line in reader.lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }

            debug!("Received request: {}", line);

            let request: JsonRpcRequest = match serde_json::from_str(&line) {
                Ok(req) => req,
                Err(e) => {
                    error!("Failed to parse request: {}", e);
                    let response =
                        JsonRpcError::new(None, -32700, format!("Parse error: {e}"));
                    self.write_response(&mut stdout, &serde_json::to_value(&response)?)?;
                    continue;
                }
            };

            let response = self.handle_request(request)?;
            self.write_response(&mut stdout, &response)?;
        }

        info!("linkwell MCP server stopped");
        Ok(())
    }

    fn handle_request(&mut self, request: JsonRpcRequest) -> Result<Value, McpError> {
        let id = request.id.clone();

        let value = match request.method.as_str() {
            "initialize" => self.handle_initialize(id)?,
            "tools/list" => self.handle_tools_list(id)?,
            "tools/call" => self.handle_tool_call(id, request.params)?,
            _ => serde_json::to_value(JsonRpcError::new(
                id,
                -32601,
                format!("Method not found: {}", request.method),
            ))?,
        };
        Ok(value)
    }

    fn handle_initialize(&self, id: Option<Value>) -> Result<Value, McpError> {
        let response = InitializeResponse {
            protocol_version: "0.1.0".to_string(),
            server_info: ServerInfo {
                name: "linkwell-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            capabilities: Capabilities { tools: ToolsCapability { supported: true } },
        };

        let json_response = JsonRpcResponse::new(id, serde_json::to_value(response)?);
        Ok(serde_json::to_value(json_response)?)
    }

    fn handle_tools_list(&self, id: Option<Value>) -> Result<Value, McpError> {
        let response = ToolListResponse { tools: tool_definitions() };
        let json_response = JsonRpcResponse::new(id, serde_json::to_value(response)?);
        Ok(serde_json::to_value(json_response)?)
    }

    fn handle_tool_call(&mut self, id: Option<Value>, params: Value) -> Result<Value, McpError> {
        let tool_name = match params.get("name").and_then(|v| v.as_str()) {
            Some(name) => name.to_string(),
            None => {
                let error = JsonRpcError::new(id, -32602, "Missing tool name".to_string());
                return Ok(serde_json::to_value(error)?);
            }
        };

        let arguments = params.get("arguments").cloned().unwrap_or_else(|| json!({}));

        let result = self.dispatch(&tool_name, arguments);
        match result {
            Ok(value) => Ok(serde_json::to_value(JsonRpcResponse::new(id, value))?),
            Err(e) => {
                Ok(serde_json::to_value(JsonRpcError::new(id, e.error_code(), e.to_string()))?)
            }
        }
    }

    fn dispatch(&mut self, tool_name: &str, arguments: Value) -> Result<Value, McpError> {
        let suite = self.workflow.toolkit();
        match tool_name {
            "validate_url" => {
                let params: tools::ValidateParams = parse_params(arguments)?;
                let result = self.runtime.block_on(tools::handle_validate(suite, params))?;
                Ok(serde_json::to_value(result)?)
            }
            "shorten_url" => {
                let params: tools::ShortenParams = parse_params(arguments)?;
                let result = self.runtime.block_on(tools::handle_shorten(suite, params))?;
                Ok(serde_json::to_value(result)?)
            }
            "shorten_url_batch" => {
                let params: tools::ShortenBatchParams = parse_params(arguments)?;
                let result = self.runtime.block_on(tools::handle_shorten_batch(suite, params))?;
                Ok(serde_json::to_value(result)?)
            }
            "get_url_metadata" => {
                let params: tools::MetadataParams = parse_params(arguments)?;
                let result = self.runtime.block_on(tools::handle_metadata(suite, params))?;
                Ok(serde_json::to_value(result)?)
            }
            "check_url_safety" => {
                let params: tools::SafetyParams = parse_params(arguments)?;
                let result = self.runtime.block_on(tools::handle_safety(suite, params))?;
                Ok(serde_json::to_value(result)?)
            }
            "generate_qr_code" => {
                let params: tools::QrParams = parse_params(arguments)?;
                let result = self.runtime.block_on(tools::handle_qr(suite, params))?;
                Ok(serde_json::to_value(result)?)
            }
            "expand_url" => {
                let params: tools::ExpandParams = parse_params(arguments)?;
                let result = self.runtime.block_on(tools::handle_expand(suite, params))?;
                Ok(serde_json::to_value(result)?)
            }
            "create_url_collection" => {
                let params: tools::CreateCollectionParams = parse_params(arguments)?;
                let result =
                    self.runtime.block_on(tools::handle_create_collection(suite, params))?;
                Ok(serde_json::to_value(result)?)
            }
            "list_my_urls" => {
                let params: tools::ListUrlsParams = parse_params(arguments)?;
                let result = self.runtime.block_on(tools::handle_list_urls(suite, params))?;
                Ok(serde_json::to_value(result)?)
            }
            "search_urls" => {
                let params: tools::SearchParams = parse_params(arguments)?;
                let result = self.runtime.block_on(tools::handle_search(suite, params))?;
                Ok(serde_json::to_value(result)?)
            }
            "list_collections" => {
                let result = self.runtime.block_on(tools::handle_list_collections(suite))?;
                Ok(serde_json::to_value(result)?)
            }
            "manage_urls" => {
                let params: tools::ManageParams = parse_params(arguments)?;
                let result =
                    self.runtime.block_on(tools::handle_manage(&self.workflow, params))?;
                Ok(serde_json::to_value(result)?)
            }
            other => Err(McpError::ToolNotFound(other.to_string())),
        }
    }

    fn write_response<W: Write>(&self, writer: &mut W, response: &Value) -> Result<(), McpError> {
        let response_str = serde_json::to_string(response)?;
        writeln!(writer, "{response_str}")?;
        writer.flush()?;
        debug!("Sent response: {}", response_str);
        Ok(())
    }
}

fn parse_params<T: serde::de::DeserializeOwned>(arguments: Value) -> Result<T, McpError> {
    serde_json::from_value(arguments).map_err(|e| McpError::InvalidParams(e.to_string()))
}

fn url_only_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "url": {"type": "string", "description": "The URL to operate on"}
        },
        "required": ["url"]
    })
}

/// Definitions for the tools/list response.
fn tool_definitions() -> Vec<ToolDefinition> {
    vec![
        ToolDefinition {
            name: "validate_url".to_string(),
            description: "Check whether a URL is well-formed and reachable".to_string(),
            input_schema: url_only_schema(),
        },
        ToolDefinition {
            name: "shorten_url".to_string(),
            description: "Shorten a URL with optional custom alias, collection, and tags"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "url": {"type": "string", "description": "The URL to shorten"},
                    "custom_alias": {"type": "string", "description": "Custom alias (v.gd only)"},
                    "collection_name": {"type": "string", "description": "Collection to file the record under"},
                    "tags": {"type": "string", "description": "Comma-separated tags"}
                },
                "required": ["url"]
            }),
        },
        ToolDefinition {
            name: "shorten_url_batch".to_string(),
            description: "Shorten up to 20 newline- or comma-separated URLs in one call"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "urls": {"type": "string", "description": "Newline- or comma-separated URLs"},
                    "collection_name": {"type": "string", "description": "Collection to file the records under"},
                    "tags": {"type": "string", "description": "Comma-separated tags applied to every record"}
                },
                "required": ["urls"]
            }),
        },
        ToolDefinition {
            name: "get_url_metadata".to_string(),
            description: "Fetch a page and scrape its title, description, and preview data"
                .to_string(),
            input_schema: url_only_schema(),
        },
        ToolDefinition {
            name: "check_url_safety".to_string(),
            description: "Run heuristic safety checks against a URL".to_string(),
            input_schema: url_only_schema(),
        },
        ToolDefinition {
            name: "generate_qr_code".to_string(),
            description: "Generate a QR code for a URL as a base64 SVG".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "url": {"type": "string", "description": "The URL to encode"},
                    "size": {"type": "integer", "description": "Module size in pixels (default 10)"}
                },
                "required": ["url"]
            }),
        },
        ToolDefinition {
            name: "expand_url".to_string(),
            description: "Follow a shortened URL to its final destination".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "shortened_url": {"type": "string", "description": "The shortened URL to follow"}
                },
                "required": ["shortened_url"]
            }),
        },
        ToolDefinition {
            name: "create_url_collection".to_string(),
            description: "Create a named collection for grouping saved URLs".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "name": {"type": "string", "description": "Collection name (unique)"},
                    "description": {"type": "string", "description": "Optional description"}
                },
                "required": ["name"]
            }),
        },
        ToolDefinition {
            name: "list_my_urls".to_string(),
            description: "List saved URLs, optionally filtered by collection and tags".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "collection": {"type": "string", "description": "Filter by collection"},
                    "tags": {"type": "string", "description": "Comma-separated tags; records must carry all of them"},
                    "limit": {"type": "integer", "description": "Maximum records (default 100)", "default": 100}
                }
            }),
        },
        ToolDefinition {
            name: "search_urls".to_string(),
            description: "Search saved URLs by title, description, or URL".to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "search_term": {"type": "string", "description": "Search term"},
                    "limit": {"type": "integer", "description": "Maximum records (default 50)", "default": 50}
                },
                "required": ["search_term"]
            }),
        },
        ToolDefinition {
            name: "list_collections".to_string(),
            description: "List all collections".to_string(),
            input_schema: json!({"type": "object", "properties": {}}),
        },
        ToolDefinition {
            name: "manage_urls".to_string(),
            description: "Process a free-text URL management request through the workflow"
                .to_string(),
            input_schema: json!({
                "type": "object",
                "properties": {
                    "request": {"type": "string", "description": "Free-text request, e.g. 'shorten these URLs: ...'"}
                },
                "required": ["request"]
            }),
        },
    ]
}
