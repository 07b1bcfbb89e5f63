//! Linkwell MCP Server
//!
//! Model Context Protocol server exposing the URL tool suite to AI clients
//! over stdio (JSON-RPC 2.0, one message per line).
//!
//! Provides 12 tools:
//! - `validate_url` - Format and reachability check
//! - `shorten_url` - Single-URL shorten with optional custom alias
//! - `shorten_url_batch` - Shorten up to 20 URLs in one call
//! - `get_url_metadata` - Scrape title, description, and preview data
//! - `check_url_safety` - Heuristic safety check
//! - `generate_qr_code` - QR code as a base64 SVG
//! - `expand_url` - Follow a shortened URL to its destination
//! - `create_url_collection` - Create a named collection
//! - `list_my_urls` - List saved URLs with filters
//! - `search_urls` - Search saved URLs
//! - `list_collections` - List all collections
//! - `manage_urls` - Free-text request through the workflow
//!
//! # Example
//!
//! ```no_run
//! use linkwell_mcp::McpServer;
//!
//! let mut server = McpServer::new("urls.db").unwrap();
//! server.run().unwrap();
//! ```

#![warn(missing_docs)]

mod error;
mod protocol;
mod server;
mod tools;

pub use error::McpError;
pub use server::McpServer;
