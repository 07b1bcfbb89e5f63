//! Linkwell MCP Server - Main entry point

use linkwell_mcp::McpServer;
use std::env;
use tracing::Level;

fn main() {
    // Log to stderr; stdout carries the JSON-RPC transport
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(Level::INFO)
        .init();

    let db_path = env::var("LINKWELL_DB").unwrap_or_else(|_| "urls.db".to_string());

    let mut server = match McpServer::new(&db_path) {
        Ok(server) => server,
        Err(e) => {
            eprintln!("Failed to create MCP server: {e}");
            std::process::exit(1);
        }
    };

    // Blocks until stdin closes
    if let Err(e) = server.run() {
        eprintln!("MCP server error: {e}");
        std::process::exit(1);
    }
}
