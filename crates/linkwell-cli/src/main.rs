//! Linkwell CLI - Command-line interface for the URL manager.

use clap::Parser;
use linkwell_cli::{commands, Cli, Command, Config};
use linkwell_store::SqliteStore;
use linkwell_tools::{ToolConfig, UrlTools};
use std::time::Duration;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run() -> linkwell_cli::Result<()> {
    let cli = Cli::parse();

    // Load or create config
    let config = Config::load().unwrap_or_else(|_| {
        let cfg = Config::default();
        cfg.save().ok();
        cfg
    });

    // --database / LINKWELL_DB beats the config file
    let db_path = cli.database.unwrap_or_else(|| config.database.clone());

    let store = SqliteStore::new(&db_path)?;
    let tool_config =
        ToolConfig { timeout: Duration::from_secs(config.timeout_secs), ..ToolConfig::default() };
    let tools = UrlTools::with_config(store, tool_config)?;

    match cli.command {
        Command::Ask(args) => commands::execute_ask(args, tools).await?,
        Command::Shorten(args) => commands::execute_shorten(args, &tools).await?,
        Command::Validate(args) => commands::execute_validate(args, &tools).await?,
        Command::Expand(args) => commands::execute_expand(args, &tools).await?,
        Command::Qr(args) => commands::execute_qr(args, &tools).await?,
        Command::List(args) => commands::execute_list(args, &tools).await?,
        Command::Search(args) => commands::execute_search(args, &tools).await?,
        Command::Collections(args) => commands::execute_collections(args, &tools).await?,
    }

    Ok(())
}
