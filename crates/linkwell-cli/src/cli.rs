//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};

/// Linkwell CLI - shorten, inspect, and organize URLs.
#[derive(Debug, Parser)]
#[command(name = "linkwell")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the SQLite database
    #[arg(short, long, global = true, env = "LINKWELL_DB")]
    pub database: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Process a free-text request through the workflow
    Ask(AskArgs),

    /// Shorten a URL
    Shorten(ShortenArgs),

    /// Validate a URL for format and reachability
    Validate(ValidateArgs),

    /// Expand a shortened URL to its final destination
    Expand(ExpandArgs),

    /// Generate a QR code for a URL
    Qr(QrArgs),

    /// List saved URLs
    List(ListArgs),

    /// Search saved URLs
    Search(SearchArgs),

    /// Manage collections
    Collections(CollectionsArgs),
}

/// Arguments for the ask command.
#[derive(Debug, Parser)]
pub struct AskArgs {
    /// The request text, e.g. "shorten these URLs: https://a.com https://b.com"
    pub request: Vec<String>,
}

/// Arguments for the shorten command.
#[derive(Debug, Parser)]
pub struct ShortenArgs {
    /// The URL to shorten
    pub url: String,

    /// Custom alias (v.gd only)
    #[arg(short, long)]
    pub alias: Option<String>,

    /// Collection to file the record under
    #[arg(short, long)]
    pub collection: Option<String>,

    /// Comma-separated tags
    #[arg(short, long)]
    pub tags: Option<String>,
}

/// Arguments for the validate command.
#[derive(Debug, Parser)]
pub struct ValidateArgs {
    /// The URL to check
    pub url: String,
}

/// Arguments for the expand command.
#[derive(Debug, Parser)]
pub struct ExpandArgs {
    /// The shortened URL to follow
    pub url: String,
}

/// Arguments for the qr command.
#[derive(Debug, Parser)]
pub struct QrArgs {
    /// The URL to encode
    pub url: String,

    /// Module size in pixels
    #[arg(short, long)]
    pub size: Option<u32>,
}

/// Arguments for the list command.
#[derive(Debug, Parser)]
pub struct ListArgs {
    /// Filter by collection
    #[arg(short, long)]
    pub collection: Option<String>,

    /// Comma-separated tags; records must carry all of them
    #[arg(short, long)]
    pub tags: Option<String>,

    /// Maximum number of records
    #[arg(short, long, default_value = "100")]
    pub limit: usize,
}

/// Arguments for the search command.
#[derive(Debug, Parser)]
pub struct SearchArgs {
    /// Term matched against title, description, and original URL
    pub term: String,

    /// Maximum number of records
    #[arg(short, long, default_value = "50")]
    pub limit: usize,
}

/// Arguments for collection management.
#[derive(Debug, Parser)]
pub struct CollectionsArgs {
    #[command(subcommand)]
    pub action: CollectionsAction,
}

/// Collection management actions.
#[derive(Debug, Subcommand)]
pub enum CollectionsAction {
    /// List all collections
    List,

    /// Create a new collection
    Create {
        /// Collection name (unique)
        name: String,
        /// Optional description
        #[arg(long)]
        description: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_command_parsing() {
        let cli = Cli::parse_from([
            "linkwell",
            "shorten",
            "https://www.python.org",
            "--alias",
            "py",
            "--tags",
            "python, docs",
        ]);
        match cli.command {
            Command::Shorten(args) => {
                assert_eq!(args.url, "https://www.python.org");
                assert_eq!(args.alias.as_deref(), Some("py"));
                assert_eq!(args.tags.as_deref(), Some("python, docs"));
            }
            _ => panic!("Expected Shorten command"),
        }
    }

    #[test]
    fn test_ask_collects_free_text() {
        let cli = Cli::parse_from(["linkwell", "ask", "check", "https://a.com"]);
        match cli.command {
            Command::Ask(args) => assert_eq!(args.request.join(" "), "check https://a.com"),
            _ => panic!("Expected Ask command"),
        }
    }

    #[test]
    fn test_collections_create_parsing() {
        let cli = Cli::parse_from([
            "linkwell",
            "collections",
            "create",
            "research",
            "--description",
            "reading list",
        ]);
        match cli.command {
            Command::Collections(args) => match args.action {
                CollectionsAction::Create { name, description } => {
                    assert_eq!(name, "research");
                    assert_eq!(description.as_deref(), Some("reading list"));
                }
                _ => panic!("Expected Create action"),
            },
            _ => panic!("Expected Collections command"),
        }
    }

    #[test]
    fn test_database_flag_is_global() {
        let cli =
            Cli::parse_from(["linkwell", "list", "--database", "/tmp/x.db", "--limit", "5"]);
        assert_eq!(cli.database.as_deref(), Some("/tmp/x.db"));
    }
}
