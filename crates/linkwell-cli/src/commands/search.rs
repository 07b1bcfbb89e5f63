//! Search command implementation.

use crate::cli::SearchArgs;
use crate::error::{CliError, Result};
use linkwell_domain::UrlToolkit;
use linkwell_tools::UrlTools;

/// Execute the search command.
pub async fn execute_search(args: SearchArgs, tools: &UrlTools) -> Result<()> {
    if args.term.trim().is_empty() {
        return Err(CliError::InvalidInput("Empty search term".to_string()));
    }

    let listing = tools.search_urls(&args.term, args.limit).await?;
    println!("{listing}");
    Ok(())
}
