//! List command implementation.

use crate::cli::ListArgs;
use crate::error::Result;
use linkwell_domain::UrlToolkit;
use linkwell_tools::UrlTools;

/// Execute the list command.
pub async fn execute_list(args: ListArgs, tools: &UrlTools) -> Result<()> {
    let listing = tools
        .list_my_urls(args.collection.as_deref(), args.tags.as_deref(), args.limit)
        .await?;
    println!("{listing}");
    Ok(())
}
