//! Shorten command implementation.

use crate::cli::ShortenArgs;
use crate::error::Result;
use linkwell_domain::UrlToolkit;
use linkwell_tools::UrlTools;

/// Execute the shorten command.
pub async fn execute_shorten(args: ShortenArgs, tools: &UrlTools) -> Result<()> {
    let report = tools
        .shorten_url(
            &args.url,
            args.alias.as_deref(),
            args.collection.as_deref(),
            args.tags.as_deref(),
        )
        .await?;
    println!("{report}");
    Ok(())
}
