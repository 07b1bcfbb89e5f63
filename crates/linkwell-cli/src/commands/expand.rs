//! Expand command implementation.

use crate::cli::ExpandArgs;
use crate::error::Result;
use linkwell_domain::UrlToolkit;
use linkwell_tools::UrlTools;

/// Execute the expand command.
pub async fn execute_expand(args: ExpandArgs, tools: &UrlTools) -> Result<()> {
    let report = tools.expand_url(&args.url).await?;
    println!("{report}");
    Ok(())
}
