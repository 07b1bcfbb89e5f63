//! Validate command implementation.

use crate::cli::ValidateArgs;
use crate::error::Result;
use linkwell_domain::UrlToolkit;
use linkwell_tools::UrlTools;

/// Execute the validate command.
pub async fn execute_validate(args: ValidateArgs, tools: &UrlTools) -> Result<()> {
    let report = tools.validate_url(&args.url).await?;
    println!("{report}");
    Ok(())
}
