//! Collections command implementation.

use crate::cli::{CollectionsAction, CollectionsArgs};
use crate::error::Result;
use linkwell_domain::UrlToolkit;
use linkwell_tools::UrlTools;

/// Execute the collections command.
pub async fn execute_collections(args: CollectionsArgs, tools: &UrlTools) -> Result<()> {
    match args.action {
        CollectionsAction::List => {
            let listing = tools.list_collections().await?;
            println!("{listing}");
        }
        CollectionsAction::Create { name, description } => {
            let report = tools.create_url_collection(&name, description.as_deref()).await?;
            println!("{report}");
        }
    }
    Ok(())
}
