//! Ask command implementation.

use crate::cli::AskArgs;
use crate::error::{CliError, Result};
use linkwell_tools::UrlTools;
use linkwell_workflow::Workflow;

/// Execute the ask command: run a free-text request through the workflow.
pub async fn execute_ask(args: AskArgs, tools: UrlTools) -> Result<()> {
    let request = args.request.join(" ");
    if request.trim().is_empty() {
        return Err(CliError::InvalidInput("Empty request".to_string()));
    }

    let workflow = Workflow::new(tools);
    let summary = workflow.run(&request).await;
    println!("{summary}");

    Ok(())
}
