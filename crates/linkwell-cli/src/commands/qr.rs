//! QR command implementation.

use crate::cli::QrArgs;
use crate::error::Result;
use linkwell_domain::UrlToolkit;
use linkwell_tools::UrlTools;

/// Execute the qr command.
pub async fn execute_qr(args: QrArgs, tools: &UrlTools) -> Result<()> {
    let report = tools.generate_qr_code(&args.url, args.size).await?;
    println!("{report}");
    Ok(())
}
