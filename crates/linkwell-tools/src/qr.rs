//! QR code generation.
//!
//! Renders the code as SVG and embeds it base64-encoded in the report as a
//! `data:` URL payload.

use crate::ToolError;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use linkwell_domain::QrReport;
use qrcode::render::svg;
use qrcode::QrCode;

/// Default pixels per module.
const DEFAULT_MODULE_SIZE: u32 = 10;
/// Quiet-zone border in modules, on each side.
const QUIET_ZONE_MODULES: u32 = 4;

pub(crate) fn generate_qr_code(url: &str, size: Option<u32>) -> Result<QrReport, ToolError> {
    let module_size = size.unwrap_or(DEFAULT_MODULE_SIZE).clamp(1, 40);

    let code = QrCode::new(url.as_bytes()).map_err(|e| ToolError::Qr(e.to_string()))?;

    let modules = code.width() as u32 + 2 * QUIET_ZONE_MODULES;
    let pixels = modules * module_size;

    let image = code
        .render::<svg::Color>()
        .min_dimensions(pixels, pixels)
        .quiet_zone(true)
        .build();

    Ok(QrReport {
        url: url.to_string(),
        format: "SVG".to_string(),
        dimensions: format!("{pixels}x{pixels}"),
        base64: STANDARD.encode(image.as_bytes()),
    })
}
