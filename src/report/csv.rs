use std::io::Write;
use std::path::Path;

use anyhow::Result;

use crate::models::{AssetRecord, EvidenceSource};

/// Write one row per piece of evidence — the flat shape migration planners
/// pivot on in a spreadsheet.
pub fn render(matched: &[AssetRecord], out_path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(out_path)?;
    writeln!(file, "asset_id,asset_name,kind,service,matched_key,source")?;

    for asset in matched {
        for evidence in asset.matched_services.values().flatten() {
            let source = match &evidence.source {
                EvidenceSource::Connector { descriptor } => descriptor.clone(),
                EvidenceSource::Referenced { asset_id } => format!("via:{}", asset_id),
            };
            writeln!(
                file,
                "{},{},{},{},{},{}",
                escape(&asset.id),
                escape(&asset.name),
                asset.kind,
                escape(&evidence.service),
                escape(&evidence.matched_key),
                escape(&source),
            )?;
        }
    }

    Ok(())
}

/// Minimal CSV quoting: wrap fields containing a comma, quote, or newline.
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
