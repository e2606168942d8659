use std::path::Path;

use anyhow::Result;
use regex::Regex;
use serde_json::Value;

use crate::models::{AssetKind, AssetRecord, ConnectorRef};

use super::{first_str, records};

pub struct ReportAssetIngestor;

impl ReportAssetIngestor {
    pub fn new() -> Self {
        Self
    }
}

impl super::Ingestor for ReportAssetIngestor {
    /// Parse `reportAssets.json` — dataset/report inventory. Reporting assets
    /// describe dependencies as data sources (`datasourceType` plus
    /// `connectionDetails`), not as connector references; the descriptors
    /// built here are classified against the data-source pattern table.
    fn ingest(&self, path: &Path) -> Result<Vec<AssetRecord>> {
        let file = path.join("reportAssets.json");
        if !file.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&file)?;
        let json: Value = serde_json::from_str(&content)?;

        let mut assets = Vec::new();
        for entry in records(&json) {
            let Some(id) = first_str(entry, &["id", "name", "datasetId"]) else {
                continue;
            };
            let name = first_str(entry, &["name", "displayName"]).unwrap_or(id);

            let mut asset = AssetRecord::new(id, name, AssetKind::ReportAsset);
            if let Some(datasources) = entry.get("datasources").and_then(Value::as_array) {
                asset.connectors = datasources.iter().map(datasource_connector).collect();
            }
            assets.push(asset);
        }

        Ok(assets)
    }
}

fn datasource_connector(datasource: &Value) -> ConnectorRef {
    let api_identifier = first_str(
        datasource,
        &[
            "connectionDetails.url",
            "connectionDetails.server",
            "connectionDetails.database",
        ],
    )
    .map(str::to_string)
    .or_else(|| {
        first_str(datasource, &["connectionString", "connectionDetails.connectionString"])
            .and_then(data_source_from_connection_string)
    });

    ConnectorRef {
        type_hint: first_str(datasource, &["datasourceType", "type"]).map(str::to_string),
        api_identifier,
        display_label: first_str(datasource, &["name", "displayName"]).map(str::to_string),
    }
}

/// Pull the `Data Source=...` token out of a raw OLE DB-style connection
/// string. Returns `None` when the token is absent; never errors.
fn data_source_from_connection_string(connection_string: &str) -> Option<String> {
    // Pattern is static, so a compile failure would be a bug caught by tests.
    let re = Regex::new(r"(?i)data source=([^;]+)").ok()?;
    re.captures(connection_string)
        .map(|caps| caps[1].trim().to_string())
}
