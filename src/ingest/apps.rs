use std::path::Path;

use anyhow::Result;
use serde_json::Value;

use crate::models::{AssetKind, AssetRecord, ConnectorRef};

use super::{first_str, records};

pub struct AppIngestor;

impl AppIngestor {
    pub fn new() -> Self {
        Self
    }
}

impl super::Ingestor for AppIngestor {
    /// Parse `apps.json` — canvas app inventory. Each entry carries its
    /// connections in a `connectionReferences` property bag keyed by an
    /// opaque reference id.
    fn ingest(&self, path: &Path) -> Result<Vec<AssetRecord>> {
        let file = path.join("apps.json");
        if !file.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&file)?;
        let json: Value = serde_json::from_str(&content)?;

        let mut assets = Vec::new();
        for entry in records(&json) {
            let Some(id) = first_str(entry, &["name", "id", "appName"]) else {
                continue;
            };
            let name = first_str(entry, &["properties.displayName", "displayName", "name"])
                .unwrap_or(id);

            let mut asset = AssetRecord::new(id, name, AssetKind::App);
            asset.connectors = connection_references(entry);
            assets.push(asset);
        }

        Ok(assets)
    }
}

/// Extract connector descriptors from a `connectionReferences` bag (a map of
/// opaque reference ids to connection objects). Also accepts the flat
/// `connections` array some older exports use.
pub(super) fn connection_references(entry: &Value) -> Vec<ConnectorRef> {
    let mut connectors = Vec::new();

    let bag = entry
        .get("properties")
        .and_then(|p| p.get("connectionReferences"))
        .or_else(|| entry.get("connectionReferences"));

    if let Some(map) = bag.and_then(Value::as_object) {
        for reference in map.values() {
            connectors.push(connector_from(reference));
        }
    }

    if let Some(list) = entry.get("connections").and_then(Value::as_array) {
        for reference in list {
            connectors.push(connector_from(reference));
        }
    }

    connectors
}

fn connector_from(reference: &Value) -> ConnectorRef {
    ConnectorRef {
        type_hint: first_str(reference, &["type", "connectorName", "apiTier"])
            .map(str::to_string),
        api_identifier: first_str(reference, &["id", "apiId", "connectionName"])
            .map(str::to_string),
        display_label: first_str(reference, &["displayName", "name"]).map(str::to_string),
    }
}
