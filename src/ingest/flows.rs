use std::path::Path;

use anyhow::Result;
use serde_json::Value;

use crate::models::{AssetKind, AssetRecord, ConnectorRef};

use super::apps::connection_references;
use super::{first_str, records};

pub struct FlowIngestor;

impl FlowIngestor {
    pub fn new() -> Self {
        Self
    }
}

impl super::Ingestor for FlowIngestor {
    /// Parse `flows.json` — cloud flow inventory. Flows expose their
    /// connectors twice: as `connectionReferences` (like apps) and inside
    /// `definitionSummary`, which lists the trigger/action operations. Both
    /// are collected; the scanner dedupes overlapping matches.
    fn ingest(&self, path: &Path) -> Result<Vec<AssetRecord>> {
        let file = path.join("flows.json");
        if !file.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&file)?;
        let json: Value = serde_json::from_str(&content)?;

        let mut assets = Vec::new();
        for entry in records(&json) {
            let Some(id) = first_str(entry, &["name", "id", "flowName"]) else {
                continue;
            };
            let name = first_str(entry, &["properties.displayName", "displayName", "name"])
                .unwrap_or(id);

            let mut asset = AssetRecord::new(id, name, AssetKind::Flow);
            asset.connectors = connection_references(entry);
            asset.connectors.extend(definition_operations(entry));
            assets.push(asset);
        }

        Ok(assets)
    }
}

/// Collect connector descriptors from the flow's `definitionSummary` trigger
/// and action lists.
fn definition_operations(entry: &Value) -> Vec<ConnectorRef> {
    let mut connectors = Vec::new();

    let summary = entry
        .get("properties")
        .and_then(|p| p.get("definitionSummary"))
        .or_else(|| entry.get("definitionSummary"));
    let Some(summary) = summary else {
        return connectors;
    };

    for section in ["triggers", "actions"] {
        if let Some(operations) = summary.get(section).and_then(Value::as_array) {
            for operation in operations {
                let connector = ConnectorRef {
                    type_hint: first_str(operation, &["type", "kind"]).map(str::to_string),
                    api_identifier: first_str(operation, &["api.name", "swaggerOperationId"])
                        .map(str::to_string),
                    display_label: first_str(operation, &["api.displayName", "displayName"])
                        .map(str::to_string),
                };
                // Bare engine operations ("Compose", "Condition") have a type
                // but no api reference; they are not connectors.
                if connector.api_identifier.is_some() || connector.display_label.is_some() {
                    connectors.push(connector);
                }
            }
        }
    }

    connectors
}
