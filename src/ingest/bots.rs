use std::path::Path;

use anyhow::Result;
use serde_json::Value;

use crate::models::{AssetKind, AssetRecord};

use super::apps::connection_references;
use super::{first_str, records};

pub struct BotIngestor;

impl BotIngestor {
    pub fn new() -> Self {
        Self
    }
}

impl super::Ingestor for BotIngestor {
    /// Parse `bots.json` — chatbot inventory. Bots are containers: besides
    /// any direct connections, each entry lists the cloud flows its topics
    /// trigger, either as a flat `referencedFlows` id list or as typed
    /// component entries. Those ids feed the propagation phase.
    fn ingest(&self, path: &Path) -> Result<Vec<AssetRecord>> {
        let file = path.join("bots.json");
        if !file.exists() {
            return Ok(Vec::new());
        }

        let content = std::fs::read_to_string(&file)?;
        let json: Value = serde_json::from_str(&content)?;

        let mut assets = Vec::new();
        for entry in records(&json) {
            let Some(id) = first_str(entry, &["name", "id", "botId"]) else {
                continue;
            };
            let name = first_str(entry, &["properties.displayName", "displayName", "name"])
                .unwrap_or(id);

            let mut asset = AssetRecord::new(id, name, AssetKind::Bot);
            asset.connectors = connection_references(entry);
            asset.references = flow_references(entry);
            assets.push(asset);
        }

        Ok(assets)
    }
}

fn flow_references(entry: &Value) -> Vec<String> {
    // Newer exports: flat id array.
    for field in ["referencedFlows", "triggeredFlows"] {
        if let Some(ids) = entry.get(field).and_then(Value::as_array) {
            return ids
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect();
        }
    }

    // Older exports: component list where flow components carry the id.
    let mut references = Vec::new();
    if let Some(components) = entry.get("components").and_then(Value::as_array) {
        for component in components {
            let is_flow = first_str(component, &["type", "kind"])
                .map(|t| t.to_lowercase().contains("flow"))
                .unwrap_or(false);
            if is_flow {
                if let Some(id) = first_str(component, &["flowId", "id"]) {
                    references.push(id.to_string());
                }
            }
        }
    }
    references
}
