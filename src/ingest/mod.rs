//! Parsers for the per-service inventory export files.
//!
//! Each admin source dumps its asset list with its own shape and field names;
//! these modules map the raw JSON property bags onto the canonical
//! [`AssetRecord`](crate::models::AssetRecord) model. Parsing is tolerant by
//! design: a missing or oddly-typed field becomes an absent value, never an
//! error — classification downstream treats absent fields as "no match".

use std::path::Path;

use anyhow::Result;
use serde_json::Value;

use crate::models::AssetRecord;

pub mod apps;
pub mod bots;
pub mod flows;
pub mod report_assets;

pub trait Ingestor {
    /// Parse one export file into canonical records. Returns an empty list
    /// when the file is absent.
    fn ingest(&self, path: &Path) -> Result<Vec<AssetRecord>>;
}

/// Top-level record list of an export: either a bare JSON array or the
/// `{ "value": [...] }` envelope most admin APIs wrap lists in.
pub(crate) fn records(json: &Value) -> &[Value] {
    json.as_array()
        .map(Vec::as_slice)
        .or_else(|| json.get("value").and_then(Value::as_array).map(Vec::as_slice))
        .unwrap_or(&[])
}

/// Prioritized-field lookup: probe each dot-separated path in order and
/// return the first non-empty string. Sources disagree on field names
/// (`displayName` vs `properties.displayName` vs `name`), so callers list
/// every spelling they have seen, most trustworthy first.
pub(crate) fn first_str<'a>(value: &'a Value, paths: &[&str]) -> Option<&'a str> {
    for path in paths {
        let mut current = value;
        let mut found = true;
        for segment in path.split('.') {
            match current.get(segment) {
                Some(next) => current = next,
                None => {
                    found = false;
                    break;
                }
            }
        }
        if found {
            if let Some(s) = current.as_str() {
                if !s.is_empty() {
                    return Some(s);
                }
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_records_unwraps_value_envelope() {
        let bare = json!([{"id": 1}]);
        let wrapped = json!({"value": [{"id": 1}, {"id": 2}]});
        let neither = json!({"count": 0});
        assert_eq!(records(&bare).len(), 1);
        assert_eq!(records(&wrapped).len(), 2);
        assert!(records(&neither).is_empty());
    }

    #[test]
    fn test_first_str_priority_order() {
        let v = json!({
            "name": "guid-123",
            "properties": { "displayName": "Expense App" }
        });
        assert_eq!(
            first_str(&v, &["properties.displayName", "name"]),
            Some("Expense App")
        );
        assert_eq!(
            first_str(&v, &["displayName", "name"]),
            Some("guid-123")
        );
    }

    #[test]
    fn test_first_str_skips_empty_and_non_string() {
        let v = json!({ "displayName": "", "id": 42, "name": "fallback" });
        assert_eq!(first_str(&v, &["displayName", "id", "name"]), Some("fallback"));
        assert_eq!(first_str(&v, &["missing", "also.missing"]), None);
    }
}
