use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One inventoried item from a tenant export: an app, a cloud flow, a chatbot,
/// or a reporting artifact (dataset/report).
///
/// `matched_services` is owned by the correlation engine: it is empty on
/// ingest and populated exactly once per run. A `BTreeMap` keeps service keys
/// ordered so repeated runs over the same inputs serialize identically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetRecord {
    pub id: String,
    pub name: String,
    pub kind: AssetKind,
    /// Direct external dependencies (connector or data-source descriptors).
    #[serde(default)]
    pub connectors: Vec<ConnectorRef>,
    /// Foreign asset ids this record points at. Only bots carry these,
    /// pointing into the flow collection.
    #[serde(default)]
    pub references: Vec<String>,
    #[serde(default)]
    pub matched_services: BTreeMap<String, Vec<MatchEvidence>>,
}

impl AssetRecord {
    pub fn new(id: impl Into<String>, name: impl Into<String>, kind: AssetKind) -> Self {
        AssetRecord {
            id: id.into(),
            name: name.into(),
            kind,
            connectors: Vec::new(),
            references: Vec::new(),
            matched_services: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetKind {
    App,
    Flow,
    Bot,
    ReportAsset,
}

impl std::fmt::Display for AssetKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AssetKind::App => write!(f, "App"),
            AssetKind::Flow => write!(f, "Flow"),
            AssetKind::Bot => write!(f, "Bot"),
            AssetKind::ReportAsset => write!(f, "Report asset"),
        }
    }
}

/// A single heterogeneous descriptor of an external dependency.
///
/// Each source service shapes these differently, so every field is optional;
/// classification tolerates any subset (including all three) being absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectorRef {
    pub type_hint: Option<String>,
    pub api_identifier: Option<String>,
    pub display_label: Option<String>,
}

impl ConnectorRef {
    /// Best human-readable handle for this descriptor: the first populated
    /// field, in label → api → type order. Empty string when all are absent.
    pub fn describe(&self) -> String {
        self.display_label
            .as_deref()
            .or(self.api_identifier.as_deref())
            .or(self.type_hint.as_deref())
            .unwrap_or("")
            .to_string()
    }
}

/// One classification rule: a canonical service name plus the case-insensitive
/// substrings that identify it in a connector descriptor. Tables are ordered
/// and the first matching pattern wins, so more specific patterns must be
/// declared before broader ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServicePattern {
    pub service: String,
    pub keys: Vec<String>,
}

impl ServicePattern {
    pub fn new(service: &str, keys: &[&str]) -> Self {
        ServicePattern {
            service: service.to_string(),
            keys: keys.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Proof behind one classification decision: which service matched, which
/// substring triggered it, and where the match came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchEvidence {
    pub service: String,
    pub matched_key: String,
    pub source: EvidenceSource,
}

/// Back-reference from a piece of evidence to its origin: either a connector
/// descriptor on the asset itself, or (for propagated matches) the id of the
/// referenced asset the match was inherited from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EvidenceSource {
    Connector { descriptor: String },
    Referenced { asset_id: String },
}

impl std::fmt::Display for EvidenceSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EvidenceSource::Connector { descriptor } if descriptor.is_empty() => {
                write!(f, "connector")
            }
            EvidenceSource::Connector { descriptor } => write!(f, "connector: {}", descriptor),
            EvidenceSource::Referenced { asset_id } => write!(f, "via {}", asset_id),
        }
    }
}
