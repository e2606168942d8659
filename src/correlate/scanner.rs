use crate::models::{AssetRecord, MatchEvidence, ServicePattern};

use super::classifier::classify;

/// Scan one asset: classify every connector descriptor it carries and record
/// the results in `matched_services`, keyed by canonical service name.
///
/// Several connectors matching the same service merge their evidence under a
/// single key; identical `(service, matched_key, source)` triples are
/// suppressed. An asset with no connectors, or none recognized, ends with an
/// empty map — valid, not an error.
pub fn scan(asset: &mut AssetRecord, table: &[ServicePattern]) {
    let hits: Vec<MatchEvidence> = asset
        .connectors
        .iter()
        .filter_map(|c| classify(c, table))
        .collect();

    for evidence in hits {
        record_match(asset, evidence);
    }
}

/// Append evidence under its service key unless an identical entry exists.
pub(super) fn record_match(asset: &mut AssetRecord, evidence: MatchEvidence) {
    let entries = asset
        .matched_services
        .entry(evidence.service.clone())
        .or_default();
    if !entries.contains(&evidence) {
        entries.push(evidence);
    }
}
