use std::collections::HashMap;

use crate::models::{AssetRecord, EvidenceSource, MatchEvidence};

use super::scanner::record_match;

/// Propagate matched services across reference edges: every container asset
/// (a bot) inherits the matches of each flow it references, with the flow's id
/// recorded as evidence provenance so a report can say "Bot X depends on
/// SharePoint via Flow Y".
///
/// Lookup is by exact id. Dangling references are skipped silently —
/// cross-service enumeration is eventually consistent, so a referenced flow
/// may have been deleted or be inaccessible to the exporting account.
///
/// Single hop only: flows never reference bots, so no recursion and no cycles
/// for this system's asset kinds. Callers must fully scan `referenced` before
/// invoking this.
pub fn propagate(containers: &mut [AssetRecord], referenced: &[AssetRecord]) {
    let by_id: HashMap<&str, &AssetRecord> =
        referenced.iter().map(|a| (a.id.as_str(), a)).collect();

    for container in containers.iter_mut() {
        let mut inherited: Vec<MatchEvidence> = Vec::new();
        for reference in &container.references {
            let Some(target) = by_id.get(reference.as_str()) else {
                continue;
            };
            for (service, entries) in &target.matched_services {
                // Keep the matched key from the flow's own evidence; only the
                // source is rewritten to point at the flow.
                for evidence in entries {
                    inherited.push(MatchEvidence {
                        service: service.clone(),
                        matched_key: evidence.matched_key.clone(),
                        source: EvidenceSource::Referenced {
                            asset_id: target.id.clone(),
                        },
                    });
                }
            }
        }
        for evidence in inherited {
            record_match(container, evidence);
        }
    }
}
