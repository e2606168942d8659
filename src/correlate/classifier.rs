use crate::models::{ConnectorRef, EvidenceSource, MatchEvidence, ServicePattern};

/// Classify one connector descriptor against an ordered pattern table.
///
/// Each pattern's keys are tested as case-insensitive substrings against all
/// three descriptor fields; the first pattern (in table order) with any hit
/// wins. Overlapping patterns therefore resolve to whichever is declared
/// first, which is why tables are ordered most-specific-first.
///
/// Missing fields are never an error: a descriptor with all fields empty, or
/// one no pattern recognizes, simply yields `None`.
pub fn classify(connector: &ConnectorRef, table: &[ServicePattern]) -> Option<MatchEvidence> {
    let fields: Vec<String> = [
        connector.type_hint.as_deref(),
        connector.api_identifier.as_deref(),
        connector.display_label.as_deref(),
    ]
    .iter()
    .flatten()
    .map(|f| f.to_lowercase())
    .collect();

    for pattern in table {
        for key in &pattern.keys {
            let needle = key.to_lowercase();
            if fields.iter().any(|f| f.contains(&needle)) {
                return Some(MatchEvidence {
                    service: pattern.service.clone(),
                    matched_key: key.clone(),
                    source: EvidenceSource::Connector {
                        descriptor: connector.describe(),
                    },
                });
            }
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connector(label: &str) -> ConnectorRef {
        ConnectorRef {
            type_hint: None,
            api_identifier: None,
            display_label: Some(label.to_string()),
        }
    }

    #[test]
    fn test_all_fields_empty_is_no_match() {
        let table = vec![ServicePattern::new("SharePoint", &["sharepoint"])];
        assert_eq!(classify(&ConnectorRef::default(), &table), None);
    }

    #[test]
    fn test_case_insensitive_substring() {
        let table = vec![ServicePattern::new("SharePoint", &["sharepoint"])];
        let hit = classify(&connector("Shared_SharePointOnline"), &table).unwrap();
        assert_eq!(hit.service, "SharePoint");
        assert_eq!(hit.matched_key, "sharepoint");
    }

    #[test]
    fn test_matches_any_of_the_three_fields() {
        let table = vec![ServicePattern::new("Teams", &["teams"])];
        let by_api = ConnectorRef {
            api_identifier: Some("/providers/apis/shared_teams".to_string()),
            ..Default::default()
        };
        let by_type = ConnectorRef {
            type_hint: Some("Microsoft.Teams/connection".to_string()),
            ..Default::default()
        };
        assert!(classify(&by_api, &table).is_some());
        assert!(classify(&by_type, &table).is_some());
    }

    #[test]
    fn test_unrecognized_descriptor_is_no_match() {
        let table = vec![ServicePattern::new("SharePoint", &["sharepoint"])];
        assert_eq!(classify(&connector("Salesforce"), &table), None);
    }

    // Regression: overlapping patterns resolve to whichever is declared first,
    // and reordering the table flips the result. Do not "fix" this without a
    // product decision — it changes migration-planning output.
    #[test]
    fn test_first_declared_pattern_wins() {
        let generic_first = vec![
            ServicePattern::new("Office365", &["o365_generic"]),
            ServicePattern::new("SharePoint", &["sharepoint"]),
        ];
        let specific_first = vec![
            ServicePattern::new("SharePoint", &["sharepoint"]),
            ServicePattern::new("Office365", &["o365_generic"]),
        ];
        let ambiguous = connector("o365_generic sharepoint connection");

        let hit = classify(&ambiguous, &generic_first).unwrap();
        assert_eq!(hit.service, "Office365");

        let hit = classify(&ambiguous, &specific_first).unwrap();
        assert_eq!(hit.service, "SharePoint");
    }

    #[test]
    fn test_evidence_records_descriptor() {
        let table = vec![ServicePattern::new("SharePoint", &["sharepoint"])];
        let hit = classify(&connector("SharePoint Sites"), &table).unwrap();
        assert_eq!(
            hit.source,
            EvidenceSource::Connector {
                descriptor: "SharePoint Sites".to_string()
            }
        );
    }
}
