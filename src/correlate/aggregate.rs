use crate::config::PatternConfig;
use crate::models::AssetRecord;

use super::propagate::propagate;
use super::scanner::scan;

/// All source collections handed to the correlator, one per asset kind.
/// Records arrive with `matched_services` empty; the aggregator never mutates
/// the caller's copy.
#[derive(Debug, Clone, Default)]
pub struct Collections {
    pub apps: Vec<AssetRecord>,
    pub flows: Vec<AssetRecord>,
    pub bots: Vec<AssetRecord>,
    pub report_assets: Vec<AssetRecord>,
}

/// Run the full correlation pass and return every asset with at least one
/// matched service.
///
/// Apps, flows, and bots are scanned against the connector table; report
/// assets describe their dependencies with data-source-type strings, so they
/// go through the parallel data-source table instead. Bot propagation runs
/// after the flow scan completes — it reads the flows' matched services.
///
/// Output order is fixed: apps, flows, bots, report assets, each kind keeping
/// its input order. Pure function of its inputs; calling it twice on the same
/// collections yields identical output.
pub fn aggregate(collections: &Collections, config: &PatternConfig) -> Vec<AssetRecord> {
    let mut apps = collections.apps.clone();
    let mut flows = collections.flows.clone();
    let mut bots = collections.bots.clone();
    let mut report_assets = collections.report_assets.clone();

    for asset in apps.iter_mut().chain(flows.iter_mut()).chain(bots.iter_mut()) {
        scan(asset, &config.connector_patterns);
    }
    for asset in report_assets.iter_mut() {
        scan(asset, &config.datasource_patterns);
    }

    propagate(&mut bots, &flows);

    apps.into_iter()
        .chain(flows)
        .chain(bots)
        .chain(report_assets)
        .filter(|a| !a.matched_services.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssetKind, ConnectorRef, EvidenceSource};

    fn asset_with_label(id: &str, kind: AssetKind, label: &str) -> AssetRecord {
        let mut asset = AssetRecord::new(id, id, kind);
        asset.connectors.push(ConnectorRef {
            display_label: Some(label.to_string()),
            ..Default::default()
        });
        asset
    }

    #[test]
    fn test_end_to_end_bot_inherits_via_flow() {
        let mut bot = AssetRecord::new("B1", "B1", AssetKind::Bot);
        bot.references.push("F1".to_string());

        let collections = Collections {
            apps: vec![AssetRecord::new("A1", "A1", AssetKind::App)],
            flows: vec![asset_with_label("F1", AssetKind::Flow, "Teams channel")],
            bots: vec![bot],
            report_assets: vec![],
        };

        let result = aggregate(&collections, &PatternConfig::default());

        // A1 has no connectors, so only F1 and B1 survive, in that order.
        let ids: Vec<&str> = result.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["F1", "B1"]);
        assert!(result[0].matched_services.contains_key("Teams"));
        assert!(result[1].matched_services.contains_key("Teams"));
        assert_eq!(
            result[1].matched_services["Teams"][0].source,
            EvidenceSource::Referenced {
                asset_id: "F1".to_string()
            }
        );
    }

    #[test]
    fn test_output_order_is_app_flow_bot_report() {
        let collections = Collections {
            apps: vec![asset_with_label("A1", AssetKind::App, "sharepoint")],
            flows: vec![asset_with_label("F1", AssetKind::Flow, "sharepoint")],
            bots: vec![asset_with_label("B1", AssetKind::Bot, "sharepoint")],
            report_assets: vec![asset_with_label("R1", AssetKind::ReportAsset, "SharePointList")],
        };

        let result = aggregate(&collections, &PatternConfig::default());
        let ids: Vec<&str> = result.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["A1", "F1", "B1", "R1"]);
    }

    #[test]
    fn test_report_assets_use_datasource_table() {
        // "teams" is a connector-table key only; a dataset claiming it must
        // not match, while an Exchange datasource must.
        let collections = Collections {
            report_assets: vec![
                asset_with_label("R1", AssetKind::ReportAsset, "teams"),
                asset_with_label("R2", AssetKind::ReportAsset, "Exchange"),
            ],
            ..Default::default()
        };

        let result = aggregate(&collections, &PatternConfig::default());
        let ids: Vec<&str> = result.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["R2"]);
        assert!(result[0].matched_services.contains_key("Outlook"));
    }

    #[test]
    fn test_idempotent_and_input_untouched() {
        let mut bot = AssetRecord::new("B1", "B1", AssetKind::Bot);
        bot.references.push("F1".to_string());
        let collections = Collections {
            flows: vec![asset_with_label("F1", AssetKind::Flow, "sharepoint")],
            bots: vec![bot],
            ..Default::default()
        };

        let first = aggregate(&collections, &PatternConfig::default());
        let second = aggregate(&collections, &PatternConfig::default());
        assert_eq!(first, second);
        assert!(collections.flows[0].matched_services.is_empty());
    }

    #[test]
    fn test_no_matches_anywhere_is_empty_result() {
        let collections = Collections {
            apps: vec![AssetRecord::new("A1", "A1", AssetKind::App)],
            ..Default::default()
        };
        assert!(aggregate(&collections, &PatternConfig::default()).is_empty());
    }
}
