use std::path::Path;

use crate::models::AssetKind;

/// Auto-detect which inventory exports are present in the input directory.
pub fn detect_sources(path: &Path) -> Vec<AssetKind> {
    let mut sources = Vec::new();

    if path.join("apps.json").exists() {
        sources.push(AssetKind::App);
    }

    if path.join("flows.json").exists() {
        sources.push(AssetKind::Flow);
    }

    if path.join("bots.json").exists() {
        sources.push(AssetKind::Bot);
    }

    if path.join("reportAssets.json").exists() {
        sources.push(AssetKind::ReportAsset);
    }

    sources
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_present_exports_only() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("apps.json"), "[]").unwrap();
        std::fs::write(dir.path().join("bots.json"), "[]").unwrap();

        let sources = detect_sources(dir.path());
        assert_eq!(sources, vec![AssetKind::App, AssetKind::Bot]);
    }

    #[test]
    fn test_empty_directory_detects_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(detect_sources(dir.path()).is_empty());
    }
}
