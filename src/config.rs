use std::path::Path;

use anyhow::Result;
use serde::Deserialize;

use crate::correlate::patterns;
use crate::models::ServicePattern;

/// Classification tables, deserialized from `.connector-checkr/config.toml`.
///
/// This is the integrator-facing knob: adding a newly recognized service means
/// adding a `[[connector_patterns]]` entry, no code change. Both tables are
/// ordered and first-match-wins, so entries must be listed
/// most-specific-first.
///
/// ```toml
/// [[connector_patterns]]
/// service = "SharePoint"
/// keys = ["sharepointonline", "sharepoint"]
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct PatternConfig {
    /// Patterns applied to connector descriptors (apps, flows, bots).
    #[serde(default = "patterns::default_connector_table")]
    pub connector_patterns: Vec<ServicePattern>,
    /// Patterns applied to reporting-asset data-source descriptors.
    #[serde(default = "patterns::default_datasource_table")]
    pub datasource_patterns: Vec<ServicePattern>,
}

impl Default for PatternConfig {
    fn default() -> Self {
        PatternConfig {
            connector_patterns: patterns::default_connector_table(),
            datasource_patterns: patterns::default_datasource_table(),
        }
    }
}

/// Load the pattern configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<inventory_path>/.connector-checkr/config.toml`
/// 3. `~/.config/connector-checkr/config.toml`
/// 4. Built-in [`PatternConfig::default`]
pub fn load_config(inventory_path: &Path, config_override: Option<&Path>) -> Result<PatternConfig> {
    if let Some(path) = config_override {
        let content = std::fs::read_to_string(path)?;
        return Ok(toml::from_str(&content)?);
    }

    let local_config = inventory_path.join(".connector-checkr").join("config.toml");
    if local_config.exists() {
        let content = std::fs::read_to_string(&local_config)?;
        return Ok(toml::from_str(&content)?);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("connector-checkr")
            .join("config.toml");
        if home_config.exists() {
            let content = std::fs::read_to_string(&home_config)?;
            return Ok(toml::from_str(&content)?);
        }
    }

    Ok(PatternConfig::default())
}
