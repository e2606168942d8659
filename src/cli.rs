use std::path::PathBuf;

use clap::Parser;

use crate::models::AssetKind;

#[derive(Parser, Debug)]
#[command(
    name = "connector-checkr",
    about = "Scan tenant inventory exports and report collaboration-connector dependencies",
    version
)]
pub struct Cli {
    /// Directory containing the inventory export files (apps.json, flows.json, bots.json, reportAssets.json)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Pattern config file [default: ./.connector-checkr/config.toml, fallback ~/.config/connector-checkr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// CSV output path; use without value to default to connector-report.csv
    #[arg(long, value_name = "FILE", num_args = 0..=1, default_missing_value = "connector-report.csv")]
    pub csv: Option<PathBuf>,

    /// Exclude an asset kind from scanning (repeatable)
    #[arg(long = "exclude-kind", value_name = "KIND")]
    pub exclude_kind: Vec<AssetKindArg>,

    /// Show per-connector evidence for every matched asset
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print summary line
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
    Csv,
}

#[derive(Debug, Clone, clap::ValueEnum)]
pub enum AssetKindArg {
    App,
    Flow,
    Bot,
    ReportAsset,
}

impl From<&AssetKindArg> for AssetKind {
    fn from(arg: &AssetKindArg) -> Self {
        match arg {
            AssetKindArg::App => AssetKind::App,
            AssetKindArg::Flow => AssetKind::Flow,
            AssetKindArg::Bot => AssetKind::Bot,
            AssetKindArg::ReportAsset => AssetKind::ReportAsset,
        }
    }
}
