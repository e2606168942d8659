//! `connector-checkr` — correlate tenant inventory exports against the
//! collaboration-platform connectors they depend on.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load the pattern tables ([`config::load_config`]).
//! 3. Auto-detect which exports are present ([`detector::detect_sources`]).
//! 4. Map each export onto canonical asset records ([`ingest`]).
//! 5. Classify, propagate, and merge ([`correlate::aggregate`]).
//! 6. Render the requested report ([`report`]).

mod cli;
mod config;
mod correlate;
mod detector;
mod ingest;
mod models;
mod report;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use cli::{Cli, ReportFormat};
use config::load_config;
use correlate::aggregate::{aggregate, Collections};
use detector::detect_sources;
use ingest::Ingestor;
use models::AssetKind;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Resolve inventory path
    let path = cli
        .path
        .canonicalize()
        .unwrap_or_else(|_| cli.path.clone());

    // Load pattern tables
    let config = load_config(&path, cli.config.as_deref())?;

    // Detect export files (always automatic; --exclude-kind opts out)
    let excluded: Vec<AssetKind> = cli.exclude_kind.iter().map(Into::into).collect();

    let sources: Vec<AssetKind> = detect_sources(&path)
        .into_iter()
        .filter(|k| !excluded.contains(k))
        .collect();

    if sources.is_empty() {
        eprintln!("No inventory export files found in {}", path.display());
        std::process::exit(1);
    }

    // Ingest each detected export
    let mut collections = Collections::default();

    for kind in &sources {
        let assets = match kind {
            AssetKind::App => ingest::apps::AppIngestor::new().ingest(&path)?,
            AssetKind::Flow => ingest::flows::FlowIngestor::new().ingest(&path)?,
            AssetKind::Bot => ingest::bots::BotIngestor::new().ingest(&path)?,
            AssetKind::ReportAsset => {
                ingest::report_assets::ReportAssetIngestor::new().ingest(&path)?
            }
        };

        if !cli.quiet {
            eprintln!("  {} {} {} assets", "→".cyan(), kind, assets.len());
        }

        match kind {
            AssetKind::App => collections.apps = assets,
            AssetKind::Flow => collections.flows = assets,
            AssetKind::Bot => collections.bots = assets,
            AssetKind::ReportAsset => collections.report_assets = assets,
        }
    }

    let total_scanned = collections.apps.len()
        + collections.flows.len()
        + collections.bots.len()
        + collections.report_assets.len();

    // Run the correlation pass
    let matched = aggregate(&collections, &config);

    if matched.is_empty() && !cli.quiet {
        eprintln!("  {} no cross-service dependencies found", "→".cyan());
    }

    // Resolve effective report format: --csv implies CSV format
    let report_format = match &cli.csv {
        Some(_) => ReportFormat::Csv,
        None => cli.report,
    };
    let csv_path = cli
        .csv
        .unwrap_or_else(|| std::path::PathBuf::from("connector-report.csv"));

    // Render report
    match report_format {
        ReportFormat::Terminal => {
            report::terminal::render(&matched, &path, total_scanned, cli.verbose, cli.quiet)?;
        }
        ReportFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&matched)?);
        }
        ReportFormat::Csv => {
            report::csv::render(&matched, &csv_path)?;
            if !cli.quiet {
                eprintln!("  {} wrote {}", "→".cyan(), csv_path.display());
            }
        }
    }

    Ok(())
}
