use std::path::Path;

use anyhow::Result;
use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};

use crate::models::{AssetKind, AssetRecord};

/// Render a colored terminal report of every asset with at least one matched
/// service.
pub fn render(
    matched: &[AssetRecord],
    path: &Path,
    total_scanned: usize,
    verbose: bool,
    quiet: bool,
) -> Result<()> {
    let app_count = count_kind(matched, AssetKind::App);
    let flow_count = count_kind(matched, AssetKind::Flow);
    let bot_count = count_kind(matched, AssetKind::Bot);
    let report_count = count_kind(matched, AssetKind::ReportAsset);

    if quiet {
        println!(
            "Scanned: {}  Matched: {}  Apps: {}  Flows: {}  Bots: {}  Report assets: {}",
            total_scanned,
            matched.len().to_string().cyan(),
            app_count,
            flow_count,
            bot_count,
            report_count,
        );
        return Ok(());
    }

    println!(
        "\n {} v{}",
        "connector-checkr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Inventory: {}\n", path.display());

    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", "SUMMARY".bold());
    println!(" │  {:<48} │", format!("Assets scanned     : {}", total_scanned));
    println!(
        " │  {:<48} │",
        format!("With dependencies  : {}  {}", matched.len(), top_services(matched))
    );
    println!(" │  {:<48} │", format!("Apps               : {}", app_count));
    println!(" │  {:<48} │", format!("Flows              : {}", flow_count));
    println!(" │  {:<48} │", format!("Bots               : {}", bot_count));
    println!(" │  {:<48} │", format!("Report assets      : {}", report_count));
    println!(" └────────────────────────────────────────────────────┘\n");

    if matched.is_empty() {
        println!(
            " {} No asset in this inventory depends on a recognized service.\n",
            "✓".green()
        );
        return Ok(());
    }

    println!(" {} Assets with cross-service dependencies:\n", "[MATCHED]".cyan().bold());
    render_table(matched, verbose);
    println!();

    Ok(())
}

fn render_table(matched: &[AssetRecord], verbose: bool) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Name").add_attribute(Attribute::Bold),
            Cell::new("Kind").add_attribute(Attribute::Bold),
            Cell::new("Services").add_attribute(Attribute::Bold),
            Cell::new(if verbose { "Evidence" } else { "Matches" }).add_attribute(Attribute::Bold),
        ]);

    for asset in matched {
        let services: Vec<&str> = asset.matched_services.keys().map(String::as_str).collect();

        let detail = if verbose {
            asset
                .matched_services
                .values()
                .flatten()
                .map(|e| format!("{} ({}, {})", e.service, e.matched_key, e.source))
                .collect::<Vec<_>>()
                .join("\n")
        } else {
            asset
                .matched_services
                .values()
                .map(Vec::len)
                .sum::<usize>()
                .to_string()
        };

        table.add_row(vec![
            Cell::new(&asset.name),
            Cell::new(asset.kind.to_string()),
            Cell::new(services.join(", ")),
            Cell::new(detail),
        ]);
    }

    println!("{}", table);
}

fn count_kind(matched: &[AssetRecord], kind: AssetKind) -> usize {
    matched.iter().filter(|a| a.kind == kind).count()
}

/// Top three services by number of dependent assets, e.g.
/// `[SharePoint (12), Teams (5), Outlook (2)]`.
fn top_services(matched: &[AssetRecord]) -> String {
    let mut counts: std::collections::HashMap<&str, usize> = std::collections::HashMap::new();
    for asset in matched {
        for service in asset.matched_services.keys() {
            *counts.entry(service).or_insert(0) += 1;
        }
    }

    let mut pairs: Vec<(&str, usize)> = counts.into_iter().collect();
    pairs.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

    let summary: Vec<String> = pairs
        .iter()
        .take(3)
        .map(|(service, count)| format!("{} ({})", service, count))
        .collect();

    if summary.is_empty() {
        String::new()
    } else {
        format!("[{}]", summary.join(", "))
    }
}
