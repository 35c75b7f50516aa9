//! Run completeness verification and per-resource verdict report
//! Usage: census check <manifest> [--json]

use anyhow::Result;
use colored::{ColoredString, Colorize};
use std::path::Path;

use crate::graph::DependencyGraph;
use crate::manifest::parse_manifest;
use crate::models::RunStatus;
use crate::runner::verify_run;
use crate::store::LoadStore;

/// Status indicator with color for display
fn status_indicator(status: RunStatus) -> ColoredString {
    match status {
        RunStatus::Success => "✓".green().bold(),
        RunStatus::Failed => "✗".red().bold(),
        RunStatus::Error => "!".magenta().bold(),
        RunStatus::Incomplete => "○".yellow().bold(),
    }
}

/// Verify a run manifest and print one verdict per initial resource.
///
/// Exits with a non-zero status when any subtree is not a success, so the
/// command can gate reporting pipelines.
pub fn execute(manifest_path: &Path, json: bool) -> Result<()> {
    let manifest = parse_manifest(manifest_path)?;
    let graph = DependencyGraph::build(&manifest.dependencies);
    let store = LoadStore::new(manifest.loads);

    let report = verify_run(&graph, &store, &manifest.run)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("{}", crate::LOGO);
        println!();
        println!("Run: {} ({} loads)", report.run_id, store.len());
        println!("─────────────────────────────────────────");
        for result in &report.results {
            let indicator = status_indicator(result.verdict.status);
            println!("  {indicator} {} = {}", result.root, result.verdict.status);
            if let Some(trigger) = &result.verdict.trigger {
                println!("      {trigger}");
            }
        }
    }

    if !report.is_success() {
        std::process::exit(1);
    }

    Ok(())
}
