//! Run manifest parsing - dependency declaration, run descriptor, and
//! load records from a single YAML document

pub mod schema;

use anyhow::{bail, Context, Result};
use std::collections::BTreeMap;
use std::path::Path;
use uuid::Uuid;

use crate::models::{Load, Run};

use schema::{validate, ManifestDoc};

/// Result of parsing a run manifest
#[derive(Debug, Clone)]
pub struct ParsedManifest {
    pub dependencies: BTreeMap<String, Vec<String>>,
    pub run: Run,
    pub loads: Vec<Load>,
    pub source_path: String,
}

/// Parse a run manifest file
pub fn parse_manifest(path: &Path) -> Result<ParsedManifest> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read manifest file: {}", path.display()))?;

    parse_manifest_content(&content, path)
}

/// Parse manifest content (for testing without file system)
pub fn parse_manifest_content(content: &str, source_path: &Path) -> Result<ParsedManifest> {
    let doc: ManifestDoc =
        serde_yaml::from_str(content).with_context(|| "Failed to parse manifest YAML")?;

    if let Err(errors) = validate(&doc) {
        let error_messages: Vec<_> = errors.iter().map(|e| e.to_string()).collect();
        bail!("Validation errors:\n  - {}", error_messages.join("\n  - "));
    }

    let run = Run {
        id: doc.run.id.unwrap_or_else(generate_run_id),
        initial_resources: doc.run.initial_resources,
        started_at: doc.run.started_at,
    };

    Ok(ParsedManifest {
        dependencies: doc.dependencies,
        run,
        loads: doc.loads,
        source_path: source_path.to_string_lossy().to_string(),
    })
}

/// Generate a run id for manifests that omit one
fn generate_run_id() -> String {
    format!("run-{}", Uuid::new_v4())
}
