//! Run manifest YAML schema definitions and validation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::models::{Load, Resource};

/// Root structure of a run manifest file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ManifestDoc {
    pub version: u32,
    /// Resource type -> the parent types it is derived from.
    pub dependencies: BTreeMap<String, Vec<String>>,
    pub run: RunRecord,
    #[serde(default)]
    pub loads: Vec<Load>,
}

/// Run descriptor as written in the manifest. The id may be omitted and is
/// generated at parse time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub initial_resources: Vec<Resource>,
    #[serde(default)]
    pub started_at: Option<DateTime<Utc>>,
}

/// Validation error with context
#[derive(Debug)]
pub struct ValidationError {
    pub message: String,
    pub load_index: Option<usize>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(index) = self.load_index {
            write!(f, "Load #{index}: {}", self.message)
        } else {
            write!(f, "{}", self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate a manifest document, collecting every problem found.
///
/// The success-type invariant (each produced resource matches the load's
/// target type) is checked here so the checker can treat it as a
/// precondition.
pub fn validate(doc: &ManifestDoc) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if doc.version != 1 {
        errors.push(ValidationError {
            message: format!(
                "Unsupported version: {}. Only version 1 is supported.",
                doc.version
            ),
            load_index: None,
        });
    }

    for (resource_type, parents) in &doc.dependencies {
        if resource_type.trim().is_empty() {
            errors.push(ValidationError {
                message: "Dependency declaration contains an empty resource type".to_string(),
                load_index: None,
            });
        }
        for parent in parents {
            if parent.trim().is_empty() {
                errors.push(ValidationError {
                    message: format!("Parents of '{resource_type}' contain an empty resource type"),
                    load_index: None,
                });
            }
        }
    }

    if doc.run.initial_resources.is_empty() {
        errors.push(ValidationError {
            message: "Run declares no initial resources".to_string(),
            load_index: None,
        });
    }

    for (index, load) in doc.loads.iter().enumerate() {
        if let Some(run_id) = &doc.run.id {
            if &load.run_id != run_id {
                errors.push(ValidationError {
                    message: format!(
                        "Load belongs to run '{}' but the manifest declares run '{run_id}'",
                        load.run_id
                    ),
                    load_index: Some(index),
                });
            }
        }

        for success in &load.successes {
            if success.resource_type != load.target_type {
                errors.push(ValidationError {
                    message: format!(
                        "Success {success} does not match target type '{}'",
                        load.target_type
                    ),
                    load_index: Some(index),
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
