use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::resource::Resource;

/// One extraction execution, seeded by one or more initial resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Run {
    pub id: String,
    /// The resources that seed verification (e.g. the patients whose
    /// extraction triggered everything else).
    pub initial_resources: Vec<Resource>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub started_at: Option<DateTime<Utc>>,
}

impl Run {
    pub fn new(id: impl Into<String>, initial_resources: Vec<Resource>) -> Self {
        Self {
            id: id.into(),
            initial_resources,
            started_at: Some(Utc::now()),
        }
    }
}

/// Verdict for one resource's subtree.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum RunStatus {
    /// Subtree fully and successfully loaded.
    Success,
    /// At least one load in the subtree explicitly reported failure.
    Failed,
    /// At least one load reported a non-success, non-failure status.
    Error,
    /// The graph declared an expected downstream load that never happened.
    Incomplete,
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunStatus::Success => write!(f, "success"),
            RunStatus::Failed => write!(f, "failed"),
            RunStatus::Error => write!(f, "error"),
            RunStatus::Incomplete => write!(f, "incomplete"),
        }
    }
}
