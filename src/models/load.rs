use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::resource::Resource;

/// Result reported by the loader for one load attempt.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ResultStatus {
    /// The load completed and its results are trustworthy.
    Success,
    /// Business-level failure flagged by the loader (e.g. the upstream
    /// system returned no data where data was required).
    Failure,
    /// Infrastructure or unexpected error.
    Error,
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResultStatus::Success => write!(f, "success"),
            ResultStatus::Failure => write!(f, "failure"),
            ResultStatus::Error => write!(f, "error"),
        }
    }
}

/// A record of one load attempt.
///
/// Loads are append-only facts collected by the extraction process before
/// verification begins; the checker never mutates them.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Load {
    pub run_id: String,
    /// The resource whose processing triggered this load.
    pub source: Resource,
    pub status: ResultStatus,
    /// The resource type this load was fetching.
    pub target_type: String,
    /// Resources the load produced.
    #[serde(default)]
    pub successes: Vec<Resource>,
    /// Resources attempted but not produced.
    #[serde(default)]
    pub failures: Vec<Resource>,
    /// When the loader recorded this attempt, if known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recorded_at: Option<DateTime<Utc>>,
}

impl fmt::Display for Load {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.source, self.target_type, self.status
        )
    }
}
