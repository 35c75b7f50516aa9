//! Typed errors for structural verification failures

use thiserror::Error;

use crate::models::Resource;

/// Structural and precondition violations surfaced by the checker and the
/// run driver. Steady-state verdicts are values, never errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum VerifyError {
    /// The load data revisited a resource within one verification walk.
    /// The recursive checker assumes an acyclic graph; rather than looping,
    /// it fails fast with the offending path.
    #[error("cycle detected at {resource}: {}", format_path(.path))]
    CycleDetected {
        resource: Resource,
        path: Vec<Resource>,
    },

    /// No load establishes the given initial resource.
    #[error("no load establishes initial resource {0}")]
    MissingInitialLoad(Resource),

    /// More than one load claims to establish the initial resource.
    #[error("{count} loads establish initial resource {resource}; expected exactly one")]
    AmbiguousInitialLoad { resource: Resource, count: usize },

    /// The establishing load produced a number of successes other than one.
    #[error("initial load for {resource} produced {count} successes; expected exactly one")]
    InitialLoadSuccesses { resource: Resource, count: usize },
}

fn format_path(path: &[Resource]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}
