//! Run driver: verifies each initial resource of a run and aggregates
//! one verdict per resource.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::checker::{check_resource, Verdict};
use crate::error::VerifyError;
use crate::graph::DependencyGraph;
use crate::models::{Load, Resource, Run};
use crate::store::LoadStore;

/// Verification outcome for one run.
///
/// One entry per initial resource; the report deliberately does not
/// collapse them into a single run-wide verdict, that policy belongs to
/// the caller.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RunReport {
    pub run_id: String,
    pub results: Vec<ResourceReport>,
}

impl RunReport {
    /// Whether every initial resource verified successfully.
    pub fn is_success(&self) -> bool {
        self.results.iter().all(|result| result.verdict.is_success())
    }
}

/// Verdict for a single initial resource.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ResourceReport {
    /// The initial resource that seeded this subtree.
    pub initial: Resource,
    /// The resource established by the initial load; the root of the walk.
    pub root: Resource,
    pub verdict: Verdict,
}

/// Verify every initial resource of `run` against the graph and the
/// collected loads.
///
/// The walk for each initial resource starts at the single resource its
/// establishing load produced. A missing or ambiguous establishing load is
/// a structural error, never silently resolved.
pub fn verify_run(
    graph: &DependencyGraph,
    store: &LoadStore,
    run: &Run,
) -> Result<RunReport, VerifyError> {
    let mut results = Vec::with_capacity(run.initial_resources.len());

    for initial in &run.initial_resources {
        let root = initial_load_root(store, initial)?;
        debug!("verifying {root} seeded by {initial}");

        let verdict = check_resource(graph, store, &root, &initial.resource_type)?;
        results.push(ResourceReport {
            initial: initial.clone(),
            root,
            verdict,
        });
    }

    Ok(RunReport {
        run_id: run.id.clone(),
        results,
    })
}

/// Locate the load that established `initial` and return its single success.
fn initial_load_root(store: &LoadStore, initial: &Resource) -> Result<Resource, VerifyError> {
    let establishing: Vec<&Load> = store
        .loads_for(initial)
        .into_iter()
        .filter(|load| load.target_type == initial.resource_type)
        .collect();

    let load = match establishing.as_slice() {
        [] => return Err(VerifyError::MissingInitialLoad(initial.clone())),
        [load] => *load,
        many => {
            return Err(VerifyError::AmbiguousInitialLoad {
                resource: initial.clone(),
                count: many.len(),
            })
        }
    };

    match load.successes.as_slice() {
        [root] => Ok(root.clone()),
        successes => Err(VerifyError::InitialLoadSuccesses {
            resource: initial.clone(),
            count: successes.len(),
        }),
    }
}
