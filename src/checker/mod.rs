//! Completeness checker: recursive walk of the dependency graph,
//! cross-referencing load records against declared edges.


use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, warn};

use crate::error::VerifyError;
use crate::graph::DependencyGraph;
use crate::models::{Edge, Load, Resource, ResultStatus, RunStatus};
use crate::store::LoadStore;

/// Outcome of verifying one resource's subtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Verdict {
    pub status: RunStatus,
    /// What stopped the walk, for non-success statuses.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger: Option<Trigger>,
}

impl Verdict {
    pub fn success() -> Self {
        Self {
            status: RunStatus::Success,
            trigger: None,
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == RunStatus::Success
    }
}

/// The specific evidence behind a non-success verdict.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "kebab-case", tag = "kind")]
pub enum Trigger {
    /// A load reported a non-success result.
    UnsuccessfulLoad { resource: Resource, load: Load },
    /// Declared edges for the resource had no load attempting them.
    MissingEdges {
        resource: Resource,
        edges: Vec<String>,
    },
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Trigger::UnsuccessfulLoad { resource, load } => {
                write!(f, "load {load} for {resource} was not a success")
            }
            Trigger::MissingEdges { resource, edges } => {
                write!(
                    f,
                    "{resource} has no loads for expected edges: {}",
                    edges.join(", ")
                )
            }
        }
    }
}

/// Decide whether `resource` and everything downstream of it (per the
/// graph) was loaded completely and successfully.
///
/// Loads targeting `initial_type` are ignored so the walk never re-descends
/// into the type that seeded the run. The first non-success load or child
/// verdict wins and propagates unchanged; remaining siblings are not
/// evaluated. A resource revisited within the walk is a cycle and fails
/// fast with [`VerifyError::CycleDetected`].
///
/// Pure over its immutable inputs: no I/O, no retries, safe to call
/// concurrently for independent resources over a shared graph and store.
pub fn check_resource(
    graph: &DependencyGraph,
    store: &LoadStore,
    resource: &Resource,
    initial_type: &str,
) -> Result<Verdict, VerifyError> {
    let mut stack = Vec::new();
    walk(graph, store, resource, initial_type, &mut stack)
}

fn walk(
    graph: &DependencyGraph,
    store: &LoadStore,
    resource: &Resource,
    initial_type: &str,
    stack: &mut Vec<Resource>,
) -> Result<Verdict, VerifyError> {
    let edges = graph.edges_from(&resource.vertex());

    // A vertex with no outgoing edges has no required downstream loads.
    if edges.is_empty() {
        return Ok(Verdict::success());
    }

    if stack.contains(resource) {
        let mut path = stack.clone();
        path.push(resource.clone());
        return Err(VerifyError::CycleDetected {
            resource: resource.clone(),
            path,
        });
    }

    stack.push(resource.clone());
    let verdict = descend(graph, store, resource, initial_type, stack, edges);
    stack.pop();
    verdict
}

fn descend(
    graph: &DependencyGraph,
    store: &LoadStore,
    resource: &Resource,
    initial_type: &str,
    stack: &mut Vec<Resource>,
    edges: &[Edge],
) -> Result<Verdict, VerifyError> {
    debug!("checking {resource} against {} expected edges", edges.len());

    let mut unencountered: Vec<&str> = edges
        .iter()
        .map(|edge| edge.destination.name.as_str())
        .collect();

    for load in store.loads_for(resource) {
        if load.target_type == initial_type {
            continue;
        }

        // A load covers one declared edge occurrence, success or not.
        if let Some(position) = unencountered
            .iter()
            .position(|target| *target == load.target_type)
        {
            unencountered.remove(position);
        }

        if load.status != ResultStatus::Success {
            warn!("{load} was not a success");
            let status = match load.status {
                ResultStatus::Failure => RunStatus::Failed,
                _ => RunStatus::Error,
            };
            return Ok(Verdict {
                status,
                trigger: Some(Trigger::UnsuccessfulLoad {
                    resource: resource.clone(),
                    load: load.clone(),
                }),
            });
        }

        for child in &load.successes {
            let verdict = walk(graph, store, child, initial_type, stack)?;
            if !verdict.is_success() {
                warn!("subtree under {child} did not verify");
                return Ok(verdict);
            }
        }
    }

    if !unencountered.is_empty() {
        warn!(
            "{resource} has no loads for expected edges: {}",
            unencountered.join(", ")
        );
        return Ok(Verdict {
            status: RunStatus::Incomplete,
            trigger: Some(Trigger::MissingEdges {
                resource: resource.clone(),
                edges: unencountered.into_iter().map(String::from).collect(),
            }),
        });
    }

    Ok(Verdict::success())
}
