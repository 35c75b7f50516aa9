//! Topological level computation for layered graph display

use std::collections::{HashMap, HashSet};

use crate::models::Vertex;

use super::DependencyGraph;

/// Compute the topological level for each vertex.
/// Level = max(levels of all parents) + 1, with roots at level 0.
pub(super) fn compute_levels(graph: &DependencyGraph) -> HashMap<Vertex, usize> {
    // Reverse adjacency: vertex -> the vertices it is derived from.
    let mut parents: HashMap<Vertex, Vec<Vertex>> = HashMap::new();
    for vertex in graph.vertices() {
        parents.entry(vertex.clone()).or_default();
        for edge in graph.edges_from(vertex) {
            parents
                .entry(edge.destination.clone())
                .or_default()
                .push(vertex.clone());
        }
    }

    let mut levels = HashMap::new();
    let vertices: Vec<Vertex> = parents.keys().cloned().collect();
    for vertex in &vertices {
        let mut visiting = HashSet::new();
        get_level(vertex, &parents, &mut levels, &mut visiting);
    }

    levels
}

fn get_level(
    vertex: &Vertex,
    parents: &HashMap<Vertex, Vec<Vertex>>,
    levels: &mut HashMap<Vertex, usize>,
    visiting: &mut HashSet<Vertex>,
) -> usize {
    if let Some(&level) = levels.get(vertex) {
        return level;
    }

    // Cycle guard for display only; the checker reports cycles as errors.
    if !visiting.insert(vertex.clone()) {
        return 0;
    }

    let level = match parents.get(vertex) {
        Some(sources) if !sources.is_empty() => {
            sources
                .iter()
                .map(|source| get_level(source, parents, levels, visiting))
                .max()
                .unwrap_or(0)
                + 1
        }
        _ => 0,
    };

    visiting.remove(vertex);
    levels.insert(vertex.clone(), level);
    level
}
