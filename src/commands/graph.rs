//! Dependency graph display
//! Usage: census graph <manifest>

use anyhow::Result;
use colored::Colorize;
use std::collections::BTreeMap;
use std::path::Path;

use crate::graph::DependencyGraph;
use crate::manifest::parse_manifest;
use crate::models::Vertex;

/// Render the dependency graph of a manifest in topological layers.
pub fn execute(manifest_path: &Path) -> Result<()> {
    let manifest = parse_manifest(manifest_path)?;
    let graph = DependencyGraph::build(&manifest.dependencies);
    print!("{}", build_graph_display(&graph));
    Ok(())
}

/// Build a visual representation of the graph using layered levels
pub fn build_graph_display(graph: &DependencyGraph) -> String {
    if graph.is_empty() {
        return "(no resource types declared)\n".to_string();
    }

    let levels = graph.levels();

    // Group vertices by level (BTreeMap for sorted keys)
    let mut by_level: BTreeMap<usize, Vec<&Vertex>> = BTreeMap::new();
    for vertex in graph.vertices() {
        let level = levels.get(vertex).copied().unwrap_or(0);
        by_level.entry(level).or_default().push(vertex);
    }

    let mut out = String::new();
    for (level, vertices) in &by_level {
        out.push_str(&format!("{}\n", format!("Level {level}").bold()));
        for vertex in vertices {
            let destinations: Vec<&str> = graph
                .edges_from(vertex)
                .iter()
                .map(|edge| edge.destination.name.as_str())
                .collect();
            if destinations.is_empty() {
                out.push_str(&format!("  {}\n", vertex.name));
            } else {
                out.push_str(&format!("  {} → {}\n", vertex.name, destinations.join(", ")));
            }
        }
    }

    out
}
