//! Dependency graph of resource types built from static declarations

mod levels;


use std::collections::{BTreeMap, HashMap};

use crate::models::{Edge, Vertex};

/// Directed graph of "produces" relationships between resource types.
///
/// Built once per run configuration from the dependency declaration and
/// read-only thereafter.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    /// Adjacency list: source vertex -> outgoing edges.
    edges: HashMap<Vertex, Vec<Edge>>,
}

impl DependencyGraph {
    /// Build the graph from a declaration mapping each resource type to the
    /// parent types it is derived from.
    ///
    /// A declaration `R -> [P1, P2]` adds the edges `P1 -> R` and `P2 -> R`,
    /// keyed by the parent. Self-referencing or unknown types are accepted
    /// as-is; the checker treats vertices without outgoing edges as
    /// automatically complete.
    pub fn build(declaration: &BTreeMap<String, Vec<String>>) -> Self {
        let mut edges: HashMap<Vertex, Vec<Edge>> = HashMap::new();

        // First pass: every declared type is a known vertex.
        for resource_type in declaration.keys() {
            edges.entry(Vertex::new(resource_type)).or_default();
        }

        // Second pass: one edge per declared parent.
        for (resource_type, parents) in declaration {
            let destination = Vertex::new(resource_type);
            for parent in parents {
                let source = Vertex::new(parent);
                let edge = Edge {
                    source: source.clone(),
                    destination: destination.clone(),
                };
                edges.entry(source).or_default().push(edge);
            }
        }

        Self { edges }
    }

    /// Outgoing edges for a vertex; empty for leaves and unknown vertices.
    pub fn edges_from(&self, vertex: &Vertex) -> &[Edge] {
        self.edges.get(vertex).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether the vertex has no declared downstream loads.
    pub fn is_leaf(&self, vertex: &Vertex) -> bool {
        self.edges_from(vertex).is_empty()
    }

    /// All known vertices, sorted by name for stable display.
    pub fn vertices(&self) -> Vec<&Vertex> {
        let mut vertices: Vec<&Vertex> = self.edges.keys().collect();
        vertices.sort_by(|a, b| a.name.cmp(&b.name));
        vertices
    }

    /// Number of known vertices.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Topological level per vertex, for layered display.
    pub fn levels(&self) -> HashMap<Vertex, usize> {
        levels::compute_levels(self)
    }
}
