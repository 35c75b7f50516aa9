use serde::{Deserialize, Serialize};
use std::fmt;

/// A resource type treated as a node in the dependency graph.
///
/// Identity is solely the type name; two vertices with the same name are
/// interchangeable.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Vertex {
    pub name: String,
}

impl Vertex {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A directed "produces" relationship between two resource types:
/// `destination` resources are expected to be derivable from `source`
/// resources.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Edge {
    pub source: Vertex,
    pub destination: Vertex,
}

/// A concrete resource instance, identified by type and id.
///
/// Equality is structural over both fields; graph lookups and set
/// operations depend on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Resource {
    #[serde(rename = "type")]
    pub resource_type: String,
    pub id: String,
}

impl Resource {
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// The graph vertex this resource belongs to.
    pub fn vertex(&self) -> Vertex {
        Vertex::new(&self.resource_type)
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.resource_type, self.id)
    }
}
