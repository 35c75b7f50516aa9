//! Immutable store of load records, indexed by source resource

use std::collections::HashMap;

use crate::models::{Load, Resource};

/// Read-only collection of the load records gathered for one run.
///
/// The index from source resource to record positions is built once at
/// construction so per-resource lookups during verification are O(1); the
/// index preserves record order. The store never changes after
/// construction and can be shared across concurrent checks.
#[derive(Debug, Clone, Default)]
pub struct LoadStore {
    loads: Vec<Load>,
    by_source: HashMap<Resource, Vec<usize>>,
}

impl LoadStore {
    pub fn new(loads: Vec<Load>) -> Self {
        let mut by_source: HashMap<Resource, Vec<usize>> = HashMap::new();
        for (index, load) in loads.iter().enumerate() {
            by_source.entry(load.source.clone()).or_default().push(index);
        }

        Self { loads, by_source }
    }

    /// All loads whose source is the given resource, in record order.
    pub fn loads_for(&self, resource: &Resource) -> Vec<&Load> {
        self.by_source
            .get(resource)
            .map(|indices| indices.iter().map(|&index| &self.loads[index]).collect())
            .unwrap_or_default()
    }

    /// All loads in record order.
    pub fn all(&self) -> &[Load] {
        &self.loads
    }

    pub fn len(&self) -> usize {
        self.loads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.loads.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ResultStatus;

    fn load(source: Resource, target: &str) -> Load {
        Load {
            run_id: "run1".to_string(),
            source,
            status: ResultStatus::Success,
            target_type: target.to_string(),
            successes: vec![],
            failures: vec![],
            recorded_at: None,
        }
    }

    #[test]
    fn test_loads_for_filters_by_source() {
        let patient = Resource::new("Patient", "1234");
        let other = Resource::new("Patient", "5678");
        let store = LoadStore::new(vec![
            load(patient.clone(), "Condition"),
            load(other.clone(), "Condition"),
            load(patient.clone(), "Observation"),
        ]);

        let loads = store.loads_for(&patient);
        assert_eq!(loads.len(), 2);
        assert!(loads.iter().all(|l| l.source == patient));
    }

    #[test]
    fn test_loads_for_preserves_record_order() {
        let patient = Resource::new("Patient", "1234");
        let store = LoadStore::new(vec![
            load(patient.clone(), "Condition"),
            load(patient.clone(), "Observation"),
            load(patient.clone(), "Condition"),
        ]);

        let targets: Vec<&str> = store
            .loads_for(&patient)
            .iter()
            .map(|l| l.target_type.as_str())
            .collect();
        assert_eq!(targets, vec!["Condition", "Observation", "Condition"]);
    }

    #[test]
    fn test_unknown_resource_has_no_loads() {
        let store = LoadStore::new(vec![load(Resource::new("Patient", "1234"), "Condition")]);
        assert!(store.loads_for(&Resource::new("Patient", "9999")).is_empty());
    }

    #[test]
    fn test_lookup_uses_structural_equality() {
        let store = LoadStore::new(vec![load(Resource::new("Patient", "1234"), "Condition")]);

        // A separately constructed resource with the same fields matches.
        let lookup = Resource::new("Patient", "1234");
        assert_eq!(store.loads_for(&lookup).len(), 1);
    }
}
