//! End-to-end flow: manifest file on disk through parsing and verification

use census::checker::Trigger;
use census::graph::DependencyGraph;
use census::manifest::parse_manifest;
use census::models::RunStatus;
use census::runner::verify_run;
use census::store::LoadStore;
use std::fs;
use std::path::PathBuf;

const COMPLETE_MANIFEST: &str = r#"
version: 1
dependencies:
  Condition: [Patient]
  Observation: [Patient, Condition]
  Patient: []
run:
  id: run1
  initial_resources:
    - { type: Patient, id: "1234" }
    - { type: Patient, id: "5678" }
loads:
  - run_id: run1
    source: { type: Patient, id: "1234" }
    status: success
    target_type: Patient
    successes:
      - { type: Patient, id: "1234" }
  - run_id: run1
    source: { type: Patient, id: "5678" }
    status: success
    target_type: Patient
    successes:
      - { type: Patient, id: "5678" }
  - run_id: run1
    source: { type: Patient, id: "1234" }
    status: success
    target_type: Condition
    successes:
      - { type: Condition, id: "1234" }
  - run_id: run1
    source: { type: Patient, id: "1234" }
    status: success
    target_type: Condition
    successes:
      - { type: Condition, id: "5678" }
  - run_id: run1
    source: { type: Patient, id: "5678" }
    status: success
    target_type: Condition
    successes: []
  - run_id: run1
    source: { type: Patient, id: "1234" }
    status: success
    target_type: Observation
    successes:
      - { type: Observation, id: "1234" }
  - run_id: run1
    source: { type: Patient, id: "5678" }
    status: success
    target_type: Observation
    successes:
      - { type: Observation, id: "5678" }
  - run_id: run1
    source: { type: Condition, id: "1234" }
    status: success
    target_type: Observation
    successes:
      - { type: Observation, id: "1357" }
  - run_id: run1
    source: { type: Condition, id: "5678" }
    status: success
    target_type: Observation
    successes: []
"#;

const INCOMPLETE_MANIFEST: &str = r#"
version: 1
dependencies:
  Condition: [Patient]
  Observation: [Patient, Condition]
  Patient: []
run:
  id: run2
  initial_resources:
    - { type: Patient, id: "1234" }
loads:
  - run_id: run2
    source: { type: Patient, id: "1234" }
    status: success
    target_type: Patient
    successes:
      - { type: Patient, id: "1234" }
  - run_id: run2
    source: { type: Patient, id: "1234" }
    status: success
    target_type: Condition
    successes: []
"#;

fn write_manifest(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_complete_run_verifies_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_manifest(&dir, "complete.yaml", COMPLETE_MANIFEST);

    let manifest = parse_manifest(&path).unwrap();
    let graph = DependencyGraph::build(&manifest.dependencies);
    let store = LoadStore::new(manifest.loads);

    let report = verify_run(&graph, &store, &manifest.run).unwrap();

    assert_eq!(report.run_id, "run1");
    assert_eq!(report.results.len(), 2);
    assert!(report.is_success());
}

#[test]
fn test_missing_observation_edge_reports_incomplete() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_manifest(&dir, "incomplete.yaml", INCOMPLETE_MANIFEST);

    let manifest = parse_manifest(&path).unwrap();
    let graph = DependencyGraph::build(&manifest.dependencies);
    let store = LoadStore::new(manifest.loads);

    let report = verify_run(&graph, &store, &manifest.run).unwrap();

    assert!(!report.is_success());
    let verdict = &report.results[0].verdict;
    assert_eq!(verdict.status, RunStatus::Incomplete);
    match &verdict.trigger {
        Some(Trigger::MissingEdges { edges, .. }) => {
            assert_eq!(edges, &vec!["Observation".to_string()]);
        }
        other => panic!("expected missing edges trigger, got {other:?}"),
    }
}

#[test]
fn test_missing_manifest_file_is_a_readable_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.yaml");

    let err = parse_manifest(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to read manifest file"));
}
