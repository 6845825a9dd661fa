//! Test utilities
//!
//! Application state wired to mock runtime collaborators, plus small
//! builders for catalog entries, containers and command results.

use std::sync::Arc;

use crate::{
    config::Config,
    models::{BenchmarkTarget, Catalog, ContainerStatus, PortMap},
    runtime::{CommandResult, MockCommandRunner, MockContainerInspector},
    state::AppState,
};

/// Configuration that runs commands in catalog paths verbatim
pub fn verbatim_config() -> Config {
    let mut config = Config::default();
    config.catalog.benchmarks_root = None;
    config
}

/// Catalog from `(name, path)` pairs in order
pub fn catalog(targets: &[(&str, &str)]) -> Catalog {
    Catalog::new(
        targets
            .iter()
            .map(|(name, path)| BenchmarkTarget {
                name: name.to_string(),
                path: path.to_string(),
            })
            .collect(),
    )
}

/// A running container without published ports
pub fn container(name: &str) -> ContainerStatus {
    ContainerStatus {
        name: name.to_string(),
        id: format!("{name}-id"),
        status: "running".to_string(),
        ports: PortMap::new(),
    }
}

pub fn command_result(stdout: &str, stderr: &str, exit_code: i32) -> CommandResult {
    CommandResult {
        stdout: stdout.to_string(),
        stderr: stderr.to_string(),
        exit_code,
    }
}

/// Inspector mock that filters a fixed container list the way the runtime does
pub fn inspector_with(containers: Vec<ContainerStatus>) -> MockContainerInspector {
    let mut inspector = MockContainerInspector::new();
    inspector.expect_list().returning(move |filter| {
        containers
            .iter()
            .filter(|c| c.matches(filter))
            .cloned()
            .collect()
    });
    inspector
}

/// Application state with verbatim paths and the given mocks
pub fn test_state(
    catalog: Catalog,
    runner: MockCommandRunner,
    inspector: MockContainerInspector,
) -> AppState {
    AppState::new(
        verbatim_config(),
        catalog,
        Arc::new(runner),
        Arc::new(inspector),
    )
}
