//! Target service - Turns catalog targets on and off

use std::path::PathBuf;

use crate::{
    config::CatalogConfig,
    constants::{COMPOSE_DOWN, COMPOSE_UP},
    error::{AppError, AppResult},
    handlers::targets::response::{TurnOffResponse, TurnOnResponse},
    models::{BenchmarkTarget, ContainerStatus},
    runtime::run_for_output,
    state::AppState,
};

/// Target lifecycle orchestration
pub struct TargetService;

impl TargetService {
    /// Build and launch a target, then report the containers matching its name.
    ///
    /// Containers are correlated by name only, so unrelated containers whose
    /// name contains the target id are reported too.
    pub async fn turn_on(state: &AppState, target_id: &str) -> AppResult<TurnOnResponse> {
        let target = Self::lookup(state, target_id)?;
        let command = Self::turn_on_command(&state.config().catalog, target);

        let output = run_for_output(state.runner(), &command).await;

        let containers = state.inspector().list(target_id).await;
        if !containers.is_empty() {
            tracing::info!(
                target_id = %target_id,
                containers = ?containers.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
                "Generated containers"
            );
        }

        if output.is_empty() {
            return Ok(TurnOnResponse {
                message: format!("Target {target_id} turned on, but no command output."),
                command_output: None,
                containers: None,
            });
        }

        Ok(TurnOnResponse {
            message: format!("Target {target_id} turned on."),
            command_output: Some(output),
            containers: Some(containers),
        })
    }

    /// Tear a target down
    pub async fn turn_off(state: &AppState, target_id: &str) -> AppResult<TurnOffResponse> {
        let target = Self::lookup(state, target_id)?;
        let command = Self::turn_off_command(&state.config().catalog, target);

        let output = run_for_output(state.runner(), &command).await;

        if output.is_empty() {
            return Ok(TurnOffResponse {
                message: format!("Target {target_id} turned off, but no command output."),
                command_output: None,
            });
        }

        Ok(TurnOffResponse {
            message: format!("Target {target_id} turned off."),
            command_output: Some(output),
        })
    }

    /// All running containers
    pub async fn list_containers(state: &AppState) -> Vec<ContainerStatus> {
        state.inspector().list("").await
    }

    fn lookup<'a>(state: &'a AppState, target_id: &str) -> AppResult<&'a BenchmarkTarget> {
        state.catalog().find(target_id).ok_or_else(|| {
            tracing::warn!(target_id = %target_id, "Target not in catalog");
            AppError::TargetNotFound
        })
    }

    /// Directory a target's commands run in. An empty verbatim path is the
    /// working directory; a bare `cd` would switch to `$HOME`.
    pub fn resolve_path(config: &CatalogConfig, target: &BenchmarkTarget) -> PathBuf {
        match &config.benchmarks_root {
            Some(root) => root.join(target.path.trim_start_matches(['.', '/'])),
            None if target.path.trim().is_empty() => PathBuf::from("."),
            None => PathBuf::from(&target.path),
        }
    }

    pub fn turn_on_command(config: &CatalogConfig, target: &BenchmarkTarget) -> String {
        format!(
            "cd {} && make build FLAG={} && {}",
            Self::resolve_path(config, target).display(),
            config.build_flag,
            COMPOSE_UP
        )
    }

    pub fn turn_off_command(config: &CatalogConfig, target: &BenchmarkTarget) -> String {
        format!(
            "cd {} && {}",
            Self::resolve_path(config, target).display(),
            COMPOSE_DOWN
        )
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use mockall::predicate::eq;

    use super::*;
    use crate::runtime::{MockCommandRunner, MockContainerInspector};
    use crate::test_utils::{catalog, command_result, container, inspector_with, test_state};

    const SQLI_UP: &str = "cd ./sqli && make build FLAG=someflaggoeshere && docker compose up -d";

    fn sqli_catalog() -> crate::models::Catalog {
        catalog(&[("sqli-lab", "./sqli"), ("xss-lab", "./xss")])
    }

    #[test]
    fn test_resolve_path_under_root() {
        let mut config = crate::config::Config::default().catalog;
        let target = BenchmarkTarget {
            name: "sqli-lab".into(),
            path: "./sqli".into(),
        };

        assert_eq!(
            TargetService::resolve_path(&config, &target),
            Path::new("./app/benchmarks/sqli")
        );

        config.benchmarks_root = None;
        assert_eq!(TargetService::resolve_path(&config, &target), Path::new("./sqli"));
    }

    #[test]
    fn test_empty_path_never_yields_bare_cd() {
        let mut config = crate::config::Config::default().catalog;
        config.benchmarks_root = None;
        let target = BenchmarkTarget {
            name: "no-path".into(),
            path: String::new(),
        };

        assert_eq!(
            TargetService::turn_off_command(&config, &target),
            "cd . && docker compose down"
        );
        assert_eq!(
            TargetService::turn_on_command(&config, &target),
            "cd . && make build FLAG=someflaggoeshere && docker compose up -d"
        );

        config.benchmarks_root = Some(PathBuf::from("./app/benchmarks"));
        assert_eq!(
            TargetService::turn_off_command(&config, &target),
            "cd ./app/benchmarks/ && docker compose down"
        );
    }

    #[test]
    fn test_commands_use_configured_flag() {
        let mut config = crate::config::Config::default().catalog;
        config.benchmarks_root = Some(PathBuf::from("/srv/targets"));
        config.build_flag = "CTF{local}".into();
        let target = BenchmarkTarget {
            name: "xss-lab".into(),
            path: "xss/".into(),
        };

        assert_eq!(
            TargetService::turn_on_command(&config, &target),
            "cd /srv/targets/xss/ && make build FLAG=CTF{local} && docker compose up -d"
        );
        assert_eq!(
            TargetService::turn_off_command(&config, &target),
            "cd /srv/targets/xss/ && docker compose down"
        );
    }

    #[tokio::test]
    async fn test_turn_on_runs_once_and_reports_containers() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .with(eq(SQLI_UP))
            .times(1)
            .returning(|_| Ok(command_result("built\n", "", 0)));
        let inspector = inspector_with(vec![
            container("sqli-lab-web-1"),
            container("sqli-lab-db-1"),
            container("xss-lab-web-1"),
        ]);
        let state = test_state(sqli_catalog(), runner, inspector);

        let response = TargetService::turn_on(&state, "sqli-lab").await.unwrap();

        assert_eq!(response.message, "Target sqli-lab turned on.");
        assert_eq!(response.command_output.as_deref(), Some("built"));
        let names: Vec<_> = response
            .containers
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, ["sqli-lab-web-1", "sqli-lab-db-1"]);
    }

    #[tokio::test]
    async fn test_turn_on_without_output() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .times(1)
            .returning(|_| Ok(command_result("", "", 0)));
        let state = test_state(sqli_catalog(), runner, inspector_with(vec![]));

        let response = TargetService::turn_on(&state, "sqli-lab").await.unwrap();

        assert_eq!(
            response.message,
            "Target sqli-lab turned on, but no command output."
        );
        assert!(response.command_output.is_none());
        assert!(response.containers.is_none());
    }

    #[tokio::test]
    async fn test_turn_on_failure_surfaces_stderr() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .times(1)
            .returning(|_| Ok(command_result("", "make: *** No rule to make target 'build'.", 2)));
        let state = test_state(sqli_catalog(), runner, inspector_with(vec![]));

        let response = TargetService::turn_on(&state, "sqli-lab").await.unwrap();

        assert_eq!(
            response.command_output.as_deref(),
            Some("make: *** No rule to make target 'build'.")
        );
        assert_eq!(response.containers.map(|c| c.len()), Some(0));
    }

    // Unknown targets are rejected the same way by turn-on and turn-off
    #[tokio::test]
    async fn test_turn_on_unknown_target_runs_nothing() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();
        let mut inspector = MockContainerInspector::new();
        inspector.expect_list().never();
        let state = test_state(sqli_catalog(), runner, inspector);

        let err = TargetService::turn_on(&state, "ghost").await.unwrap_err();
        assert!(matches!(err, AppError::TargetNotFound));
    }

    #[tokio::test]
    async fn test_turn_off_runs_compose_down_once() {
        let mut runner = MockCommandRunner::new();
        runner
            .expect_run()
            .with(eq("cd ./xss && docker compose down"))
            .times(1)
            .returning(|_| Ok(command_result("", " Container xss-lab-web-1  Removed\n", 0)));
        let mut inspector = MockContainerInspector::new();
        inspector.expect_list().never();
        let state = test_state(sqli_catalog(), runner, inspector);

        let response = TargetService::turn_off(&state, "xss-lab").await.unwrap();

        assert_eq!(response.message, "Target xss-lab turned off.");
        assert_eq!(
            response.command_output.as_deref(),
            Some("Container xss-lab-web-1  Removed")
        );
    }

    #[tokio::test]
    async fn test_turn_off_unknown_target_runs_nothing() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();
        let state = test_state(sqli_catalog(), runner, MockContainerInspector::new());

        let err = TargetService::turn_off(&state, "ghost").await.unwrap_err();
        assert!(matches!(err, AppError::TargetNotFound));
    }

    #[tokio::test]
    async fn test_launch_failure_is_reported_as_output() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(1).returning(|_| {
            Err(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "permission denied",
            ))
        });
        let state = test_state(sqli_catalog(), runner, MockContainerInspector::new());

        let response = TargetService::turn_off(&state, "sqli-lab").await.unwrap();
        assert_eq!(response.command_output.as_deref(), Some("permission denied"));
    }

    #[tokio::test]
    async fn test_list_containers_is_unfiltered() {
        let state = test_state(
            sqli_catalog(),
            MockCommandRunner::new(),
            inspector_with(vec![container("foo-web-1"), container("bar-web-1")]),
        );

        let containers = TargetService::list_containers(&state).await;
        assert_eq!(containers.len(), 2);
    }
}
