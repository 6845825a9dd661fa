//! Container discovery through the Docker Engine API

use async_trait::async_trait;
use bollard::{
    API_DEFAULT_VERSION, Docker, models::ContainerSummary, models::PortBinding,
    query_parameters::ListContainersOptions,
};

use crate::{
    config::DockerConfig,
    error::AppResult,
    models::{ContainerStatus, PortMap},
};

/// Seconds before a request to the Docker daemon times out
const DOCKER_TIMEOUT_SECS: u64 = 120;

/// Reports on containers known to the runtime
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContainerInspector: Send + Sync {
    /// Check that the runtime is reachable
    async fn ping(&self) -> AppResult<()>;

    /// List running containers whose name contains `filter` (case-insensitive).
    /// Runtime failures yield an empty list.
    async fn list(&self, filter: &str) -> Vec<ContainerStatus>;
}

/// [`ContainerInspector`] that opens a fresh daemon connection per call
#[derive(Debug, Clone)]
pub struct DockerInspector {
    config: DockerConfig,
}

impl DockerInspector {
    /// Create a new inspector
    pub fn new(config: DockerConfig) -> Self {
        Self { config }
    }

    fn connect(&self) -> Result<Docker, bollard::errors::Error> {
        match &self.config.socket_path {
            Some(path) => Docker::connect_with_socket(path, DOCKER_TIMEOUT_SECS, API_DEFAULT_VERSION),
            None => Docker::connect_with_local_defaults(),
        }
    }

    async fn running_containers(&self) -> Result<Vec<ContainerSummary>, bollard::errors::Error> {
        let docker = self.connect()?;
        docker
            .list_containers(None::<ListContainersOptions>)
            .await
    }
}

#[async_trait]
impl ContainerInspector for DockerInspector {
    async fn ping(&self) -> AppResult<()> {
        let docker = self.connect()?;
        docker.ping().await?;
        Ok(())
    }

    async fn list(&self, filter: &str) -> Vec<ContainerStatus> {
        tracing::info!(filter = %filter, "Fetching containers");

        match self.running_containers().await {
            Ok(containers) => containers
                .into_iter()
                .map(container_status)
                .filter(|c| c.matches(filter))
                .collect(),
            Err(e) => {
                tracing::error!(error = %e, "Error fetching containers");
                Vec::new()
            }
        }
    }
}

/// Normalize a runtime container summary
fn container_status(summary: ContainerSummary) -> ContainerStatus {
    let mut ports = PortMap::new();
    for port in summary.ports.unwrap_or_default() {
        add_port(
            &mut ports,
            port.private_port,
            port.typ.map(|t| t.to_string()),
            port.ip,
            port.public_port,
        );
    }

    ContainerStatus {
        name: summary
            .names
            .and_then(|names| names.into_iter().next())
            .map(|name| name.trim_start_matches('/').to_string())
            .unwrap_or_default(),
        id: summary.id.unwrap_or_default(),
        status: summary.state.map(|s| s.to_string()).unwrap_or_default(),
        ports,
    }
}

/// Fold one runtime port entry into the `"<port>/<proto>"` keyed map.
/// Entries without a public port mark the port as exposed but unpublished.
fn add_port(
    ports: &mut PortMap,
    private_port: u16,
    protocol: Option<String>,
    host_ip: Option<String>,
    public_port: Option<u16>,
) {
    let protocol = protocol.filter(|p| !p.is_empty()).unwrap_or_else(|| "tcp".to_string());
    let bindings = ports.entry(format!("{private_port}/{protocol}")).or_insert(None);

    if let Some(public_port) = public_port {
        bindings.get_or_insert_with(Vec::new).push(PortBinding {
            host_ip: Some(host_ip.unwrap_or_default()),
            host_port: Some(public_port.to_string()),
        });
    }
}
