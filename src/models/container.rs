//! Container status models

use std::collections::BTreeMap;

use bollard::models::PortBinding;
use serde::Serialize;

/// Published host bindings keyed by container port spec (`"80/tcp"`).
/// `None` marks a port that is exposed but not published.
pub type PortMap = BTreeMap<String, Option<Vec<PortBinding>>>;

/// Status of a running container as reported by the runtime
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerStatus {
    pub name: String,
    pub id: String,
    /// Runtime state, e.g. `running` or `exited`
    pub status: String,
    pub ports: PortMap,
}

impl ContainerStatus {
    /// Case-insensitive substring match on the container name.
    /// An empty filter matches everything.
    pub fn matches(&self, filter: &str) -> bool {
        filter.is_empty() || self.name.to_lowercase().contains(&filter.to_lowercase())
    }
}
