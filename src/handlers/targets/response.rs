//! Target response DTOs

use serde::Serialize;

use crate::models::ContainerStatus;

/// Turn-on response
#[derive(Debug, Serialize)]
pub struct TurnOnResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_output: Option<String>,
    /// Containers whose name contains the target name after launch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub containers: Option<Vec<ContainerStatus>>,
}

/// Turn-off response
#[derive(Debug, Serialize)]
pub struct TurnOffResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_output: Option<String>,
}
