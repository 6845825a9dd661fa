//! Container status handlers

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::{models::ContainerStatus, services::TargetService, state::AppState};

/// Containers list response
#[derive(Debug, Serialize)]
pub struct ContainersListResponse {
    pub containers: Vec<ContainerStatus>,
}

/// List every running container
async fn list_containers(State(state): State<AppState>) -> Json<ContainersListResponse> {
    Json(ContainersListResponse {
        containers: TargetService::list_containers(&state).await,
    })
}

/// Container routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/containers", get(list_containers))
}
