//! Target handler implementations

use axum::{
    Json,
    extract::{Path, State},
};

use serde_json::Value;

use crate::{error::AppResult, services::TargetService, state::AppState};

use super::response::{TurnOffResponse, TurnOnResponse};

/// Serve the catalog document exactly as loaded at startup
pub async fn list_benchmarks(State(state): State<AppState>) -> Json<Value> {
    Json(state.catalog().document().clone())
}

/// Build and launch a target
pub async fn turn_on_target(
    State(state): State<AppState>,
    Path(target_id): Path<String>,
) -> AppResult<Json<TurnOnResponse>> {
    let response = TargetService::turn_on(&state, &target_id).await?;
    Ok(Json(response))
}

/// Tear a target down
pub async fn turn_off_target(
    State(state): State<AppState>,
    Path(target_id): Path<String>,
) -> AppResult<Json<TurnOffResponse>> {
    let response = TargetService::turn_off(&state, &target_id).await?;
    Ok(Json(response))
}
