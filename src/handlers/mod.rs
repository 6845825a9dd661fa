//! HTTP Request Handlers
//!
//! This module contains all HTTP request handlers organized by domain.

pub mod containers;
pub mod health;
pub mod targets;

use axum::{Router, middleware};
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};

use crate::{
    middleware::{cors_layer, logging_middleware, panic_response},
    state::AppState,
};

/// Create all API routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(health::routes())
        .merge(targets::routes())
        .merge(containers::routes())
}

/// Full application router with panic recovery, tracing, request logging and CORS
pub fn app(state: AppState) -> Router {
    with_layers(routes()).with_state(state)
}

fn with_layers(router: Router<AppState>) -> Router<AppState> {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(middleware::from_fn(logging_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}
