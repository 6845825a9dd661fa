//! Benchmark target handlers

mod handler;
pub mod response;

pub use handler::*;
pub use response::*;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Target routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/benchmarks", get(handler::list_benchmarks))
        .route("/turn-on/{target_id}", get(handler::turn_on_target))
        .route("/turn-off/{target_id}", get(handler::turn_off_target))
}
