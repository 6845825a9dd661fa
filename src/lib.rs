//! Targets Manager - Benchmark Target Control Plane
//!
//! This library turns Docker Compose based benchmark targets on and off
//! over HTTP and reports the containers they run.
//!
//! # Architecture
//!
//! - **Handlers**: HTTP request handlers (thin layer)
//! - **Services**: Catalog loading and target lifecycle orchestration
//! - **Runtime**: Shell command runner and Docker container inspector
//! - **Models**: Catalog and container status types

pub mod config;
pub mod constants;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod runtime;
pub mod services;
pub mod state;

#[cfg(test)]
mod test_utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
