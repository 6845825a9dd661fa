//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{
    config::Config,
    models::Catalog,
    runtime::{CommandRunner, ContainerInspector},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Application configuration
    config: Config,

    /// Targets loaded at startup, read-only afterwards
    catalog: Catalog,

    /// Runs target build/launch/teardown commands
    runner: Arc<dyn CommandRunner>,

    /// Reports the containers a target produced
    inspector: Arc<dyn ContainerInspector>,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        config: Config,
        catalog: Catalog,
        runner: Arc<dyn CommandRunner>,
        inspector: Arc<dyn ContainerInspector>,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                runner,
                inspector,
            }),
        }
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get a reference to the benchmark catalog
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the command runner
    pub fn runner(&self) -> &dyn CommandRunner {
        self.inner.runner.as_ref()
    }

    /// Get a reference to the container inspector
    pub fn inspector(&self) -> &dyn ContainerInspector {
        self.inner.inspector.as_ref()
    }
}
