//! Catalog service - Loads the benchmark catalog document

use std::io::ErrorKind;
use std::path::Path;

use serde_json::Value;
use tokio::fs;

use crate::{models::Catalog, runtime::ContainerInspector};

/// Catalog loading
pub struct CatalogService;

impl CatalogService {
    /// Load the catalog from a JSON document shaped as
    /// `{"benchmarks": [{"name": ..., "path": ...}]}`.
    ///
    /// A missing or unreadable file yields an empty catalog, as does a
    /// document that is not JSON. Neither stops the process. Entry shape is
    /// not validated.
    pub async fn load(path: &Path) -> Catalog {
        let contents = match fs::read_to_string(path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::warn!(path = %path.display(), "Benchmark catalog not found, starting empty");
                return Catalog::default();
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to read benchmark catalog");
                return Catalog::default();
            }
        };

        match serde_json::from_str::<Value>(&contents) {
            Ok(document) => {
                let catalog = Catalog::from_document(document);
                tracing::info!(
                    path = %path.display(),
                    targets = catalog.len(),
                    "Loaded benchmark catalog"
                );
                catalog
            }
            Err(e) => {
                tracing::error!(path = %path.display(), error = %e, "Failed to parse benchmark catalog");
                Catalog::default()
            }
        }
    }

    /// Startup connectivity check. Targets cannot be managed without the
    /// container runtime, so an unreachable runtime empties the catalog.
    pub async fn check_runtime(inspector: &dyn ContainerInspector, catalog: Catalog) -> Catalog {
        if let Err(e) = inspector.ping().await {
            tracing::error!("Error connecting to Docker: {}", e);
            return Catalog::default();
        }

        let containers = inspector.list("").await;
        if containers.is_empty() {
            tracing::info!("No running containers found.");
        } else {
            tracing::info!("Found {} running containers.", containers.len());
        }
        tracing::info!("Docker is running.");

        catalog
    }
}
