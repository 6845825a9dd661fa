//! Application configuration management
//!
//! This module handles loading configuration from environment variables.
//! Configuration is loaded once in `main` and handed to [`crate::AppState`].

use std::env;
use std::path::PathBuf;

use crate::constants::{
    DEFAULT_BENCHMARKS_FILE, DEFAULT_BENCHMARKS_ROOT, DEFAULT_BUILD_FLAG, DEFAULT_LOG_FILTER,
    DEFAULT_SERVER_HOST, DEFAULT_SERVER_PORT,
};

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub catalog: CatalogConfig,
    pub docker: DockerConfig,
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub rust_log: String,
}

/// Benchmark catalog configuration
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// JSON document listing the known targets
    pub benchmarks_file: PathBuf,
    /// Directory catalog paths are relative to. `None` uses catalog paths verbatim.
    pub benchmarks_root: Option<PathBuf>,
    /// Value passed as `FLAG=` to `make build`
    pub build_flag: String,
}

/// Docker configuration
#[derive(Debug, Clone)]
pub struct DockerConfig {
    /// Unix socket of the daemon. `None` uses the platform default.
    pub socket_path: Option<String>,
}

/// Variable lookup used while loading configuration
type Vars<'a> = &'a dyn Fn(&str) -> Option<String>;

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_vars(&|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source
    pub fn from_vars(vars: Vars<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            server: ServerConfig::load(vars)?,
            catalog: CatalogConfig::load(vars),
            docker: DockerConfig::load(vars),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_SERVER_HOST.to_string(),
                port: DEFAULT_SERVER_PORT,
                rust_log: DEFAULT_LOG_FILTER.to_string(),
            },
            catalog: CatalogConfig {
                benchmarks_file: PathBuf::from(DEFAULT_BENCHMARKS_FILE),
                benchmarks_root: Some(PathBuf::from(DEFAULT_BENCHMARKS_ROOT)),
                build_flag: DEFAULT_BUILD_FLAG.to_string(),
            },
            docker: DockerConfig { socket_path: None },
        }
    }
}

impl ServerConfig {
    fn load(vars: Vars<'_>) -> Result<Self, ConfigError> {
        Ok(Self {
            host: vars("SERVER_HOST").unwrap_or_else(|| DEFAULT_SERVER_HOST.to_string()),
            port: match vars("SERVER_PORT") {
                Some(port) => port
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue("SERVER_PORT".to_string()))?,
                None => DEFAULT_SERVER_PORT,
            },
            rust_log: vars("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
        })
    }
}

impl CatalogConfig {
    fn load(vars: Vars<'_>) -> Self {
        let benchmarks_root = match vars("BENCHMARKS_ROOT") {
            Some(root) if root.trim().is_empty() => None,
            Some(root) => Some(PathBuf::from(root)),
            None => Some(PathBuf::from(DEFAULT_BENCHMARKS_ROOT)),
        };

        Self {
            benchmarks_file: PathBuf::from(
                vars("BENCHMARKS_FILE").unwrap_or_else(|| DEFAULT_BENCHMARKS_FILE.to_string()),
            ),
            benchmarks_root,
            build_flag: vars("BUILD_FLAG").unwrap_or_else(|| DEFAULT_BUILD_FLAG.to_string()),
        }
    }
}

impl DockerConfig {
    fn load(vars: Vars<'_>) -> Self {
        Self {
            socket_path: vars("DOCKER_SOCKET").filter(|s| !s.is_empty()),
        }
    }
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}
