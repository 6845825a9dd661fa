//! Application-wide constants
//!
//! Defaults for configuration values and the fixed strings the target
//! controller puts into commands and responses.

// =============================================================================
// SERVER DEFAULTS
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8000;

/// Default log filter when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

// =============================================================================
// CATALOG DEFAULTS
// =============================================================================

/// Default location of the benchmark catalog document
pub const DEFAULT_BENCHMARKS_FILE: &str = "app/benchmarks/benchmarks.json";

/// Default directory that catalog paths are relative to
pub const DEFAULT_BENCHMARKS_ROOT: &str = "./app/benchmarks";

/// Default value passed as `FLAG=` to `make build`
pub const DEFAULT_BUILD_FLAG: &str = "someflaggoeshere";

// =============================================================================
// COMMANDS
// =============================================================================

/// Shell used to interpret target commands
pub const SHELL: &str = "sh";

/// Compose invocation that launches a target in the background
pub const COMPOSE_UP: &str = "docker compose up -d";

/// Compose invocation that tears a target down
pub const COMPOSE_DOWN: &str = "docker compose down";
