//! Runtime collaborators
//!
//! The target controller talks to the outside world through two seams:
//!
//! 1. **Command runner** (`command.rs`): runs the `make` / `docker compose`
//!    command strings through the shell and captures their output.
//!
//! 2. **Container inspector** (`container.rs`): asks the Docker daemon which
//!    containers are running and normalizes them for responses.

pub mod command;
pub mod container;

pub use command::{CommandResult, CommandRunner, ShellCommandRunner, run_for_output};
pub use container::{ContainerInspector, DockerInspector};

#[cfg(test)]
pub use command::MockCommandRunner;
#[cfg(test)]
pub use container::MockContainerInspector;
