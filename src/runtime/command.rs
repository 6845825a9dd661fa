//! Shell command execution for target lifecycle commands

use std::io;
use std::process::Stdio;

use async_trait::async_trait;
use tokio::process::Command;

use crate::constants::SHELL;

/// Captured result of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CommandResult {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }

    /// The single string surfaced to clients: trimmed stdout on success,
    /// falling back to stderr when stdout is empty or the command failed.
    pub fn output(&self) -> String {
        let stdout = self.stdout.trim();
        if self.success() && !stdout.is_empty() {
            stdout.to_string()
        } else {
            self.stderr.trim().to_string()
        }
    }
}

/// Executes shell command strings to completion
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandRunner: Send + Sync {
    /// Run `command` through the shell and wait for it to exit.
    /// A non-zero exit is a normal result; `Err` means the shell never ran.
    async fn run(&self, command: &str) -> io::Result<CommandResult>;
}

/// Run `command` and project the result into the client-facing string.
/// Launch failures become their error message.
pub async fn run_for_output(runner: &dyn CommandRunner, command: &str) -> String {
    match runner.run(command).await {
        Ok(result) => result.output(),
        Err(e) => e.to_string(),
    }
}

/// [`CommandRunner`] backed by `sh -c`
#[derive(Debug, Clone, Default)]
pub struct ShellCommandRunner;

impl ShellCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl CommandRunner for ShellCommandRunner {
    async fn run(&self, command: &str) -> io::Result<CommandResult> {
        tracing::info!(command = %command, "Executing command");

        let output = Command::new(SHELL)
            .arg("-c")
            .arg(command)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
            .inspect_err(|e| {
                tracing::error!(command = %command, error = %e, "Failed to launch command");
            })?;

        let result = CommandResult {
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
            // Killed by a signal
            exit_code: output.status.code().unwrap_or(-1),
        };

        if result.success() {
            tracing::info!(output = %result.stdout.trim(), "Command executed successfully");
        } else {
            tracing::error!(
                exit_code = result.exit_code,
                stderr = %result.stderr.trim(),
                "Command failed"
            );
        }

        Ok(result)
    }
}
