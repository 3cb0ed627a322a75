//! Command execution
//!
//! All external commands go through a [`CommandRunner`]. The system runner
//! spawns them attached to the terminal so `sudo` and `chsh` can ask for a
//! password; the dry-run runner only prints them.
//!
//! A command's exit status never becomes an error. It comes back as a
//! [`CommandStatus`] that the step turns into its outcome.

use std::path::PathBuf;
use std::process::{Command, Stdio};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::command::SetupCommand;

/// Result of running one external command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CommandStatus {
    /// Exited with status 0.
    Success,
    /// Exited non-zero, or was killed by a signal (`exit_code` is `None`).
    Failed { exit_code: Option<i32> },
    /// The process could not be started at all.
    SpawnFailed { message: String },
    /// Not executed because of `--dry-run`.
    DryRun,
}

impl CommandStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success | Self::DryRun)
    }
}

/// Executes [`SetupCommand`]s and resolves binaries on `PATH`.
pub trait CommandRunner {
    /// Run the command to completion and report how it ended.
    fn run(&mut self, command: &SetupCommand) -> CommandStatus;

    /// Absolute path of `name` on `PATH`, if present.
    fn find_binary(&mut self, name: &str) -> Option<PathBuf>;
}

/// Runs commands for real, blocking until each child exits.
#[derive(Debug, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&mut self, command: &SetupCommand) -> CommandStatus {
        info!("Running: {}", command);

        let mut cmd = Command::new(&command.program);
        cmd.args(&command.args)
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        if let Some(dir) = &command.current_dir {
            cmd.current_dir(dir);
        }

        match cmd.status() {
            Ok(status) if status.success() => {
                info!("Command succeeded: {}", command.program);
                CommandStatus::Success
            }
            Ok(status) => {
                let code = status.code();
                warn!(
                    "Command {} failed with exit code {}",
                    command.program,
                    code.map_or_else(|| "none (signal)".to_string(), |c| c.to_string())
                );
                CommandStatus::Failed { exit_code: code }
            }
            Err(e) => {
                warn!("Failed to spawn {}: {}", command.program, e);
                CommandStatus::SpawnFailed {
                    message: e.to_string(),
                }
            }
        }
    }

    fn find_binary(&mut self, name: &str) -> Option<PathBuf> {
        find_on_path(name)
    }
}

/// Prints commands instead of running them.
///
/// Binary lookups still search `PATH`, so the preview matches what a real
/// run would do.
#[derive(Debug, Default)]
pub struct DryRunRunner {
    executed: Vec<SetupCommand>,
}

impl DryRunRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands that would have been executed, in order.
    pub fn commands(&self) -> &[SetupCommand] {
        &self.executed
    }
}

impl CommandRunner for DryRunRunner {
    fn run(&mut self, command: &SetupCommand) -> CommandStatus {
        info!("[DRY RUN] Skipped: {}", command);
        match &command.current_dir {
            Some(dir) => println!("[DRY RUN] (in {}) {}", dir.display(), command),
            None => println!("[DRY RUN] {}", command),
        }
        self.executed.push(command.clone());
        CommandStatus::DryRun
    }

    fn find_binary(&mut self, name: &str) -> Option<PathBuf> {
        find_on_path(name)
    }
}

/// Resolve a binary on `PATH`, in-process.
fn find_on_path(name: &str) -> Option<PathBuf> {
    log_lookup(name, which::which(name))
}

fn log_lookup(name: &str, found: which::Result<PathBuf>) -> Option<PathBuf> {
    match found {
        Ok(path) => {
            debug!("Resolved {} to {}", name, path.display());
            Some(path)
        }
        Err(e) => {
            debug!("{} not found on PATH: {}", name, e);
            None
        }
    }
}
