//! Step contract and step results.
//!
//! Each onboarding step implements [`SetupStep`]: it names itself and plans
//! the external commands it needs. [`execute_step`] is the only place that
//! runs a plan, so every step reports its result the same way.
//!
//! # Failure Policy
//!
//! - Every command of a plan runs, even after an earlier one failed. A
//!   failed `git clone` of an existing checkout must not stop `install.sh`.
//! - The first failing command decides the step outcome.
//! - A failing step never aborts the run.

use serde::Serialize;
use strum::Display;
use tracing::{info, warn};

use crate::command::SetupCommand;
use crate::command_runner::{CommandRunner, CommandStatus};

/// Which onboarding step a report belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    #[strum(serialize = "system update")]
    SystemUpdate,
    #[strum(serialize = "package install")]
    PackageInstall,
    #[strum(serialize = "default shell")]
    DefaultShell,
    #[strum(serialize = "nerd fonts")]
    NerdFonts,
    #[strum(serialize = "dotfiles")]
    Dotfiles,
    #[strum(serialize = "flatpaks")]
    Flatpaks,
}

/// What a step wants to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepPlan {
    /// Run these commands in order.
    Run(Vec<SetupCommand>),
    /// Nothing to do; not a failure.
    Skip(String),
    /// A precondition is missing; reported as a failure without running
    /// anything.
    Unavailable(String),
}

/// Trait implemented by every onboarding step.
pub trait SetupStep {
    fn kind(&self) -> StepKind;

    /// Build the command plan. May query the runner for binaries on `PATH`.
    fn plan(&self, runner: &mut dyn CommandRunner) -> StepPlan;
}

/// How a step ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum StepOutcome {
    /// Every command succeeded (or was only printed in dry-run mode).
    Succeeded,
    /// A command failed; `command` is the first one that did.
    Failed {
        command: String,
        status: CommandStatus,
    },
    /// A precondition was missing, nothing ran.
    Unavailable { reason: String },
    /// Nothing to do.
    Skipped { reason: String },
    /// The user answered no.
    Declined,
}

impl StepOutcome {
    pub fn is_failure(&self) -> bool {
        matches!(self, Self::Failed { .. } | Self::Unavailable { .. })
    }
}

/// One executed command and its status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandRecord {
    pub command: String,
    pub status: CommandStatus,
}

/// Result of one step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepReport {
    pub step: StepKind,
    pub outcome: StepOutcome,
    pub commands: Vec<CommandRecord>,
}

impl StepReport {
    /// Report for a gate the user declined.
    pub fn declined(step: StepKind) -> Self {
        info!("Skipping {}: declined", step);
        Self {
            step,
            outcome: StepOutcome::Declined,
            commands: Vec::new(),
        }
    }

    /// Report for a step that could not be planned.
    pub fn unavailable(step: StepKind, reason: impl Into<String>) -> Self {
        let reason = reason.into();
        warn!("{} unavailable: {}", step, reason);
        Self {
            step,
            outcome: StepOutcome::Unavailable { reason },
            commands: Vec::new(),
        }
    }
}

/// Plan and run a step, capturing every command status.
pub fn execute_step<S>(step: &S, runner: &mut dyn CommandRunner) -> StepReport
where
    S: SetupStep + ?Sized,
{
    let kind = step.kind();
    let commands = match step.plan(runner) {
        StepPlan::Run(commands) => commands,
        StepPlan::Skip(reason) => {
            info!("Skipping {}: {}", kind, reason);
            return StepReport {
                step: kind,
                outcome: StepOutcome::Skipped { reason },
                commands: Vec::new(),
            };
        }
        StepPlan::Unavailable(reason) => return StepReport::unavailable(kind, reason),
    };

    info!("Starting {} ({} command(s))", kind, commands.len());

    let mut records = Vec::with_capacity(commands.len());
    let mut outcome = StepOutcome::Succeeded;
    for command in &commands {
        let status = runner.run(command);
        let line = command.to_string();
        if !status.is_success() && outcome == StepOutcome::Succeeded {
            outcome = StepOutcome::Failed {
                command: line.clone(),
                status: status.clone(),
            };
        }
        records.push(CommandRecord {
            command: line,
            status,
        });
    }

    match &outcome {
        StepOutcome::Failed { command, .. } => warn!("{} failed at: {}", kind, command),
        _ => info!("{} finished", kind),
    }

    StepReport {
        step: kind,
        outcome,
        commands: records,
    }
}
