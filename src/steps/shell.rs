//! Login shell switch (`chsh -s <zsh>`).

use crate::command::SetupCommand;
use crate::command_runner::CommandRunner;
use crate::step_traits::{SetupStep, StepKind, StepPlan};

/// Sets `shell` as the invoking user's login shell.
///
/// The binary is resolved on `PATH` first; `chsh` asks for the user's
/// password itself.
#[derive(Debug, Clone)]
pub struct DefaultShell {
    pub shell: String,
}

impl Default for DefaultShell {
    fn default() -> Self {
        Self {
            shell: "zsh".to_string(),
        }
    }
}

impl SetupStep for DefaultShell {
    fn kind(&self) -> StepKind {
        StepKind::DefaultShell
    }

    fn plan(&self, runner: &mut dyn CommandRunner) -> StepPlan {
        match runner.find_binary(&self.shell) {
            Some(path) => StepPlan::Run(vec![
                SetupCommand::new("chsh")
                    .arg("-s")
                    .arg(path.display().to_string()),
            ]),
            None => StepPlan::Unavailable(format!("{} not found on PATH", self.shell)),
        }
    }
}
