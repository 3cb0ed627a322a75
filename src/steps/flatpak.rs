//! Flatpak applications from Flathub.

use crate::command::SetupCommand;
use crate::command_runner::CommandRunner;
use crate::package_list::PackageList;
use crate::step_traits::{SetupStep, StepKind, StepPlan};

pub const FLATHUB_NAME: &str = "flathub";
pub const FLATHUB_REPO_URL: &str = "https://flathub.org/repo/flathub.flatpakrepo";

/// Registers Flathub (if missing) and installs every app id in one batch.
#[derive(Debug, Clone)]
pub struct FlatpakInstall {
    pub apps: PackageList,
}

impl SetupStep for FlatpakInstall {
    fn kind(&self) -> StepKind {
        StepKind::Flatpaks
    }

    fn plan(&self, _runner: &mut dyn CommandRunner) -> StepPlan {
        if self.apps.is_empty() {
            return StepPlan::Skip("flatpak list is empty".to_string());
        }

        StepPlan::Run(vec![
            SetupCommand::new("flatpak").args([
                "remote-add",
                "--if-not-exists",
                FLATHUB_NAME,
                FLATHUB_REPO_URL,
            ]),
            SetupCommand::new("flatpak")
                .arg("install")
                .args(self.apps.iter())
                .arg("-y"),
        ])
    }
}
