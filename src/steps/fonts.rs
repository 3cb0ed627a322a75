//! Nerd Fonts install: shallow clone of the upstream repo, then its
//! bundled `install.sh` run from inside the checkout.

use std::path::PathBuf;

use crate::command::SetupCommand;
use crate::command_runner::CommandRunner;
use crate::step_traits::{SetupStep, StepKind, StepPlan};

pub const NERD_FONTS_REPO: &str = "https://github.com/ryanoasis/nerd-fonts.git";

/// Clones into `<home>/nerd-fonts` and runs `install.sh` there.
#[derive(Debug, Clone)]
pub struct NerdFontsInstall {
    pub home: PathBuf,
}

impl NerdFontsInstall {
    pub fn checkout_dir(&self) -> PathBuf {
        self.home.join("nerd-fonts")
    }
}

impl SetupStep for NerdFontsInstall {
    fn kind(&self) -> StepKind {
        StepKind::NerdFonts
    }

    fn plan(&self, _runner: &mut dyn CommandRunner) -> StepPlan {
        StepPlan::Run(vec![
            SetupCommand::new("git")
                .args(["clone", NERD_FONTS_REPO, "--depth", "1"])
                .current_dir(&self.home),
            SetupCommand::new(self.checkout_dir().join("install.sh").display().to_string())
                .current_dir(self.checkout_dir()),
        ])
    }
}
