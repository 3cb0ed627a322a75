//! chezmoi bootstrap.
//!
//! The upstream installer is fetched with curl and piped into `sh`, which
//! drops the chezmoi binary into the chosen bin directory. chezmoi then
//! clones `github.com/<user>/dotfiles` and applies it.
//!
//! # Location
//!
//! | Choice   | Bin directory | Installer runs as |
//! |----------|---------------|-------------------|
//! | `System` | `/bin`        | root (elevated)   |
//! | `Local`  | `~/bin`       | invoking user     |
//!
//! `chezmoi init --apply` always runs as the invoking user so the dotfiles
//! land in their home, not root's.

use std::path::{Path, PathBuf};

use serde::Serialize;
use strum::Display;

use crate::command::{Elevation, SetupCommand};
use crate::command_runner::CommandRunner;
use crate::step_traits::{SetupStep, StepKind, StepPlan};

pub const CHEZMOI_INSTALL_URL: &str = "get.chezmoi.io";

/// Where the chezmoi binary is installed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum InstallLocation {
    /// System-wide, `/bin`.
    #[default]
    #[strum(serialize = "/bin")]
    System,
    /// Per-user, `~/bin`.
    #[strum(serialize = "~/bin")]
    Local,
}

impl InstallLocation {
    /// Concrete bin directory, with `~` expanded against `home`.
    pub fn bin_dir(self, home: &Path) -> PathBuf {
        match self {
            Self::System => PathBuf::from("/bin"),
            Self::Local => home.join("bin"),
        }
    }

    pub fn needs_elevation(self) -> bool {
        matches!(self, Self::System)
    }
}

/// Installs chezmoi into `location` and applies `username`'s dotfiles.
#[derive(Debug, Clone)]
pub struct DotfilesBootstrap {
    pub username: String,
    pub location: InstallLocation,
    pub home: PathBuf,
    pub elevation: Elevation,
}

impl DotfilesBootstrap {
    fn installer_command(&self, bin_dir: &Path) -> SetupCommand {
        let quoted_dir = shlex::try_quote(&bin_dir.display().to_string())
            .map(|q| q.into_owned())
            .unwrap_or_else(|_| bin_dir.display().to_string());
        let script = format!(
            "curl -fsLS {} | sh -s -- -b {}",
            CHEZMOI_INSTALL_URL, quoted_dir
        );
        let command = SetupCommand::new("sh")
            .arg("-c")
            .arg(script)
            .current_dir(&self.home);

        if self.location.needs_elevation() {
            self.elevation.elevate(command)
        } else {
            command
        }
    }
}

impl SetupStep for DotfilesBootstrap {
    fn kind(&self) -> StepKind {
        StepKind::Dotfiles
    }

    fn plan(&self, _runner: &mut dyn CommandRunner) -> StepPlan {
        if self.username.is_empty() {
            return StepPlan::Skip("no GitHub username given".to_string());
        }
        // chezmoi would parse it as an option
        if self.username.starts_with('-') {
            return StepPlan::Skip(format!("invalid GitHub username {:?}", self.username));
        }

        let bin_dir = self.location.bin_dir(&self.home);
        let chezmoi = bin_dir.join("chezmoi");

        StepPlan::Run(vec![
            self.installer_command(&bin_dir),
            SetupCommand::new(chezmoi.display().to_string())
                .args(["init", "--apply"])
                .arg(self.username.clone())
                .current_dir(&self.home),
        ])
    }
}
