//! Onboarding orchestration
//!
//! Runs the fixed step sequence top to bottom: detect the profile, update,
//! install packages, then each optional step right after its prompt. Step
//! failures are recorded in the [`RunSummary`] and never stop the run; only
//! an unsupported distro, an unreadable package list or a broken console do.

use std::fmt;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{info, warn};

use crate::command::Elevation;
use crate::command_runner::CommandRunner;
use crate::error::Result;
use crate::os_release::{DEFAULT_OS_RELEASE_PATH, OsRelease};
use crate::package_list::{DEFAULT_PACKAGE_FILE, PackageList};
use crate::package_manager::{DistroFamily, PackageManagerProfile};
use crate::prompt::{Gate, Prompter};
use crate::sanity;
use crate::step_traits::{StepKind, StepOutcome, StepReport, execute_step};
use crate::steps::{
    DefaultShell, DotfilesBootstrap, FlatpakInstall, NerdFontsInstall, PackageInstall,
    SystemUpdate,
};

/// Everything the run needs besides the console and the runner.
#[derive(Debug, Clone)]
pub struct SetupOptions {
    /// Native packages for the distro package manager.
    pub system_packages: PathBuf,
    /// Flatpak application ids.
    pub flatpak_packages: PathBuf,
    pub os_release: PathBuf,
    /// Skip detection and use this family's profile.
    pub distro: Option<DistroFamily>,
    pub elevation: Elevation,
    pub home: PathBuf,
}

impl SetupOptions {
    /// Defaults: `packages.txt` for both lists, `/etc/os-release`.
    pub fn new(home: PathBuf, elevation: Elevation) -> Self {
        Self {
            system_packages: PathBuf::from(DEFAULT_PACKAGE_FILE),
            flatpak_packages: PathBuf::from(DEFAULT_PACKAGE_FILE),
            os_release: PathBuf::from(DEFAULT_OS_RELEASE_PATH),
            distro: None,
            elevation,
            home,
        }
    }

    /// Forced profile, or detection from os-release.
    pub fn resolve_profile(&self) -> Result<PackageManagerProfile> {
        if let Some(family) = self.distro {
            info!("Using forced distro family {}", family);
            return Ok(family.profile());
        }
        let release = OsRelease::load(&self.os_release)?;
        PackageManagerProfile::detect(&release)
    }
}

/// Outcome of a whole run.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub package_manager: PackageManagerProfile,
    pub steps: Vec<StepReport>,
}

impl RunSummary {
    /// Reports for a given step kind.
    pub fn step(&self, kind: StepKind) -> Option<&StepReport> {
        self.steps.iter().find(|r| r.step == kind)
    }

    pub fn failures(&self) -> impl Iterator<Item = &StepReport> {
        self.steps.iter().filter(|r| r.outcome.is_failure())
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write the JSON summary to `path`.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_json()?)?;
        info!("Run summary written to {}", path.display());
        Ok(())
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Setup summary ({}):", self.package_manager.name)?;
        for report in &self.steps {
            let status = match &report.outcome {
                StepOutcome::Succeeded => "ok".to_string(),
                StepOutcome::Failed { command, .. } => format!("FAILED ({})", command),
                StepOutcome::Unavailable { reason } => format!("FAILED ({})", reason),
                StepOutcome::Skipped { reason } => format!("skipped ({})", reason),
                StepOutcome::Declined => "declined".to_string(),
            };
            writeln!(f, "  {:<16} {}", report.step.to_string(), status)?;
        }
        Ok(())
    }
}

/// The interactive onboarding run.
pub struct Onboarding<'a, R, W> {
    options: SetupOptions,
    runner: &'a mut dyn CommandRunner,
    prompter: Prompter<R, W>,
}

impl<'a, R: BufRead, W: Write> Onboarding<'a, R, W> {
    pub fn new(
        options: SetupOptions,
        runner: &'a mut dyn CommandRunner,
        prompter: Prompter<R, W>,
    ) -> Self {
        Self {
            options,
            runner,
            prompter,
        }
    }

    /// Run every step in order.
    pub fn run(&mut self) -> Result<RunSummary> {
        let profile = self.options.resolve_profile()?;
        // Read before touching the system so a missing list fails fast
        let packages = PackageList::load(&self.options.system_packages)?;
        let preflight = sanity::verify_environment(self.runner, &profile, self.options.elevation);
        if !preflight.missing_required.is_empty() {
            warn!(
                "Missing {}: the update and install steps will fail",
                preflight.missing_required.join(", ")
            );
        }

        let mut steps = Vec::new();

        steps.push(execute_step(
            &SystemUpdate {
                profile,
                elevation: self.options.elevation,
            },
            self.runner,
        ));
        steps.push(execute_step(
            &PackageInstall {
                profile,
                elevation: self.options.elevation,
                packages,
            },
            self.runner,
        ));

        steps.push(self.default_shell()?);
        steps.push(self.nerd_fonts()?);
        steps.push(self.dotfiles()?);
        steps.push(self.flatpaks()?);

        let summary = RunSummary {
            package_manager: profile,
            steps,
        };
        let failed = summary.failures().count();
        if failed > 0 {
            warn!("{} step(s) did not complete successfully", failed);
        } else {
            info!("All steps completed");
        }
        Ok(summary)
    }

    /// Consume the run and return the prompt output sink.
    pub fn into_output(self) -> W {
        self.prompter.into_output()
    }

    fn default_shell(&mut self) -> Result<StepReport> {
        if !self.prompter.confirm(Gate::Zsh)? {
            return Ok(StepReport::declined(StepKind::DefaultShell));
        }
        Ok(execute_step(&DefaultShell::default(), self.runner))
    }

    fn nerd_fonts(&mut self) -> Result<StepReport> {
        if !self.prompter.confirm(Gate::NerdFonts)? {
            return Ok(StepReport::declined(StepKind::NerdFonts));
        }
        let step = NerdFontsInstall {
            home: self.options.home.clone(),
        };
        Ok(execute_step(&step, self.runner))
    }

    fn dotfiles(&mut self) -> Result<StepReport> {
        if !self.prompter.confirm(Gate::Chezmoi)? {
            return Ok(StepReport::declined(StepKind::Dotfiles));
        }
        let location = self.prompter.ask_location()?;
        let username = self.prompter.ask_username()?;
        info!("Installing chezmoi to {} for {:?}", location, username);

        let step = DotfilesBootstrap {
            username,
            location,
            home: self.options.home.clone(),
            elevation: self.options.elevation,
        };
        Ok(execute_step(&step, self.runner))
    }

    fn flatpaks(&mut self) -> Result<StepReport> {
        if !self.prompter.confirm(Gate::Flatpak)? {
            return Ok(StepReport::declined(StepKind::Flatpaks));
        }
        match PackageList::load(&self.options.flatpak_packages) {
            Ok(apps) => Ok(execute_step(&FlatpakInstall { apps }, self.runner)),
            Err(e) => Ok(StepReport::unavailable(StepKind::Flatpaks, e.to_string())),
        }
    }
}
