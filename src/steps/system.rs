//! System update and batch package install.

use crate::command::Elevation;
use crate::command_runner::CommandRunner;
use crate::package_list::PackageList;
use crate::package_manager::PackageManagerProfile;
use crate::step_traits::{SetupStep, StepKind, StepPlan};

// ============================================================================
// System Update
// ============================================================================

/// `sudo <mgr> <update_args>`, plus `sudo apt upgrade -y` on apt.
#[derive(Debug, Clone)]
pub struct SystemUpdate {
    pub profile: PackageManagerProfile,
    pub elevation: Elevation,
}

impl SetupStep for SystemUpdate {
    fn kind(&self) -> StepKind {
        StepKind::SystemUpdate
    }

    fn plan(&self, _runner: &mut dyn CommandRunner) -> StepPlan {
        StepPlan::Run(self.profile.update_commands(self.elevation))
    }
}

// ============================================================================
// Package Install
// ============================================================================

/// `sudo <mgr> <install_args> <packages...>` in a single invocation.
#[derive(Debug, Clone)]
pub struct PackageInstall {
    pub profile: PackageManagerProfile,
    pub elevation: Elevation,
    pub packages: PackageList,
}

impl SetupStep for PackageInstall {
    fn kind(&self) -> StepKind {
        StepKind::PackageInstall
    }

    fn plan(&self, _runner: &mut dyn CommandRunner) -> StepPlan {
        if self.packages.is_empty() {
            return StepPlan::Skip("package list is empty".to_string());
        }
        StepPlan::Run(vec![
            self.profile.install_command(self.elevation, &self.packages),
        ])
    }
}
