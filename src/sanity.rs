//! Pre-flight binary checks
//!
//! Looks up every external program the run may call and warns about the
//! missing ones. Nothing here is fatal: a missing `flatpak` only matters if
//! the user opts in to flatpaks, and the step itself reports the failure.

use tracing::{debug, info, warn};

use crate::command::Elevation;
use crate::command_runner::CommandRunner;
use crate::package_manager::PackageManagerProfile;

/// Binaries needed by the optional steps.
const OPTIONAL_BINARIES: &[&str] = &[
    "chsh",    // default shell
    "git",     // nerd fonts
    "curl",    // chezmoi installer
    "sh",      // chezmoi installer
    "flatpak", // flatpaks
];

/// Result of the binary lookup.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct SanityCheckResult {
    /// Needed for the mandatory update/install steps.
    pub missing_required: Vec<String>,
    /// Needed only by an optional step.
    pub missing_optional: Vec<String>,
}

impl SanityCheckResult {
    /// Returns true if nothing is missing
    pub fn is_ok(&self) -> bool {
        self.missing_required.is_empty() && self.missing_optional.is_empty()
    }
}

/// Binaries the mandatory steps call for this profile.
pub fn required_binaries(profile: &PackageManagerProfile, elevation: Elevation) -> Vec<&'static str> {
    let mut binaries = Vec::with_capacity(2);
    if elevation == Elevation::Sudo {
        binaries.push("sudo");
    }
    binaries.push(profile.name);
    binaries
}

/// Look up every binary and log what is missing.
pub fn verify_environment(
    runner: &mut dyn CommandRunner,
    profile: &PackageManagerProfile,
    elevation: Elevation,
) -> SanityCheckResult {
    debug!("Running pre-flight binary checks...");

    let mut result = SanityCheckResult::default();

    for binary in required_binaries(profile, elevation) {
        if runner.find_binary(binary).is_none() {
            warn!("Required binary not found on PATH: {}", binary);
            result.missing_required.push(binary.to_string());
        }
    }

    for binary in OPTIONAL_BINARIES {
        if runner.find_binary(binary).is_none() {
            warn!("Optional binary not found on PATH: {} (its step will fail if chosen)", binary);
            result.missing_optional.push((*binary).to_string());
        }
    }

    if result.is_ok() {
        info!("Pre-flight checks passed: all binaries present");
    }
    result
}
