use clap::Parser;
use std::path::PathBuf;

use crate::command::Elevation;
use crate::onboarding::SetupOptions;
use crate::os_release::DEFAULT_OS_RELEASE_PATH;
use crate::package_list::DEFAULT_PACKAGE_FILE;
use crate::package_manager::DistroFamily;

/// linux-setup - Interactive onboarding for a fresh Linux workstation
#[derive(Parser, Debug)]
#[command(name = "linux-setup")]
#[command(about = "Update the system, install your packages, and optionally set up zsh, Nerd Fonts, chezmoi dotfiles and flatpaks")]
#[command(version)]
pub struct Cli {
    /// Newline-delimited list of system packages
    #[arg(long, value_name = "PATH", default_value = DEFAULT_PACKAGE_FILE)]
    pub packages: PathBuf,

    /// Newline-delimited list of flatpak application ids (defaults to the package list)
    #[arg(long, value_name = "PATH")]
    pub flatpaks: Option<PathBuf>,

    /// os-release file used for distro detection
    #[arg(long, value_name = "PATH", default_value = DEFAULT_OS_RELEASE_PATH)]
    pub os_release: PathBuf,

    /// Skip detection and use this distro family (ubuntu, fedora, opensuse, arch)
    #[arg(long, value_name = "FAMILY")]
    pub distro: Option<DistroFamily>,

    /// Dry-run mode: print the commands instead of executing them.
    ///
    /// Prompts are still asked and binaries are still looked up, so the
    /// preview follows the same path as a real run.
    #[arg(long)]
    pub dry_run: bool,

    /// Write the run summary as JSON to this file
    #[arg(long, value_name = "PATH")]
    pub summary: Option<PathBuf>,
}

impl Cli {
    pub fn parse_args() -> Self {
        <Self as clap::Parser>::parse()
    }

    /// Build run options for the given home directory and elevation.
    pub fn setup_options(&self, home: PathBuf, elevation: Elevation) -> SetupOptions {
        let mut options = SetupOptions::new(home, elevation);
        options.system_packages = self.packages.clone();
        options.flatpak_packages = self.flatpaks.clone().unwrap_or_else(|| self.packages.clone());
        options.os_release = self.os_release.clone();
        options.distro = self.distro;
        options
    }
}
