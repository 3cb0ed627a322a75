//! linux-setup library
//!
//! Core of the interactive workstation onboarding: distro detection, package
//! manager profiles, prompts, and the optional setup steps.

pub mod cli;
pub mod command;
pub mod command_runner;
pub mod error;
pub mod onboarding;
pub mod os_release;
pub mod package_list;
pub mod package_manager;
pub mod prompt;
pub mod sanity;
pub mod step_traits;
pub mod steps;

// Re-export main types for convenience
pub use command::{Elevation, SetupCommand};
pub use command_runner::{CommandRunner, CommandStatus, DryRunRunner, SystemRunner};
pub use error::{Result, SetupError};
pub use onboarding::{Onboarding, RunSummary, SetupOptions};
pub use os_release::OsRelease;
pub use package_list::PackageList;
pub use package_manager::{DistroFamily, PackageManagerProfile};
pub use prompt::{Gate, Prompter};
pub use step_traits::{SetupStep, StepKind, StepOutcome, StepPlan, StepReport, execute_step};
pub use steps::InstallLocation;
