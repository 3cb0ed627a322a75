//! Onboarding steps.
//!
//! Each module holds one or two structs implementing
//! [`crate::step_traits::SetupStep`]. They only describe commands; running
//! them is [`crate::step_traits::execute_step`]'s job.

pub mod dotfiles;
pub mod flatpak;
pub mod fonts;
pub mod shell;
pub mod system;

pub use dotfiles::{DotfilesBootstrap, InstallLocation};
pub use flatpak::FlatpakInstall;
pub use fonts::NerdFontsInstall;
pub use shell::DefaultShell;
pub use system::{PackageInstall, SystemUpdate};
