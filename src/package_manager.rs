//! Package manager profiles and distro detection.
//!
//! # Supported Families
//!
//! | `ID_LIKE` entry | Manager | Install          | Update             |
//! |-----------------|---------|------------------|--------------------|
//! | `ubuntu`        | apt     | `install -y`     | `update` (+ `upgrade -y`) |
//! | `fedora`        | dnf     | `install -y`     | `update -y`        |
//! | `opensuse`      | zypper  | `in -y`          | `dup -y`           |
//! | `arch`          | pacman  | `-S --noconfirm` | `-Syu --noconfirm` |
//!
//! Detection walks `ID_LIKE` in listed order and takes the first family in
//! the table. Anything else is an unsupported distro.

use serde::Serialize;
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};
use tracing::{debug, info};

use crate::command::{Elevation, SetupCommand};
use crate::error::{Result, SetupError};
use crate::os_release::OsRelease;
use crate::package_list::PackageList;

/// Distro family identifiers recognised in `ID_LIKE`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[derive(Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum DistroFamily {
    Ubuntu,
    Fedora,
    Opensuse,
    Arch,
}

impl DistroFamily {
    /// The fixed profile for this family.
    pub fn profile(self) -> PackageManagerProfile {
        match self {
            Self::Ubuntu => PackageManagerProfile {
                family: self,
                name: "apt",
                install_args: &["install", "-y"],
                update_args: &["update"],
            },
            Self::Fedora => PackageManagerProfile {
                family: self,
                name: "dnf",
                install_args: &["install", "-y"],
                update_args: &["update", "-y"],
            },
            Self::Opensuse => PackageManagerProfile {
                family: self,
                name: "zypper",
                install_args: &["in", "-y"],
                update_args: &["dup", "-y"],
            },
            Self::Arch => PackageManagerProfile {
                family: self,
                name: "pacman",
                install_args: &["-S", "--noconfirm"],
                update_args: &["-Syu", "--noconfirm"],
            },
        }
    }
}

/// Package manager name plus its install/update argument lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PackageManagerProfile {
    pub family: DistroFamily,
    pub name: &'static str,
    pub install_args: &'static [&'static str],
    pub update_args: &'static [&'static str],
}

impl PackageManagerProfile {
    /// Pick the profile for the first recognised family id, in order.
    pub fn from_family_ids<I, S>(ids: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        ids.into_iter().find_map(|id| {
            let id = id.as_ref();
            let family = DistroFamily::iter().find(|f| f.to_string() == id);
            if family.is_none() {
                debug!("Skipping unrecognised ID_LIKE entry: {}", id);
            }
            family.map(DistroFamily::profile)
        })
    }

    /// Detect the profile from os-release `ID_LIKE`.
    pub fn detect(release: &OsRelease) -> Result<Self> {
        let id_like = release.id_like();
        let profile = Self::from_family_ids(&id_like)
            .ok_or_else(|| SetupError::UnsupportedDistro {
                id_like: id_like.clone(),
            })?;
        info!(
            "Detected {} (ID_LIKE={:?}) -> {}",
            release.pretty_name().unwrap_or("unknown distro"),
            id_like,
            profile.name
        );
        Ok(profile)
    }

    /// Privileged update commands. apt additionally gets `apt upgrade -y`.
    pub fn update_commands(&self, elevation: Elevation) -> Vec<SetupCommand> {
        let update = SetupCommand::new(self.name).args(self.update_args.iter().copied());
        let mut commands = vec![elevation.elevate(update)];
        if self.name == "apt" {
            commands.push(elevation.elevate(SetupCommand::new("apt").args(["upgrade", "-y"])));
        }
        commands
    }

    /// One privileged batch install of every package, in list order.
    pub fn install_command(&self, elevation: Elevation, packages: &PackageList) -> SetupCommand {
        elevation.elevate(
            SetupCommand::new(self.name)
                .args(self.install_args.iter().copied())
                .args(packages.iter()),
        )
    }
}
