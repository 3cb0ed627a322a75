//! Typed external command descriptions.
//!
//! Steps never build `std::process::Command` themselves. They describe the
//! argv they want as a [`SetupCommand`] and hand it to a
//! [`crate::command_runner::CommandRunner`], which keeps every step testable
//! without spawning processes.

use std::fmt;
use std::path::{Path, PathBuf};

/// How privileged commands get their privileges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elevation {
    /// Prefix privileged commands with `sudo`.
    Sudo,
    /// Effective UID is already 0; run privileged commands directly.
    AlreadyRoot,
}

impl Elevation {
    /// Pick the elevation strategy from the effective UID.
    pub fn detect() -> Self {
        if nix::unistd::geteuid().is_root() {
            Self::AlreadyRoot
        } else {
            Self::Sudo
        }
    }

    /// Wrap a command so it runs privileged.
    pub fn elevate(self, command: SetupCommand) -> SetupCommand {
        match self {
            Self::AlreadyRoot => command,
            Self::Sudo => {
                let mut args = Vec::with_capacity(command.args.len() + 1);
                args.push(command.program);
                args.extend(command.args);
                SetupCommand {
                    program: "sudo".to_string(),
                    args,
                    current_dir: command.current_dir,
                }
            }
        }
    }
}

/// A single external command: program, arguments and working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetupCommand {
    pub program: String,
    pub args: Vec<String>,
    pub current_dir: Option<PathBuf>,
}

impl SetupCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            current_dir: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.current_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    /// Full argv, program first.
    pub fn argv(&self) -> Vec<&str> {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .collect()
    }
}

impl fmt::Display for SetupCommand {
    /// Shell-quoted command line, e.g. `sudo dnf install -y pkgA pkgB`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match shlex::try_join(self.argv()) {
            Ok(line) => f.write_str(&line),
            // NUL bytes cannot be quoted; show the raw argv instead
            Err(_) => f.write_str(&self.argv().join(" ")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_plain_tokens() {
        let cmd = SetupCommand::new("dnf").args(["install", "-y", "pkgA", "pkgB"]);
        assert_eq!(cmd.to_string(), "dnf install -y pkgA pkgB");
    }

    #[test]
    fn test_display_quotes_shell_scripts() {
        let cmd = SetupCommand::new("sh").arg("-c").arg("curl -fsLS get.chezmoi.io | sh");
        assert_eq!(cmd.to_string(), "sh -c 'curl -fsLS get.chezmoi.io | sh'");
    }

    #[test]
    fn test_sudo_elevation_prefixes_program() {
        let cmd = Elevation::Sudo.elevate(SetupCommand::new("apt").arg("update"));
        assert_eq!(cmd.program, "sudo");
        assert_eq!(cmd.argv(), vec!["sudo", "apt", "update"]);
    }

    #[test]
    fn test_root_elevation_is_identity() {
        let original = SetupCommand::new("pacman").args(["-Syu", "--noconfirm"]);
        let cmd = Elevation::AlreadyRoot.elevate(original.clone());
        assert_eq!(cmd, original);
    }

    #[test]
    fn test_elevation_keeps_current_dir() {
        let cmd = Elevation::Sudo.elevate(SetupCommand::new("make").current_dir("/tmp"));
        assert_eq!(cmd.current_dir.as_deref(), Some(Path::new("/tmp")));
    }
}
