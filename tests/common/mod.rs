//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::io::Cursor;
use std::path::{Path, PathBuf};

use linux_setup::{
    CommandRunner, CommandStatus, Elevation, Prompter, SetupCommand, SetupOptions,
};
use tempfile::TempDir;

/// Records every command and answers with success. Only binaries listed in
/// `binaries` are found.
#[derive(Default)]
pub struct RecordingRunner {
    pub commands: Vec<SetupCommand>,
    pub binaries: Vec<(String, PathBuf)>,
    pub fail_programs: Vec<String>,
}

impl RecordingRunner {
    pub fn with_binary(mut self, name: &str, path: &str) -> Self {
        self.binaries.push((name.to_string(), PathBuf::from(path)));
        self
    }

    pub fn failing(mut self, program: &str) -> Self {
        self.fail_programs.push(program.to_string());
        self
    }

    /// Rendered command lines, in execution order.
    pub fn lines(&self) -> Vec<String> {
        self.commands.iter().map(ToString::to_string).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&mut self, command: &SetupCommand) -> CommandStatus {
        self.commands.push(command.clone());
        let failing = command
            .argv()
            .iter()
            .take(2)
            .any(|part| self.fail_programs.iter().any(|p| p == part));
        if failing {
            CommandStatus::Failed { exit_code: Some(1) }
        } else {
            CommandStatus::Success
        }
    }

    fn find_binary(&mut self, name: &str) -> Option<PathBuf> {
        self.binaries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, p)| p.clone())
    }
}

/// Temp workspace holding os-release and package list fixtures.
pub struct Fixture {
    pub dir: TempDir,
}

impl Fixture {
    pub fn new(os_release: &str, packages: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        std::fs::write(dir.path().join("os-release"), os_release).expect("write os-release");
        std::fs::write(dir.path().join("packages.txt"), packages).expect("write packages");
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, content).expect("write fixture");
        path
    }

    /// Options pointing at this fixture, sudo elevation, home `/home/tester`.
    pub fn options(&self) -> SetupOptions {
        let mut options = SetupOptions::new(PathBuf::from("/home/tester"), Elevation::Sudo);
        options.os_release = self.path().join("os-release");
        options.system_packages = self.path().join("packages.txt");
        options.flatpak_packages = self.path().join("packages.txt");
        options
    }
}

/// Prompter fed from a fixed answer script.
pub fn scripted_prompter(answers: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
    Prompter::new(Cursor::new(answers.as_bytes().to_vec()), Vec::new())
}
