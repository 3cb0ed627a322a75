//! Newline-delimited package lists (`packages.txt`).

use std::fs;
use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::error::{Result, SetupError};

/// Default package list, relative to the working directory.
pub const DEFAULT_PACKAGE_FILE: &str = "packages.txt";

/// Ordered package names. Not deduplicated, not validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PackageList {
    names: Vec<String>,
}

impl PackageList {
    /// Read a package list file. A missing or unreadable file is an error.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| SetupError::PackageList {
            path: path.to_path_buf(),
            source,
        })?;
        let list = Self::parse(&content);
        debug!("Read {} package(s) from {}", list.len(), path.display());
        Ok(list)
    }

    /// One package per line; surrounding whitespace and blank lines dropped.
    pub fn parse(content: &str) -> Self {
        let names = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        Self { names }
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for PackageList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().map(Into::into).collect(),
        }
    }
}
