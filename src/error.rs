//! Error handling module for linux-setup
//!
//! Provides the library error type using thiserror. Step failures are not
//! errors: they are captured as [`crate::step_traits::StepOutcome`] values.
//! Only conditions that end the run live here.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for linux-setup
#[derive(Error, Debug)]
pub enum SetupError {
    /// IO errors (stdin, stdout, files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// os-release could not be read or parsed
    #[error("os-release error: {0}")]
    OsRelease(String),

    /// None of the ID_LIKE identifiers maps to a known package manager
    #[error("Your distro is not supported (ID_LIKE: {id_like:?})")]
    UnsupportedDistro { id_like: Vec<String> },

    /// Package list file could not be read
    #[error("Failed to read package list {}: {source}", path.display())]
    PackageList {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Interactive prompt failure
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// JSON serialization errors (run summary)
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for linux-setup operations
pub type Result<T> = std::result::Result<T, SetupError>;

impl SetupError {
    /// Create an os-release error
    pub fn os_release(msg: impl Into<String>) -> Self {
        Self::OsRelease(msg.into())
    }

    /// True when the host's distro could not be identified as a supported one,
    /// whether os-release was unreadable or named an unknown family.
    pub fn is_unsupported_distro(&self) -> bool {
        matches!(self, Self::UnsupportedDistro { .. } | Self::OsRelease(_))
    }

    /// Create a prompt error
    pub fn prompt(msg: impl Into<String>) -> Self {
        Self::Prompt(msg.into())
    }
}
