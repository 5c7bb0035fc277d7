//! Error types for helm-charts

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for chart operations
pub type Result<T> = std::result::Result<T, ChartsError>;

/// Error types for chart discovery and change detection
#[derive(Error, Debug)]
pub enum ChartsError {
    /// The git executable could not be run
    #[error("git is not installed")]
    ToolNotInstalled,

    /// The directory is not inside a git work tree
    #[error("'{}' is not a git repository", path.display())]
    NotARepository { path: PathBuf },

    /// The named remote has no URL configured
    #[error("no remote '{remote}' configured in git repository")]
    NoRemoteConfigured { remote: String },

    /// Chart.yaml is missing or could not be parsed
    #[error("Cannot read chart metadata '{}': {reason}", path.display())]
    MetadataUnreadable { path: PathBuf, reason: String },

    /// The chart version is not a semantic version
    #[error("Chart '{}' has invalid version '{version}': {reason}", path.display())]
    InvalidVersion {
        path: PathBuf,
        version: String,
        reason: String,
    },

    /// Upward search ended without finding a chart root
    #[error("No chart root found above '{}'", path.display())]
    NoParentDirectory { path: PathBuf },

    /// An external command exited with a non-zero status
    #[error("'{command}' failed ({status}): {stderr}")]
    CommandFailed {
        command: String,
        status: String,
        stderr: String,
    },

    /// An external command could not be started
    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    /// Directory traversal failed
    #[error("Cannot walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    /// I/O error during file operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration provided
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// A listing found nothing at all
    #[error("not a single chart was found")]
    NoChartsFound,

    /// Duplicates were reported and the caller asked to fail on them
    #[error("found multiple helm charts with the same name")]
    DuplicatesFound,

    /// Generic error for other cases
    #[error("{0}")]
    Other(String),
}
