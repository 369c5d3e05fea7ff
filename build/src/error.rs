//! Error types for the chipper build helpers.
//!
//! Only conditions that stop the pre-bundle step live here. Problems the
//! build can survive (for example an empty strings directory) are reported as
//! [`chipper_common::Diagnostic`]s instead.

use camino::Utf8PathBuf;
use chipper_common::ConfigError;
use thiserror::Error;

/// Errors that can occur while preparing a build.
#[derive(Debug, Error)]
pub enum BuildError {
    /// `package.json` is missing or unreadable.
    #[error("failed to read package metadata at {path}")]
    PackageRead {
        /// Path where `package.json` was expected.
        path: Utf8PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// `package.json` is not valid JSON or lacks required fields.
    #[error("invalid package metadata at {path}: {source}")]
    PackageParse {
        /// Path of the malformed `package.json`.
        path: Utf8PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },

    /// `chipper.toml` could not be loaded.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The current directory cannot be used as a repository path.
    #[error("repository directory is not valid UTF-8: {reason}")]
    InvalidRepoDir {
        /// Description of the conversion failure.
        reason: String,
    },

    /// The build context could not be serialized.
    #[error("failed to serialize build context")]
    Serialize {
        /// Underlying serialization failure.
        #[source]
        source: serde_json::Error,
    },

    /// Failed to write output.
    #[error("failed to write {destination}")]
    WriteFailed {
        /// Where the output was headed (a path or `stdout`).
        destination: String,
        /// The underlying error that caused the write to fail.
        #[source]
        source: std::io::Error,
    },

    /// Strict mode escalated soft diagnostics into a failure.
    #[error("{count} diagnostic(s) reported in strict mode")]
    StrictDiagnostics {
        /// Number of diagnostics raised.
        count: usize,
    },
}

/// Result type alias using [`BuildError`].
pub type Result<T> = std::result::Result<T, BuildError>;
