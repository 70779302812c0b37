// src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Failures of a single sync run. Every variant is terminal: the
/// process reports one line and exits non-zero.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("'{path}' not found: {source}")]
    NotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("version file '{path}' is empty")]
    EmptyVersion { path: PathBuf },

    #[error("no LUCID_VERSION definition found in '{path}'")]
    PatternNotFound { path: PathBuf },

    #[error("failed to write '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, SyncError>;
