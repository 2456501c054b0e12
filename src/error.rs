//! Error types shared across the crate

use std::path::PathBuf;

use thiserror::Error;

/// Misuse of the step/reset interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SimError {
    /// `step` was called before the first `reset`
    #[error("step called before reset")]
    NotStarted,
    /// `step` was called after a terminal step without an intervening `reset`
    #[error("step called after the episode ended; call reset first")]
    EpisodeOver,
    /// Raw action outside {0, 1}
    #[error("invalid action {0}, expected 0 or 1")]
    InvalidAction(u8),
}

/// Failure reading or writing a JSON file
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read and parse a JSON file
pub(crate) fn read_json<T: serde::de::DeserializeOwned>(
    path: &std::path::Path,
) -> Result<T, StorageError> {
    let text = std::fs::read_to_string(path).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(serde_json::from_str(&text)?)
}

/// Serialize a value as pretty JSON into a file
pub(crate) fn write_json<T: serde::Serialize>(
    path: &std::path::Path,
    value: &T,
) -> Result<(), StorageError> {
    let json = serde_json::to_string_pretty(value)?;
    std::fs::write(path, json).map_err(|source| StorageError::Io {
        path: path.to_path_buf(),
        source,
    })
}
