use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomError {
    #[error("failed to read container {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write container {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed container {path}: {source}")]
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}
