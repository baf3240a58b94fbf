//! Error taxonomy for the mutation engine.

use std::path::PathBuf;
use thiserror::Error;

pub type EditResult<T = String> = Result<T, EditError>;

#[derive(Error, Debug)]
pub enum EditError {
    #[error("element '{id}' not found; known ids: {known:?}")]
    NotFound { id: String, known: Vec<String> },

    #[error("element '{id}' is not a {expected} element")]
    KindMismatch { id: String, expected: &'static str },

    #[error("invalid argument: {0}")]
    Argument(String),

    #[error("asset not found: {0}")]
    AssetNotFound(PathBuf),

    #[error("external tool failed: {0}")]
    ExternalTool(String),

    #[error(transparent)]
    Container(#[from] posterkit_dom::DomError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl EditError {
    /// Stable kind string used in batch failure reports.
    pub fn kind(&self) -> &'static str {
        match self {
            EditError::NotFound { .. } => "ReferenceError",
            EditError::KindMismatch { .. } => "KindMismatchError",
            EditError::Argument(_) => "ArgumentError",
            EditError::AssetNotFound(_) => "AssetNotFoundError",
            EditError::ExternalTool(_) => "ExternalToolError",
            EditError::Container(_) => "ContainerError",
            EditError::Io(_) => "IoError",
        }
    }
}
