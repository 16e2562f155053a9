use std::path::PathBuf;
use thiserror::Error;

/// All errors surfaced by the diataxis library.
#[derive(Debug, Error)]
pub enum DiataxisError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid search pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("{0}")]
    Validation(String),

    #[error("'{0}' is not a valid directory")]
    NotADirectory(PathBuf),
}

pub type Result<T> = std::result::Result<T, DiataxisError>;
