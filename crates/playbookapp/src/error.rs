use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlaybookError {
    #[error("Section not found: {collection}/{section}")]
    SectionNotFound { collection: String, section: String },

    #[error("Malformed metadata in {}: {reason}", path.display())]
    MalformedMetadata { path: PathBuf, reason: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Output conflict: {} would be both a page directory and the search index", path.display())]
    OutputConflict { path: PathBuf },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, PlaybookError>;
