use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while assembling or writing a yoga catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Duplicate yoga id: {0}")]
    DuplicateId(String),
    #[error("House must be within 1-12, got {0}")]
    InvalidHouse(u8),
    #[error("Invalid aspect limit: {0}")]
    InvalidAspectLimit(String),
    #[error("Failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
