//! Error types for index build and read operations

use std::path::PathBuf;

use thiserror::Error;

/// Index errors
#[derive(Error, Debug)]
pub enum IndexError {
    /// Invalid rebuild configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Target location exists but is not a directory
    #[error("Not a directory: {}", path.display())]
    NotADirectory { path: PathBuf },

    /// Index directory could not be created
    #[error("Failed to create index directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Concept stream failure
    #[error("Cursor error: {0}")]
    Cursor(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Storage write error
    #[error("Storage write error: {0}")]
    StorageWrite(String),

    /// Storage read error
    #[error("Storage read error: {0}")]
    StorageRead(String),

    /// Malformed or mismatched index file
    #[error("Invalid index format: {0}")]
    InvalidFormat(String),
}

impl From<lexikon_graph::GraphError> for IndexError {
    fn from(e: lexikon_graph::GraphError) -> Self {
        IndexError::Cursor(e.to_string())
    }
}

impl From<serde_json::Error> for IndexError {
    fn from(e: serde_json::Error) -> Self {
        IndexError::Serialization(e.to_string())
    }
}

/// Result type for index operations
pub type Result<T> = std::result::Result<T, IndexError>;
