//! Error types for graph access.

use thiserror::Error;

/// Errors surfaced by a graph backend while the indexing core pulls from it.
#[derive(Error, Debug)]
pub enum GraphError {
    /// The backend failed to produce the next concept or membership set.
    #[error("graph backend error: {0}")]
    Backend(String),
}

/// Result type for graph operations
pub type Result<T> = std::result::Result<T, GraphError>;
