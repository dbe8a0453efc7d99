//! Error types for tree walking

use std::path::PathBuf;
use thiserror::Error;

/// Result type for walk operations
pub type WalkResult<T> = Result<T, WalkError>;

/// Errors that can occur while walking a tree
#[derive(Error, Debug)]
pub enum WalkError {
    /// A directory could not be listed (permission denied, or the path
    /// stopped being a directory mid-walk). Aborts the walk; no partial
    /// results are returned.
    #[error("Cannot list directory {path}: {source}")]
    Restricted {
        /// The directory whose listing failed
        path: PathBuf,
        /// The underlying IO error
        #[source]
        source: std::io::Error,
    },

    /// IO error while reading a directory entry
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
