//! Zip archiving of directory trees
//!
//! Creation walks a source directory (with optional filters), streams each
//! file into a zip entry, and returns the accumulated stats. Extraction
//! unpacks entries into a target directory, creating parent directories
//! as needed.

use crate::util::PathError;
use fskit_walk::WalkError;
use std::path::PathBuf;
use thiserror::Error;

pub mod name;
pub mod options;
pub mod read;
pub mod stats;
pub mod task;
pub mod write;

pub use name::entry_name;
pub use options::{ArchiveOptions, CompressionMethod};
pub use read::{extract_all, extract_entry};
pub use stats::ArchiveStats;
pub use task::ArchiveTask;
pub use write::create_archive;

/// Errors for archive creation and extraction
///
/// The first three variants are precondition failures: the operation did
/// not start and nothing was written. `Io` and `Zip` can occur
/// mid-operation, in which case the destination (archive or extraction
/// directory) may be partially written; there is no rollback.
#[derive(Error, Debug)]
pub enum ArchiveError {
    /// The directory to zip does not exist or is not a directory
    #[error("Directory to zip does not exist: {0}")]
    SourceMissing(PathBuf),

    /// The archive file does not exist (creation requires the caller to
    /// pre-create an empty placeholder; extraction requires the archive)
    #[error("Archive file does not exist: {0}")]
    ArchiveMissing(PathBuf),

    /// A named entry was not found in the archive
    #[error("Entry not found in archive: {0}")]
    EntryNotFound(String),

    /// The root directory's name could not be located inside a
    /// descendant's path, so no entry name can be derived. Fatal.
    #[error("Cannot derive entry name for {file}: root name {root_name:?} not found in path")]
    EntryName {
        /// The file whose entry name could not be derived
        file: PathBuf,
        /// The bare name of the directory being archived
        root_name: String,
    },

    /// Tree walking failed; aborts creation before the archive is touched
    #[error("Walk error: {0}")]
    Walk(#[from] WalkError),

    /// An entry name failed path-traversal validation during extraction
    #[error("Path security error: {0}")]
    PathSecurity(#[from] PathError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// ZIP format error
    #[error("ZIP error: {0}")]
    Zip(#[from] zip::result::ZipError),
}

impl ArchiveError {
    /// Whether the failed operation may have left partial output behind.
    ///
    /// Precondition and validation failures happen before any write;
    /// `Io` and `Zip` failures can interrupt an operation in flight.
    #[must_use]
    pub fn may_have_partial_output(&self) -> bool {
        matches!(self, Self::Io(_) | Self::Zip(_))
    }
}
