//! Recursive directory copy/merge

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

/// Errors during tree copying
#[derive(Error, Debug)]
pub enum CopyError {
    /// The copy source does not exist or is not a directory
    #[error("Source is not a directory: {0}")]
    SourceNotADirectory(PathBuf),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Walk error
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Counters for one copy operation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CopyStats {
    /// Number of plain files copied
    pub files_copied: u64,
    /// Sum of copied files' byte lengths
    pub bytes_copied: u64,
}

/// Recursively copy the tree under `source` into `dest`, merging with
/// whatever is already there.
///
/// Missing directories are created, existing destination files are
/// overwritten, and destination files with no counterpart in `source`
/// are left in place.
///
/// # Errors
/// Returns an error if `source` is not a directory or any copy fails;
/// files already copied stay copied.
pub fn copy_tree(source: &Path, dest: &Path) -> Result<CopyStats, CopyError> {
    if !source.is_dir() {
        return Err(CopyError::SourceNotADirectory(source.to_path_buf()));
    }
    fs::create_dir_all(dest)?;

    let mut stats = CopyStats::default();

    for entry in WalkDir::new(source) {
        let entry = entry?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        if relative.as_os_str().is_empty() {
            continue;
        }

        let target = dest.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else if entry.file_type().is_file() {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            let bytes = fs::copy(entry.path(), &target)?;
            stats.files_copied += 1;
            stats.bytes_copied += bytes;
        }
    }

    Ok(stats)
}
