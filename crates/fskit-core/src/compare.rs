//! File and tree comparison

use crate::checksum::{sha256_file, ChecksumError};
use fskit_walk::{walk, WalkError, WalkFilter};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors during comparison
#[derive(Error, Debug)]
pub enum CompareError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Tree walking failed
    #[error("Walk error: {0}")]
    Walk(#[from] WalkError),

    /// Checksum computation failed
    #[error("Checksum error: {0}")]
    Checksum(#[from] ChecksumError),
}

/// Compare two files byte-for-byte through buffered reads.
///
/// A length mismatch short-circuits without reading content.
///
/// # Errors
/// Returns an error if either file cannot be read.
pub fn files_equal(left: &Path, right: &Path) -> Result<bool, CompareError> {
    if left.metadata()?.len() != right.metadata()?.len() {
        return Ok(false);
    }

    let mut left_reader = BufReader::new(File::open(left)?);
    let mut right_reader = BufReader::new(File::open(right)?);
    let mut left_buf = [0u8; 8 * 1024];
    let mut right_buf = [0u8; 8 * 1024];

    loop {
        let read = left_reader.read(&mut left_buf)?;
        if read == 0 {
            return Ok(true);
        }
        right_reader.read_exact(&mut right_buf[..read])?;
        if left_buf[..read] != right_buf[..read] {
            return Ok(false);
        }
    }
}

/// Differences between two directory trees, as paths relative to each root
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TreeDiff {
    /// In `left` but not in `right`
    pub missing: Vec<PathBuf>,
    /// In `right` but not in `left`
    pub extra: Vec<PathBuf>,
    /// In both with differing content
    pub changed: Vec<PathBuf>,
}

impl TreeDiff {
    /// Whether the trees hold the same files with the same content
    #[must_use]
    pub fn is_same(&self) -> bool {
        self.missing.is_empty() && self.extra.is_empty() && self.changed.is_empty()
    }
}

/// Diff the plain files of two trees; content comparison is by SHA-256.
///
/// # Errors
/// Returns an error if either walk or any file read fails.
pub fn diff_trees(left: &Path, right: &Path) -> Result<TreeDiff, CompareError> {
    let left_files = relative_set(left)?;
    let right_files = relative_set(right)?;
    let mut diff = TreeDiff::default();

    for path in &left_files {
        if !right_files.contains(path) {
            diff.missing.push(path.clone());
        } else if sha256_file(&left.join(path))? != sha256_file(&right.join(path))? {
            diff.changed.push(path.clone());
        }
    }
    for path in &right_files {
        if !left_files.contains(path) {
            diff.extra.push(path.clone());
        }
    }

    Ok(diff)
}

fn relative_set(root: &Path) -> Result<BTreeSet<PathBuf>, CompareError> {
    let mut set = BTreeSet::new();
    for file in walk(root, &WalkFilter::none())? {
        let relative = file
            .strip_prefix(root)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
            .to_path_buf();
        set.insert(relative);
    }
    Ok(set)
}
