//! Path validation and idempotent creation helpers

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Component, Path, PathBuf};
use thiserror::Error;

/// Errors related to path validation
#[derive(Error, Debug)]
pub enum PathError {
    /// A `..` component would climb above the root
    #[error("Path traversal attempt detected: {0}")]
    TraversalAttempt(String),

    /// The joined path does not stay under the root
    #[error("Path escapes root directory: {0}")]
    EscapesRoot(String),

    /// A component is absolute or otherwise unusable
    #[error("Invalid path component: {0}")]
    InvalidComponent(String),
}

/// Join an untrusted relative path onto `root`, rejecting anything that
/// would escape it.
///
/// `.` components are dropped and `..` components may only unwind path
/// segments already accepted from the untrusted input; absolute paths and
/// null bytes are rejected outright. The target does not have to exist.
///
/// # Errors
/// Returns an error if the path would escape the root directory.
pub fn safe_join(root: &Path, untrusted: &Path) -> Result<PathBuf, PathError> {
    let mut relative = PathBuf::new();
    let mut depth: u32 = 0;

    for component in untrusted.components() {
        match component {
            Component::Normal(part) => {
                if part.to_string_lossy().contains('\0') {
                    return Err(PathError::InvalidComponent(
                        "Null byte in path".to_string(),
                    ));
                }
                relative.push(part);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir => {
                if depth == 0 {
                    return Err(PathError::TraversalAttempt(
                        untrusted.display().to_string(),
                    ));
                }
                relative.pop();
                depth -= 1;
            }
            Component::RootDir | Component::Prefix(_) => {
                return Err(PathError::InvalidComponent(
                    "Absolute path not allowed".to_string(),
                ));
            }
        }
    }

    let joined = root.join(relative);
    if joined.starts_with(root) {
        Ok(joined)
    } else {
        Err(PathError::EscapesRoot(untrusted.display().to_string()))
    }
}

/// Ensure a directory exists, creating it and any missing parents.
/// Idempotent.
///
/// # Errors
/// Returns an error if creation fails.
pub fn ensure_dir(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

/// Ensure a plain file exists, creating it empty (with any missing parent
/// directories) if it does not. Existing content is left untouched.
/// Idempotent.
///
/// # Errors
/// Returns an error if creation fails.
pub fn ensure_file(path: &Path) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map(|_| ())
}
