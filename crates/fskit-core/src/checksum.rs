//! SHA-256 checksums and tree manifests
//!
//! A manifest maps each plain file's relative path to its hex digest and
//! round-trips through JSON, so a tree can be fingerprinted once and
//! verified later.

use fskit_walk::{walk, WalkError, WalkFilter};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;
use thiserror::Error;

/// Errors during checksum computation or manifest handling
#[derive(Error, Debug)]
pub enum ChecksumError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Tree walking failed
    #[error("Walk error: {0}")]
    Walk(#[from] WalkError),

    /// Manifest (de)serialization failed
    #[error("Failed to parse manifest: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Hex-encoded SHA-256 of a byte slice
#[must_use]
pub fn sha256_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Hex-encoded SHA-256 of a file, computed in streamed chunks
///
/// # Errors
/// Returns an error if the file cannot be read.
pub fn sha256_file(path: &Path) -> Result<String, ChecksumError> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    let mut buffer = [0u8; 64 * 1024];

    loop {
        let read = file.read(&mut buffer)?;
        if read == 0 {
            break;
        }
        hasher.update(&buffer[..read]);
    }

    Ok(hex::encode(hasher.finalize()))
}

/// Digest fingerprint of a directory tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeManifest {
    /// Relative path (with `/` separators) to hex SHA-256 digest
    pub entries: BTreeMap<String, String>,
}

impl TreeManifest {
    /// Number of files in the manifest
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the manifest covers no files
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of verifying a tree against a manifest
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ManifestDiff {
    /// Present in both, digest differs
    pub changed: Vec<String>,
    /// In the manifest but not on disk
    pub missing: Vec<String>,
    /// On disk but not in the manifest
    pub extra: Vec<String>,
}

impl ManifestDiff {
    /// Whether the tree matches the manifest exactly
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.changed.is_empty() && self.missing.is_empty() && self.extra.is_empty()
    }
}

/// Compute the manifest of every plain file under `root`.
///
/// # Errors
/// Returns an error if the walk or any file read fails.
pub fn tree_manifest(root: &Path) -> Result<TreeManifest, ChecksumError> {
    let mut entries = BTreeMap::new();

    for file in walk(root, &WalkFilter::none())? {
        let relative = file
            .strip_prefix(root)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?
            .to_string_lossy()
            .replace('\\', "/");
        entries.insert(relative, sha256_file(&file)?);
    }

    Ok(TreeManifest { entries })
}

/// Verify the tree under `root` against a previously computed manifest.
///
/// # Errors
/// Returns an error if the walk or any file read fails.
pub fn verify_manifest(root: &Path, manifest: &TreeManifest) -> Result<ManifestDiff, ChecksumError> {
    let current = tree_manifest(root)?;
    let mut diff = ManifestDiff::default();

    for (path, digest) in &manifest.entries {
        match current.entries.get(path) {
            Some(actual) if actual == digest => {}
            Some(_) => diff.changed.push(path.clone()),
            None => diff.missing.push(path.clone()),
        }
    }
    for path in current.entries.keys() {
        if !manifest.entries.contains_key(path) {
            diff.extra.push(path.clone());
        }
    }

    Ok(diff)
}

/// Write a manifest to disk as pretty-printed JSON.
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn write_manifest(manifest: &TreeManifest, path: &Path) -> Result<(), ChecksumError> {
    let json = serde_json::to_string_pretty(manifest)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load a manifest previously written with [`write_manifest`].
///
/// # Errors
/// Returns an error if the read or parse fails.
pub fn load_manifest(path: &Path) -> Result<TreeManifest, ChecksumError> {
    let json = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sha256_bytes_known_vector() {
        // SHA-256 of the empty input
        assert_eq!(
            sha256_bytes(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn test_sha256_bytes_differs_on_content() {
        assert_ne!(sha256_bytes(b"alpha"), sha256_bytes(b"beta"));
    }
}
