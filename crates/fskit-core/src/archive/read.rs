//! Archive extraction

use crate::archive::ArchiveError;
use crate::util::safe_join;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use zip::read::ZipFile;
use zip::result::ZipError;
use zip::ZipArchive;

/// Extract every entry of a zip archive into `target_dir`.
///
/// Entries are processed in archive-native order. Directory entries are
/// recreated; file entries land at `target_dir/<entry name>` with missing
/// parent directories created first. Returns the number of files
/// extracted. The archive handle is released on every exit path.
///
/// # Errors
/// IO and zip failures propagate to the caller; extraction may then be
/// partial, and retry/cleanup is the caller's responsibility. Entry names
/// that escape `target_dir` are rejected with a path-security error.
pub fn extract_all(archive_path: &Path, target_dir: &Path) -> Result<u64, ArchiveError> {
    if !archive_path.exists() {
        return Err(ArchiveError::ArchiveMissing(archive_path.to_path_buf()));
    }

    let mut archive = ZipArchive::new(File::open(archive_path)?)?;
    let mut extracted = 0;

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        if entry.is_dir() {
            let dir = safe_join(target_dir, Path::new(entry.name()))?;
            fs::create_dir_all(dir)?;
        } else {
            write_entry(&mut entry, target_dir)?;
            extracted += 1;
        }
    }

    Ok(extracted)
}

/// Extract the single entry named `entry_name` into `target_dir`,
/// returning the path of the extracted file.
///
/// # Errors
/// Returns `ArchiveError::EntryNotFound` if the archive has no such
/// entry; IO and zip failures propagate as for [`extract_all`].
pub fn extract_entry(
    archive_path: &Path,
    entry_name: &str,
    target_dir: &Path,
) -> Result<PathBuf, ArchiveError> {
    if !archive_path.exists() {
        return Err(ArchiveError::ArchiveMissing(archive_path.to_path_buf()));
    }

    let mut archive = ZipArchive::new(File::open(archive_path)?)?;
    let mut entry = archive.by_name(entry_name).map_err(|e| match e {
        ZipError::FileNotFound => ArchiveError::EntryNotFound(entry_name.to_string()),
        other => ArchiveError::Zip(other),
    })?;

    write_entry(&mut entry, target_dir)
}

/// Copy one entry's bytes to `target_dir/<entry name>` through buffered
/// streams, creating missing parent directories first.
fn write_entry(entry: &mut ZipFile<'_>, target_dir: &Path) -> Result<PathBuf, ArchiveError> {
    let destination = safe_join(target_dir, Path::new(entry.name()))?;

    if let Some(parent) = destination.parent() {
        fs::create_dir_all(parent)?;
    }

    let mut writer = BufWriter::new(File::create(&destination)?);
    io::copy(entry, &mut writer)?;
    writer.flush()?;

    Ok(destination)
}
