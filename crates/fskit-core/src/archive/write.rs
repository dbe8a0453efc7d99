//! Archive creation

use crate::archive::name::entry_name;
use crate::archive::options::CompressionMethod;
use crate::archive::stats::ArchiveStats;
use crate::archive::task::ArchiveTask;
use crate::archive::ArchiveError;
use fskit_walk::walk;
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use zip::write::FileOptions;
use zip::ZipWriter;

/// Create a zip archive from the task's source directory.
///
/// Preconditions, checked in order before anything is written:
/// 1. the source directory exists and is a directory;
/// 2. the destination archive file already exists (callers pre-create an
///    empty placeholder, typically via
///    [`util::ensure_file`](crate::util::ensure_file)).
///
/// The source tree is then walked and every entry name derived up front,
/// so walk and naming failures also leave the placeholder untouched. Each
/// surviving file is streamed into a zip entry at the effective
/// compression level and method, with the configured comment (if any)
/// written into the archive.
///
/// # Errors
/// Precondition, walk, and naming failures are returned before any write.
/// `Io`/`Zip` failures can interrupt the write, leaving the archive
/// partially written; there is no rollback.
pub fn create_archive(task: &ArchiveTask) -> Result<ArchiveStats, ArchiveError> {
    if !task.source_dir.is_dir() {
        return Err(ArchiveError::SourceMissing(task.source_dir.clone()));
    }
    if !task.archive_path.exists() {
        return Err(ArchiveError::ArchiveMissing(task.archive_path.clone()));
    }

    // Resolve the full entry list before truncating the placeholder.
    let files = walk(&task.source_dir, &task.filter)?;
    let mut entries: Vec<(PathBuf, String)> = Vec::with_capacity(files.len());
    for file in files {
        let name = entry_name(&task.source_dir, &file)?;
        entries.push((file, name));
    }

    let archive = File::create(&task.archive_path)?;
    let mut zip = ZipWriter::new(archive);

    if let Some(comment) = &task.options.comment {
        zip.set_comment(comment.clone());
    }

    let method = task.options.effective_method();
    let mut entry_options = FileOptions::default().compression_method(match method {
        CompressionMethod::Stored => zip::CompressionMethod::Stored,
        CompressionMethod::Deflated => zip::CompressionMethod::Deflated,
    });
    if method == CompressionMethod::Deflated {
        entry_options = entry_options.compression_level(Some(task.options.effective_level()));
    }

    let mut stats = ArchiveStats::default();
    for (path, name) in entries {
        let byte_len = path.metadata()?.len();
        zip.start_file(name, entry_options)?;

        let mut reader = BufReader::new(File::open(&path)?);
        io::copy(&mut reader, &mut zip)?;

        stats.record(byte_len);
    }

    zip.finish()?;
    Ok(stats)
}
