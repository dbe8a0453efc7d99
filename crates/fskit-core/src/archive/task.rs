//! Archive-creation task configuration

use crate::archive::options::ArchiveOptions;
use fskit_walk::WalkFilter;
use std::path::{Path, PathBuf};

/// Configuration for one archive-creation operation
///
/// Built up front and consumed by
/// [`create_archive`](crate::archive::create_archive); construct a fresh
/// task per operation. The destination archive file must already exist as
/// an empty placeholder when the task runs (see
/// [`util::ensure_file`](crate::util::ensure_file)).
#[derive(Debug)]
pub struct ArchiveTask {
    /// Directory whose tree is archived
    pub source_dir: PathBuf,
    /// Pre-created destination archive file
    pub archive_path: PathBuf,
    /// Filter applied during the tree walk
    pub filter: WalkFilter,
    /// Compression options
    pub options: ArchiveOptions,
}

impl ArchiveTask {
    /// A task with no filter and default options
    #[must_use]
    pub fn new(source_dir: &Path, archive_path: &Path) -> Self {
        Self {
            source_dir: source_dir.to_path_buf(),
            archive_path: archive_path.to_path_buf(),
            filter: WalkFilter::none(),
            options: ArchiveOptions::default(),
        }
    }

    /// A task with a walk filter and default options
    #[must_use]
    pub fn filtered(source_dir: &Path, archive_path: &Path, filter: WalkFilter) -> Self {
        Self {
            filter,
            ..Self::new(source_dir, archive_path)
        }
    }

    /// A task with explicit compression options and no filter
    #[must_use]
    pub fn with_options(source_dir: &Path, archive_path: &Path, options: ArchiveOptions) -> Self {
        Self {
            options,
            ..Self::new(source_dir, archive_path)
        }
    }
}
