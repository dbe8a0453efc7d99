//! Archive creation statistics

use serde::{Deserialize, Serialize};

/// Counters accumulated while an archive is written
///
/// Returned by value from [`create_archive`](crate::archive::create_archive)
/// so a completed operation's numbers can never alias another task's.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchiveStats {
    /// Number of plain files written (directories are not counted)
    pub file_count: u64,
    /// Sum of the written files' original byte lengths
    pub total_bytes: u64,
}

impl ArchiveStats {
    pub(crate) fn record(&mut self, byte_len: u64) {
        self.file_count += 1;
        self.total_bytes += byte_len;
    }
}
