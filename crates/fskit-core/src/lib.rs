//! fskit-core - Directory archiving and file utilities
//!
//! This crate provides the zip/unzip archiver (recursive directory
//! archiving with filtering, plus extraction) and small file utilities:
//! checksum manifests, recursive copy/merge, and file/tree comparison.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod archive;
pub mod checksum;
pub mod compare;
pub mod copy;
pub mod util;

pub use fskit_walk;

pub use archive::{
    create_archive, extract_all, extract_entry, ArchiveError, ArchiveOptions, ArchiveStats,
    ArchiveTask, CompressionMethod,
};
