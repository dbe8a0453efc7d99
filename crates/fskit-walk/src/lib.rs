//! fskit-walk - Recursive file tree walking
//!
//! This crate provides recursive enumeration of plain files under a
//! directory, with composable include/exclude predicates and an explicit
//! exclude-set.

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod filter;
pub mod walk;

pub use error::{WalkError, WalkResult};
pub use filter::{has_extension, name_ends_with, Predicate, WalkFilter};
pub use walk::walk;
