//! Composable file filters
//!
//! Filters are plain predicate functions over paths, combined with
//! `and` / `or` / `negate` rather than polymorphic callback interfaces.

use std::collections::HashSet;
use std::fmt;
use std::path::{Path, PathBuf};

/// A boxed predicate over a path
pub struct Predicate(Box<dyn Fn(&Path) -> bool + Send + Sync>);

impl Predicate {
    /// Wrap a closure as a predicate
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Path) -> bool + Send + Sync + 'static,
    {
        Self(Box::new(f))
    }

    /// Evaluate the predicate against a path
    #[must_use]
    pub fn matches(&self, path: &Path) -> bool {
        (self.0)(path)
    }

    /// Both predicates must accept the path
    #[must_use]
    pub fn and(self, other: Predicate) -> Predicate {
        Predicate::new(move |path| self.matches(path) && other.matches(path))
    }

    /// Either predicate may accept the path
    #[must_use]
    pub fn or(self, other: Predicate) -> Predicate {
        Predicate::new(move |path| self.matches(path) || other.matches(path))
    }

    /// Invert the predicate
    #[must_use]
    pub fn negate(self) -> Predicate {
        Predicate::new(move |path| !self.matches(path))
    }
}

impl fmt::Debug for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Predicate")
    }
}

/// Accept plain files with the given extension; directories always pass
/// so that recursion is not cut off by an include filter meant for files.
#[must_use]
pub fn has_extension(ext: &str) -> Predicate {
    let ext = ext.trim_start_matches('.').to_string();
    Predicate::new(move |path| {
        path.is_dir() || path.extension().is_some_and(|e| e == ext.as_str())
    })
}

/// Accept paths whose file name ends with the given suffix
#[must_use]
pub fn name_ends_with(suffix: &str) -> Predicate {
    let suffix = suffix.to_string();
    Predicate::new(move |path| {
        path.file_name()
            .map(|n| n.to_string_lossy().ends_with(suffix.as_str()))
            .unwrap_or(false)
    })
}

/// Filter configuration for one walk
///
/// The include predicate gates every listed child, directories included,
/// so it can prune whole subtrees. The exclude predicate and exclude-set
/// apply only to plain files about to be yielded.
#[derive(Debug, Default)]
pub struct WalkFilter {
    /// Children failing this predicate are not listed and not recursed into
    pub include: Option<Predicate>,
    /// Files matching this predicate are silently skipped
    pub exclude: Option<Predicate>,
    /// Exact file paths to silently skip
    pub exclude_paths: HashSet<PathBuf>,
}

impl WalkFilter {
    /// A filter that admits everything
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// A filter with only an include predicate
    #[must_use]
    pub fn including(include: Predicate) -> Self {
        Self {
            include: Some(include),
            ..Self::default()
        }
    }

    /// A filter with only an exclude predicate
    #[must_use]
    pub fn excluding(exclude: Predicate) -> Self {
        Self {
            exclude: Some(exclude),
            ..Self::default()
        }
    }

    /// A filter with only an exclude-set of exact paths
    #[must_use]
    pub fn excluding_paths<I>(paths: I) -> Self
    where
        I: IntoIterator<Item = PathBuf>,
    {
        Self {
            exclude_paths: paths.into_iter().collect(),
            ..Self::default()
        }
    }

    /// Whether a listed child survives the include predicate
    #[must_use]
    pub fn admits(&self, path: &Path) -> bool {
        self.include.as_ref().map_or(true, |p| p.matches(path))
    }

    /// Whether a plain file is dropped by the exclude predicate or set
    #[must_use]
    pub fn excludes_file(&self, path: &Path) -> bool {
        if self.exclude_paths.contains(path) {
            return true;
        }
        self.exclude.as_ref().is_some_and(|p| p.matches(path))
    }
}
