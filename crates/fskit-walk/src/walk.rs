//! Recursive tree walking

use crate::error::{WalkError, WalkResult};
use crate::filter::WalkFilter;
use std::fs;
use std::path::{Path, PathBuf};

/// Recursively collect every plain file under `root` that survives the
/// filter.
///
/// Each listed child is first gated by the include predicate (so an
/// include predicate can prune whole subtrees); surviving directories are
/// recursed into, surviving plain files are yielded unless the exclude
/// predicate or exclude-set drops them. Entries that are neither plain
/// files nor directories (e.g. broken symlinks) are skipped.
///
/// No ordering guarantee is made beyond whatever the underlying directory
/// listing returns.
///
/// # Errors
/// Returns `WalkError::Restricted` if any directory in the tree cannot be
/// listed; the walk aborts with no partial results.
pub fn walk(root: &Path, filter: &WalkFilter) -> WalkResult<Vec<PathBuf>> {
    let mut files = Vec::new();
    visit(root, filter, &mut files)?;
    Ok(files)
}

fn visit(dir: &Path, filter: &WalkFilter, out: &mut Vec<PathBuf>) -> WalkResult<()> {
    let entries = fs::read_dir(dir).map_err(|source| WalkError::Restricted {
        path: dir.to_path_buf(),
        source,
    })?;

    for entry in entries {
        let path = entry?.path();

        if !filter.admits(&path) {
            continue;
        }

        if path.is_dir() {
            visit(&path, filter, out)?;
        } else if path.is_file() && !filter.excludes_file(&path) {
            out.push(path);
        }
    }

    Ok(())
}
