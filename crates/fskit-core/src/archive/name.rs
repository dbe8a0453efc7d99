//! Archive entry naming

use crate::archive::ArchiveError;
use std::path::Path;

/// Derive the archive entry name for `file`, a descendant of `root`.
///
/// The name is the substring of `file`'s path starting at the first
/// occurrence of `root`'s bare directory name, preserving platform path
/// separators. The entry name therefore carries the root directory's own
/// name as its first segment: archiving `/home/user/testDir` names
/// `/home/user/testDir/deep/b.txt` as `testDir/deep/b.txt`.
///
/// The same unchanged tree always yields the same names.
///
/// # Errors
/// Returns `ArchiveError::EntryName` if the root's name does not occur in
/// `file`'s path (possible only when `file` is not a descendant of
/// `root`). This is fatal; there is no recovery.
pub fn entry_name(root: &Path, file: &Path) -> Result<String, ArchiveError> {
    let root_name = root
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| ArchiveError::EntryName {
            file: file.to_path_buf(),
            root_name: String::new(),
        })?;

    let path = file.to_string_lossy();
    match path.find(root_name.as_str()) {
        Some(index) => Ok(path[index..].to_string()),
        None => Err(ArchiveError::EntryName {
            file: file.to_path_buf(),
            root_name,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_entry_name_includes_root_segment() {
        let root = PathBuf::from("/home/user/testDir");
        let file = PathBuf::from("/home/user/testDir/a.txt");
        assert_eq!(entry_name(&root, &file).unwrap(), "testDir/a.txt");
    }

    #[test]
    fn test_entry_name_nested() {
        let root = PathBuf::from("/home/user/testDir");
        let file = PathBuf::from("/home/user/testDir/deep/b.txt");
        assert_eq!(entry_name(&root, &file).unwrap(), "testDir/deep/b.txt");
    }

    #[test]
    fn test_entry_name_uses_first_occurrence_of_root_name() {
        // An ancestor sharing the root's name wins, since matching is
        // leftmost substring search on the whole path string.
        let root = PathBuf::from("/data/sub/sub");
        let file = PathBuf::from("/data/sub/sub/f.txt");
        assert_eq!(entry_name(&root, &file).unwrap(), "sub/sub/f.txt");
    }

    #[test]
    fn test_entry_name_missing_root_name_is_fatal() {
        let root = PathBuf::from("/x/alpha");
        let file = PathBuf::from("/y/beta/f.txt");
        let err = entry_name(&root, &file).unwrap_err();
        assert!(matches!(err, ArchiveError::EntryName { .. }));
    }

    #[test]
    fn test_entry_name_stable_across_calls() {
        let root = PathBuf::from("/home/user/testDir");
        let file = PathBuf::from("/home/user/testDir/deep/b.txt");
        let first = entry_name(&root, &file).unwrap();
        let second = entry_name(&root, &file).unwrap();
        assert_eq!(first, second);
    }
}
