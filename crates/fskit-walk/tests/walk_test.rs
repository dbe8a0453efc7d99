//! Tree walking integration tests
//!
//! Tests the walker against fixture directories built in temp dirs.

use fskit_walk::{has_extension, name_ends_with, walk, Predicate, WalkError, WalkFilter};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Build a small mixed tree:
///
/// ```text
/// root/
///   a.txt
///   c.csv
///   deep/
///     b.txt
///   deeper/nested/
///     d.log
/// ```
fn create_fixture() -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let base = temp_dir.path();

    fs::write(base.join("a.txt"), "alpha").expect("Failed to write a.txt");
    fs::write(base.join("c.csv"), "1,2,3").expect("Failed to write c.csv");

    fs::create_dir_all(base.join("deep")).expect("Failed to create deep");
    fs::write(base.join("deep/b.txt"), "beta").expect("Failed to write b.txt");

    fs::create_dir_all(base.join("deeper/nested")).expect("Failed to create deeper/nested");
    fs::write(base.join("deeper/nested/d.log"), "log line").expect("Failed to write d.log");

    temp_dir
}

/// Listing order is unspecified, so compare as sorted relative paths.
fn relative_sorted(files: &[PathBuf], root: &Path) -> BTreeSet<String> {
    files
        .iter()
        .map(|p| {
            p.strip_prefix(root)
                .expect("walked file outside root")
                .to_string_lossy()
                .into_owned()
        })
        .collect()
}

#[test]
fn test_walk_unfiltered_yields_all_plain_files() {
    let fixture = create_fixture();
    let files = walk(fixture.path(), &WalkFilter::none()).expect("Walk failed");

    let names = relative_sorted(&files, fixture.path());
    let expected: BTreeSet<String> = ["a.txt", "c.csv", "deep/b.txt", "deeper/nested/d.log"]
        .iter()
        .map(|s| (*s).to_string())
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_walk_never_yields_directories() {
    let fixture = create_fixture();
    let files = walk(fixture.path(), &WalkFilter::none()).expect("Walk failed");
    assert!(files.iter().all(|p| p.is_file()));
}

#[test]
fn test_include_filter_by_extension() {
    let fixture = create_fixture();
    let filter = WalkFilter::including(has_extension("txt"));
    let files = walk(fixture.path(), &filter).expect("Walk failed");

    let names = relative_sorted(&files, fixture.path());
    let expected: BTreeSet<String> = ["a.txt", "deep/b.txt"]
        .iter()
        .map(|s| (*s).to_string())
        .collect();
    assert_eq!(names, expected);
}

#[test]
fn test_include_filter_prunes_subtrees() {
    let fixture = create_fixture();
    // Refuse to descend into `deeper`; everything else passes.
    let filter = WalkFilter::including(Predicate::new(|path| {
        path.file_name()
            .map_or(true, |n| n.to_string_lossy() != "deeper")
    }));
    let files = walk(fixture.path(), &filter).expect("Walk failed");

    let names = relative_sorted(&files, fixture.path());
    assert!(names.contains("deep/b.txt"));
    assert!(!names.contains("deeper/nested/d.log"));
}

#[test]
fn test_exclude_predicate_skips_silently() {
    let fixture = create_fixture();
    let filter = WalkFilter::excluding(name_ends_with(".csv"));
    let files = walk(fixture.path(), &filter).expect("Walk failed");

    let names = relative_sorted(&files, fixture.path());
    assert!(!names.contains("c.csv"));
    assert!(names.contains("a.txt"));
}

#[test]
fn test_exclude_set_skips_exact_paths() {
    let fixture = create_fixture();
    let excluded = fixture.path().join("deep/b.txt");
    let filter = WalkFilter::excluding_paths(vec![excluded]);
    let files = walk(fixture.path(), &filter).expect("Walk failed");

    let names = relative_sorted(&files, fixture.path());
    assert!(!names.contains("deep/b.txt"));
    assert!(names.contains("a.txt"));
    assert!(names.contains("c.csv"));
}

#[test]
fn test_unlistable_root_is_restricted_error() {
    let fixture = create_fixture();
    let missing = fixture.path().join("does-not-exist");
    let err = walk(&missing, &WalkFilter::none()).expect_err("Walk should fail");

    match err {
        WalkError::Restricted { path, .. } => assert_eq!(path, missing),
        other => panic!("Expected Restricted error, got: {other}"),
    }
}

#[test]
fn test_walk_of_empty_directory_is_empty() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let files = walk(temp_dir.path(), &WalkFilter::none()).expect("Walk failed");
    assert!(files.is_empty());
}
