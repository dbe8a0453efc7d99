//! Checksum and manifest tests

use fskit_core::checksum::{
    load_manifest, sha256_bytes, sha256_file, tree_manifest, verify_manifest, write_manifest,
};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn create_fixture(base: &Path) {
    fs::create_dir_all(base.join("sub")).expect("Failed to create sub");
    fs::write(base.join("a.txt"), "alpha").expect("Failed to write a.txt");
    fs::write(base.join("sub/b.txt"), "beta").expect("Failed to write b.txt");
}

#[test]
fn test_file_digest_matches_byte_digest() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("data.bin");
    fs::write(&path, b"some payload").expect("Failed to write file");

    assert_eq!(
        sha256_file(&path).expect("Hashing failed"),
        sha256_bytes(b"some payload")
    );
}

#[test]
fn test_manifest_covers_all_files_with_relative_paths() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    create_fixture(temp_dir.path());

    let manifest = tree_manifest(temp_dir.path()).expect("Manifest failed");
    assert_eq!(manifest.len(), 2);
    assert!(manifest.entries.contains_key("a.txt"));
    assert!(manifest.entries.contains_key("sub/b.txt"));
}

#[test]
fn test_verify_clean_tree() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    create_fixture(temp_dir.path());

    let manifest = tree_manifest(temp_dir.path()).expect("Manifest failed");
    let diff = verify_manifest(temp_dir.path(), &manifest).expect("Verify failed");
    assert!(diff.is_clean());
}

#[test]
fn test_verify_detects_changed_missing_and_extra() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    create_fixture(temp_dir.path());
    let manifest = tree_manifest(temp_dir.path()).expect("Manifest failed");

    fs::write(temp_dir.path().join("a.txt"), "ALPHA").expect("Failed to rewrite a.txt");
    fs::remove_file(temp_dir.path().join("sub/b.txt")).expect("Failed to remove b.txt");
    fs::write(temp_dir.path().join("c.txt"), "new").expect("Failed to write c.txt");

    let diff = verify_manifest(temp_dir.path(), &manifest).expect("Verify failed");
    assert_eq!(diff.changed, vec!["a.txt".to_string()]);
    assert_eq!(diff.missing, vec!["sub/b.txt".to_string()]);
    assert_eq!(diff.extra, vec!["c.txt".to_string()]);
    assert!(!diff.is_clean());
}

#[test]
fn test_manifest_json_round_trip() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    create_fixture(temp_dir.path());

    let manifest = tree_manifest(temp_dir.path()).expect("Manifest failed");
    let manifest_path = temp_dir.path().join("manifest.json");
    write_manifest(&manifest, &manifest_path).expect("Write failed");

    let loaded = load_manifest(&manifest_path).expect("Load failed");
    assert_eq!(loaded, manifest);
}
