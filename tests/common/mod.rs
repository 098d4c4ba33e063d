//! Shared test utilities for integration tests.
//!
//! Note: `#![allow(dead_code)]` is required because each integration test file
//! compiles as a separate crate and may only use a subset of these helpers.

#![allow(dead_code)]

use std::fs::File;
use std::io::{Read, Write};
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use zip::write::SimpleFileOptions;
use zipper::ArchiveHandle;

/// Writes `data` to a file named `name` inside `dir` and returns its path.
pub fn write_source(dir: &Path, name: &str, data: &[u8]) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, data).expect("Failed to write source file");
    path
}

/// Creates an archive at `archive` containing the given (name, data) files.
///
/// The files are written to a scratch directory, then added through a single
/// write session in the order given.
pub fn build_archive(archive: &Path, entries: &[(&str, &[u8])]) -> ArchiveHandle {
    let sources = TempDir::new().expect("Failed to create temp dir");
    let mut handle = ArchiveHandle::new(archive);
    handle.create(false).expect("create failed");
    handle.open().expect("open failed");
    for (name, data) in entries {
        let path = write_source(sources.path(), name, data);
        handle.add_file(&path).expect("add_file failed");
    }
    handle.close().expect("close failed");
    handle
}

/// Reads an entry back with the zip crate's reader.
pub fn extract_entry(archive: &Path, name: &str) -> Vec<u8> {
    let file = File::open(archive).expect("Failed to open archive");
    let mut reader = zip::ZipArchive::new(file).expect("Not a valid zip archive");
    let mut entry = reader
        .by_name(name)
        .unwrap_or_else(|e| panic!("Entry '{}' missing: {}", name, e));
    let mut data = Vec::new();
    entry.read_to_end(&mut data).expect("Failed to read entry");
    data
}

/// Verifies that every (name, data) pair is present with identical content.
pub fn verify_archive_contents(archive: &Path, expected_entries: &[(&str, &[u8])]) {
    for (name, expected) in expected_entries {
        let extracted = extract_entry(archive, name);
        assert_eq!(
            &extracted[..],
            *expected,
            "Content mismatch for entry '{}'",
            name
        );
    }
}

/// Writes an archive with the zip crate directly, including directory entries.
///
/// Names ending in `/` become directory entries.
pub fn write_foreign_archive(archive: &Path, names: &[&str]) {
    let file = File::create(archive).expect("Failed to create archive");
    let mut writer = zip::ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for name in names {
        if name.ends_with('/') {
            writer.add_directory(*name, options).expect("add_directory failed");
        } else {
            writer.start_file(*name, options).expect("start_file failed");
            writer.write_all(name.as_bytes()).expect("write failed");
        }
    }
    writer.finish().expect("finish failed");
}
