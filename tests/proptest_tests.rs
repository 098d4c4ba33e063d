//! Property-based tests using proptest.
//!
//! These tests verify that arbitrary sets of files survive a write session
//! unchanged and are listed back in the order they were added.

mod common;

use std::collections::BTreeMap;

use proptest::prelude::*;
use tempfile::TempDir;

/// Strategy for a set of distinct file names with arbitrary contents.
///
/// Names are simple alphanumeric stems with a fixed extension, so they are
/// valid file names on every platform. The map is shuffled into a vector
/// to exercise non-alphabetical insertion orders.
fn files_strategy() -> impl Strategy<Value = Vec<(String, Vec<u8>)>> {
    proptest::collection::btree_map(
        "[a-z0-9]{1,12}",
        proptest::collection::vec(any::<u8>(), 0..2048),
        1..8,
    )
    .prop_map(|map: BTreeMap<String, Vec<u8>>| {
        map.into_iter()
            .map(|(stem, data)| (format!("{}.dat", stem), data))
            .collect::<Vec<_>>()
    })
    .prop_shuffle()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Every added file is listed, in insertion order, with identical content.
    #[test]
    fn round_trip_preserves_names_order_and_content(files in files_strategy()) {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prop.zip");
        let entries: Vec<(&str, &[u8])> = files
            .iter()
            .map(|(name, data)| (name.as_str(), data.as_slice()))
            .collect();

        let handle = common::build_archive(&path, &entries);

        let listed = handle.file_list().unwrap();
        let expected: Vec<&str> = entries.iter().map(|(name, _)| *name).collect();
        prop_assert_eq!(listed, expected);

        for (name, data) in &entries {
            prop_assert_eq!(&common::extract_entry(&path, name)[..], *data);
        }
    }

    /// Splitting the same files across two sessions gives the same listing.
    #[test]
    fn two_sessions_match_one(files in files_strategy(), split in any::<prop::sample::Index>()) {
        let dir = TempDir::new().unwrap();
        let sources = TempDir::new().unwrap();
        let path = dir.path().join("split.zip");
        let at = split.index(files.len() + 1);

        let mut handle = zipper::ArchiveHandle::new(&path);
        handle.create(false).unwrap();
        for chunk in [&files[..at], &files[at..]] {
            handle.open().unwrap();
            for (name, data) in chunk {
                let source = common::write_source(sources.path(), name, data);
                handle.add_file(&source).unwrap();
            }
            handle.close().unwrap();
        }

        let listed = handle.file_list().unwrap();
        let expected: Vec<&str> = files.iter().map(|(name, _)| name.as_str()).collect();
        prop_assert_eq!(listed, expected);
    }
}
