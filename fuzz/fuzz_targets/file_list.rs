//! Fuzz target for listing entries of arbitrary byte input.
//!
//! The bytes are written to a scratch file which is then listed and, if it
//! parses as an archive, opened for appending and closed again. The goal is
//! to find panics or hangs when reading malformed central directories.
//!
//! Run with: cargo +nightly fuzz run file_list

#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Write;

fuzz_target!(|data: &[u8]| {
    let Ok(mut file) = tempfile::NamedTempFile::new() else {
        return;
    };
    if file.write_all(data).is_err() {
        return;
    }

    // We don't care about the result - we're looking for panics or hangs
    let mut archive = zipper::ArchiveHandle::new(file.path());
    if archive.file_list().is_ok() && archive.open().is_ok() {
        let _ = archive.close();
    }
});
