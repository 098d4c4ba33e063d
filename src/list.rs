//! Read-only listing of archive entries.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use zip::ZipArchive;

use crate::{Error, Result};

/// Returns the names of the file entries in the archive at `path`.
///
/// Names come back in central directory order, which is the order the
/// entries were written. Directory entries are skipped. A zero-length file
/// is treated as an archive with no entries.
///
/// The archive is opened independently of any write session and closed
/// before returning.
///
/// # Errors
///
/// Returns [`Error::ArchiveOpen`] if the file cannot be opened and
/// [`Error::InvalidArchive`] if it is not a valid zip archive.
pub fn file_names(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let open_err = |source| Error::ArchiveOpen {
        path: path.to_path_buf(),
        source,
    };
    let invalid = |source| Error::InvalidArchive {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(open_err)?;
    if file.metadata().map_err(open_err)?.len() == 0 {
        return Ok(Vec::new());
    }

    let mut archive = ZipArchive::new(BufReader::new(file)).map_err(invalid)?;
    let mut names = Vec::with_capacity(archive.len());
    for index in 0..archive.len() {
        let entry = archive.by_index_raw(index).map_err(invalid)?;
        if entry.is_dir() {
            continue;
        }
        names.push(entry.name().to_string());
    }

    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;
    use zip::write::SimpleFileOptions;

    #[test]
    fn test_zero_length_file_has_no_entries() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("empty.zip");
        File::create(&path).unwrap();

        assert!(file_names(&path).unwrap().is_empty());
    }

    #[test]
    fn test_missing_file() {
        let dir = TempDir::new().unwrap();
        let err = file_names(dir.path().join("missing.zip")).unwrap_err();
        assert!(matches!(err, Error::ArchiveOpen { .. }));
    }

    #[test]
    fn test_invalid_archive() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.zip");
        std::fs::write(&path, b"PK not really").unwrap();

        let err = file_names(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidArchive { .. }));
    }

    #[test]
    fn test_directories_skipped_order_kept() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("mixed.zip");
        {
            let mut writer = zip::ZipWriter::new(File::create(&path).unwrap());
            let options = SimpleFileOptions::default();
            writer.start_file("zeta.txt", options).unwrap();
            writer.write_all(b"z").unwrap();
            writer.add_directory("docs/", options).unwrap();
            writer.start_file("alpha.txt", options).unwrap();
            writer.write_all(b"a").unwrap();
            writer.finish().unwrap();
        }

        assert_eq!(file_names(&path).unwrap(), vec!["zeta.txt", "alpha.txt"]);
    }
}
