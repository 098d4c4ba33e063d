//! Entry headers derived from filesystem metadata.
//!
//! An entry is named after the source file's base name and takes its
//! modification time, and on Unix its permission bits, from the source
//! file's metadata. Only regular files become entries.

use std::fs::Metadata;
use std::path::Path;
use std::time::SystemTime;

use chrono::{Datelike, Local, Timelike};
use zip::DateTime;
use zip::write::SimpleFileOptions;

use crate::{Error, Result};

/// Earliest year representable by a zip (MS-DOS) timestamp.
const DOS_MIN_YEAR: i32 = 1980;

/// Latest year representable by a zip (MS-DOS) timestamp.
const DOS_MAX_YEAR: i32 = 2107;

/// Header of an entry about to be written.
#[derive(Debug, Clone)]
pub struct EntryHeader {
    /// Entry name inside the archive.
    pub name: String,
    /// Uncompressed size in bytes.
    pub size: u64,
    /// Last modification time, in local time.
    pub modified: DateTime,
    /// Unix permission bits, when the platform provides them.
    pub unix_mode: Option<u32>,
}

impl EntryHeader {
    /// Derives a header for the file at `path` from its metadata.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEntryHeader`] if the source is not a regular
    /// file or its base name is missing or not valid UTF-8.
    pub fn from_metadata(path: &Path, metadata: &Metadata) -> Result<Self> {
        if metadata.is_dir() {
            return Err(Error::invalid_header(path, "source is a directory"));
        }
        if !metadata.is_file() {
            return Err(Error::invalid_header(path, "source is not a regular file"));
        }

        let name = path
            .file_name()
            .ok_or_else(|| Error::invalid_header(path, "path has no file name"))?
            .to_str()
            .ok_or_else(|| Error::invalid_header(path, "file name is not valid UTF-8"))?
            .to_string();

        let modified = match metadata.modified() {
            Ok(time) => dos_timestamp(time),
            Err(e) => {
                log::debug!(
                    "No modification time for '{}' ({}), using zip epoch",
                    path.display(),
                    e
                );
                DateTime::default()
            }
        };

        Ok(Self {
            name,
            size: metadata.len(),
            modified,
            unix_mode: unix_mode(metadata),
        })
    }

    /// Returns true if the entry needs ZIP64 extensions.
    pub fn is_large(&self) -> bool {
        self.size >= u64::from(u32::MAX)
    }

    /// Applies this header's metadata on top of the session's base options.
    pub(crate) fn apply(&self, base: SimpleFileOptions) -> SimpleFileOptions {
        let options = base
            .last_modified_time(self.modified)
            .large_file(self.is_large());
        match self.unix_mode {
            Some(mode) => options.unix_permissions(mode),
            None => options,
        }
    }
}

#[cfg(unix)]
fn unix_mode(metadata: &Metadata) -> Option<u32> {
    use std::os::unix::fs::PermissionsExt;
    Some(metadata.permissions().mode())
}

#[cfg(not(unix))]
fn unix_mode(_metadata: &Metadata) -> Option<u32> {
    None
}

/// Converts a system time to a zip timestamp in local time.
///
/// Times outside 1980-2107 are clamped to the nearest representable value.
pub(crate) fn dos_timestamp(time: SystemTime) -> DateTime {
    let local = chrono::DateTime::<Local>::from(time);
    let year = local.year();

    if year < DOS_MIN_YEAR {
        log::warn!("Timestamp year {} predates zip range, clamping to 1980", year);
        return DateTime::default();
    }
    if year > DOS_MAX_YEAR {
        log::warn!("Timestamp year {} exceeds zip range, clamping to 2107", year);
        return DateTime::from_date_and_time(2107, 12, 31, 23, 59, 58).unwrap_or_default();
    }

    // Month, day, and time fields are always in range here.
    DateTime::from_date_and_time(
        year as u16,
        local.month() as u8,
        local.day() as u8,
        local.hour() as u8,
        local.minute() as u8,
        local.second() as u8,
    )
    .unwrap_or_default()
}
