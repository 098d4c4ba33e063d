//! Write sessions: an open archive file bound to a zip writer.

use std::fs::{File, OpenOptions};
use std::io;
use std::path::Path;

use zip::ZipWriter;

use crate::entry::EntryHeader;
use crate::options::WriteOptions;
use crate::{Error, Result};

/// An archive file opened for writing together with its zip writer.
///
/// The writer owns the file handle, so both are opened and released
/// together. Dropping a session without [`finish`](Self::finish) lets the
/// writer finalize the archive on a best-effort basis.
pub(crate) struct WriteSession {
    writer: ZipWriter<File>,
    options: WriteOptions,
    entries_added: usize,
}

impl WriteSession {
    /// Opens the archive at `path` for writing.
    ///
    /// A zero-length file starts a new archive. A populated file is continued:
    /// its existing entries are kept and new entries follow them.
    pub(crate) fn open(path: &Path, options: WriteOptions) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|source| match source.kind() {
                io::ErrorKind::NotFound => Error::ArchiveNotFound {
                    path: path.to_path_buf(),
                },
                _ => Error::ArchiveOpen {
                    path: path.to_path_buf(),
                    source,
                },
            })?;

        let len = file
            .metadata()
            .map_err(|source| Error::ArchiveOpen {
                path: path.to_path_buf(),
                source,
            })?
            .len();

        let writer = if len == 0 {
            ZipWriter::new(file)
        } else {
            ZipWriter::new_append(file).map_err(|source| Error::InvalidArchive {
                path: path.to_path_buf(),
                source,
            })?
        };

        log::debug!(
            "Opened '{}' for writing ({} existing bytes, level {})",
            path.display(),
            len,
            options.level
        );

        Ok(Self {
            writer,
            options,
            entries_added: 0,
        })
    }

    /// Appends the file at `source` as a new deflate-compressed entry.
    ///
    /// The source handle is released when this returns, on every path.
    pub(crate) fn append(&mut self, source: &Path) -> Result<()> {
        let mut file = File::open(source).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => Error::SourceNotFound {
                path: source.to_path_buf(),
            },
            _ => Error::SourceOpen {
                path: source.to_path_buf(),
                source: e,
            },
        })?;

        let metadata = file.metadata().map_err(|e| Error::SourceMetadata {
            path: source.to_path_buf(),
            source: e,
        })?;
        let header = EntryHeader::from_metadata(source, &metadata)?;

        // Deflate is set on the entry itself, not inherited from the writer.
        let options = header.apply(self.options.file_options());
        self.writer
            .start_file(header.name.as_str(), options)
            .map_err(|e| Error::EntryCreate {
                name: header.name.clone(),
                source: e,
            })?;

        if let Err(e) = io::copy(&mut file, &mut self.writer) {
            if let Err(abort_err) = self.writer.abort_file() {
                log::warn!(
                    "Failed to discard partial entry '{}': {}",
                    header.name,
                    abort_err
                );
            }
            return Err(Error::EntryCopy {
                name: header.name,
                source: e,
            });
        }

        self.entries_added += 1;
        log::debug!("Added entry '{}' ({} bytes)", header.name, header.size);
        Ok(())
    }

    /// Writes the central directory and closes the archive file.
    pub(crate) fn finish(self, path: &Path) -> Result<()> {
        let entries_added = self.entries_added;
        let file = self.writer.finish().map_err(|source| Error::Finalize {
            path: path.to_path_buf(),
            source,
        })?;
        file.sync_all()?;

        log::debug!(
            "Closed '{}' after adding {} entries",
            path.display(),
            entries_added
        );
        Ok(())
    }
}

impl std::fmt::Debug for WriteSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WriteSession")
            .field("options", &self.options)
            .field("entries_added", &self.entries_added)
            .finish()
    }
}
