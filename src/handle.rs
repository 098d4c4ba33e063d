//! The archive handle: one archive path plus at most one write session.
//!
//! # Example
//!
//! ```rust,no_run
//! use zipper::ArchiveHandle;
//!
//! let mut archive = ArchiveHandle::new("backup.zip");
//! archive.create(false)?;
//!
//! archive.open()?;
//! archive.add_file("report.pdf")?;
//! archive.add_file("notes.txt")?;
//! archive.close()?;
//!
//! for name in archive.file_list()? {
//!     println!("{}", name);
//! }
//! # Ok::<(), zipper::Error>(())
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};

use crate::list;
use crate::options::WriteOptions;
use crate::session::WriteSession;
use crate::{Error, Result};

/// A zip archive on disk and its optional write session.
///
/// The handle performs no locking. Callers serialize their own calls on a
/// handle, and nothing guards against other handles or processes touching
/// the same path.
#[derive(Debug)]
pub struct ArchiveHandle {
    path: PathBuf,
    options: WriteOptions,
    session: Option<WriteSession>,
}

impl ArchiveHandle {
    /// Creates a handle for the archive at `path` with default options.
    ///
    /// Nothing is touched on disk until an operation is called.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self::with_options(path, WriteOptions::default())
    }

    /// Creates a handle with custom write options.
    pub fn with_options(path: impl Into<PathBuf>, options: WriteOptions) -> Self {
        Self {
            path: path.into(),
            options,
            session: None,
        }
    }

    /// Returns the archive path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the write options used for new sessions.
    pub fn options(&self) -> WriteOptions {
        self.options
    }

    /// Returns true while a write session is open.
    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    /// Creates an empty archive file.
    ///
    /// An existing file is left untouched unless `force` is set, in which
    /// case it is truncated. No write session is opened.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ArchiveCreate`] if the file cannot be created, and
    /// [`Error::WriteSessionActive`] if `force` would truncate the file under
    /// this handle's own open session.
    pub fn create(&self, force: bool) -> Result<()> {
        if self.path.exists() {
            if !force {
                log::debug!("Archive '{}' exists, keeping it", self.path.display());
                return Ok(());
            }
            if self.is_open() {
                return Err(Error::WriteSessionActive {
                    path: self.path.clone(),
                });
            }
        }

        File::create(&self.path).map_err(|source| Error::ArchiveCreate {
            path: self.path.clone(),
            source,
        })?;
        log::debug!("Created empty archive '{}'", self.path.display());
        Ok(())
    }

    /// Opens a write session on the archive.
    ///
    /// Every entry added during the session is deflate-compressed at the
    /// configured level (the strongest by default).
    ///
    /// # Errors
    ///
    /// - [`Error::ArchiveNotFound`] if the archive does not exist
    /// - [`Error::ArchiveOpen`] if it cannot be opened for writing
    /// - [`Error::InvalidArchive`] if it has content that is not a zip archive
    /// - [`Error::WriteSessionActive`] if a session is already open
    pub fn open(&mut self) -> Result<()> {
        if self.is_open() {
            return Err(Error::WriteSessionActive {
                path: self.path.clone(),
            });
        }
        if !self.path.exists() {
            return Err(Error::ArchiveNotFound {
                path: self.path.clone(),
            });
        }

        self.session = Some(WriteSession::open(&self.path, self.options)?);
        Ok(())
    }

    /// Appends the file at `source` as a new entry.
    ///
    /// The entry is named after the file's base name and carries its
    /// modification time. Entries are never replaced: adding a name that is
    /// already in the archive fails with [`Error::EntryCreate`] and leaves
    /// the first entry in place.
    ///
    /// # Errors
    ///
    /// - [`Error::NoWriteSession`] if [`open`](Self::open) was not called
    /// - [`Error::SourceNotFound`] if `source` does not exist
    /// - [`Error::SourceOpen`], [`Error::SourceMetadata`],
    ///   [`Error::InvalidEntryHeader`], [`Error::EntryCreate`] or
    ///   [`Error::EntryCopy`] naming the step that failed
    pub fn add_file(&mut self, source: impl AsRef<Path>) -> Result<()> {
        let session = self.session.as_mut().ok_or_else(|| Error::NoWriteSession {
            path: self.path.clone(),
        })?;
        session.append(source.as_ref())
    }

    /// Finalizes the archive and closes the write session.
    ///
    /// Closing a handle with no open session succeeds without doing anything.
    /// The session is discarded even if finalizing fails.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Finalize`] if the central directory cannot be written,
    /// or [`Error::Io`] if the file cannot be flushed to disk.
    pub fn close(&mut self) -> Result<()> {
        let Some(session) = self.session.take() else {
            log::debug!("Archive '{}' already closed", self.path.display());
            return Ok(());
        };
        session.finish(&self.path)
    }

    /// Lists the names of the file entries in the archive.
    ///
    /// Names are returned in the order the entries appear in the archive.
    /// Directory entries are skipped. The archive is opened read-only and
    /// closed again before returning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::WriteSessionActive`] while a write session is open on
    /// this handle, and otherwise the errors of [`list::file_names`].
    pub fn file_list(&self) -> Result<Vec<String>> {
        if self.is_open() {
            return Err(Error::WriteSessionActive {
                path: self.path.clone(),
            });
        }
        list::file_names(&self.path)
    }
}

impl Drop for ArchiveHandle {
    fn drop(&mut self) {
        if let Some(session) = self.session.take() {
            log::warn!(
                "Archive '{}' dropped with an open write session, finalizing",
                self.path.display()
            );
            if let Err(e) = session.finish(&self.path) {
                log::warn!("Failed to finalize '{}': {}", self.path.display(), e);
            }
        }
    }
}
