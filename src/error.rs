//! Error types for zip archive operations.
//!
//! This module provides the [`Error`] enum which represents every failure a
//! [`ArchiveHandle`] operation can report, along with a convenient
//! [`Result<T>`] type alias.
//!
//! # Error Handling
//!
//! All fallible operations in this crate return `Result<T, Error>`. Each
//! variant names the step that failed, so callers can tell "the source file
//! could not be opened" apart from "the entry header could not be derived"
//! or "copying the bytes failed". For coarse handling, [`Error::kind`] folds
//! the variants into a small taxonomy:
//!
//! ```rust,no_run
//! use zipper::{ArchiveHandle, ErrorKind};
//!
//! fn add(path: &str, source: &str) -> zipper::Result<()> {
//!     let mut archive = ArchiveHandle::new(path);
//!     archive.create(false)?;
//!     archive.open()?;
//!     match archive.add_file(source) {
//!         Ok(()) => {}
//!         Err(e) if e.kind() == ErrorKind::NotFound => eprintln!("skipping: {}", e),
//!         Err(e) => return Err(e),
//!     }
//!     archive.close()
//! }
//! ```
//!
//! [`ArchiveHandle`]: crate::ArchiveHandle

use std::io;
use std::path::PathBuf;

use zip::result::ZipError;

/// Coarse classification of an [`Error`].
///
/// Every error maps to exactly one kind, which is what callers usually want
/// to branch on. The detailed variant remains available for messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The archive (for `open`) or the source file (for `add_file`) does not exist.
    NotFound,
    /// Any filesystem, stream, or archive-format failure other than not-found.
    Io,
    /// A listing was requested while a write session is active on the handle.
    Conflict,
    /// An operation was called in a state that does not allow it.
    Precondition,
    /// Invalid configuration was supplied.
    Config,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "not found"),
            Self::Io => write!(f, "I/O failure"),
            Self::Conflict => write!(f, "conflict"),
            Self::Precondition => write!(f, "precondition violated"),
            Self::Config => write!(f, "invalid configuration"),
        }
    }
}

/// The main error type for archive operations.
///
/// | Kind | Variants |
/// |------|----------|
/// | Not found | [`ArchiveNotFound`][Self::ArchiveNotFound], [`SourceNotFound`][Self::SourceNotFound] |
/// | I/O | [`Io`][Self::Io], [`SourceOpen`][Self::SourceOpen], [`SourceMetadata`][Self::SourceMetadata], [`InvalidEntryHeader`][Self::InvalidEntryHeader], [`EntryCreate`][Self::EntryCreate], [`EntryCopy`][Self::EntryCopy], [`ArchiveCreate`][Self::ArchiveCreate], [`ArchiveOpen`][Self::ArchiveOpen], [`InvalidArchive`][Self::InvalidArchive], [`Finalize`][Self::Finalize] |
/// | Conflict | [`WriteSessionActive`][Self::WriteSessionActive] |
/// | Precondition | [`NoWriteSession`][Self::NoWriteSession] |
/// | Config | [`InvalidCompressionLevel`][Self::InvalidCompressionLevel] |
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// An I/O error occurred that is not tied to a specific step.
    ///
    /// Check the underlying [`std::io::ErrorKind`] for specific handling.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The archive file does not exist.
    #[error("archive does not exist: {}", path.display())]
    ArchiveNotFound {
        /// Path of the missing archive.
        path: PathBuf,
    },

    /// The file to add does not exist.
    #[error("file to add does not exist: {}", path.display())]
    SourceNotFound {
        /// Path of the missing source file.
        path: PathBuf,
    },

    /// The file to add exists but could not be opened for reading.
    #[error("error opening file to add '{}': {source}", path.display())]
    SourceOpen {
        /// Path of the source file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// Metadata of the opened source file could not be read.
    #[error("error getting file info for '{}': {source}", path.display())]
    SourceMetadata {
        /// Path of the source file.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// No entry header could be derived from the source file's metadata.
    #[error("error determining header for '{}': {reason}", path.display())]
    InvalidEntryHeader {
        /// Path of the source file.
        path: PathBuf,
        /// Why the header could not be derived.
        reason: String,
    },

    /// The archive writer refused to start a new entry.
    #[error("error creating entry '{name}': {source}")]
    EntryCreate {
        /// Entry name.
        name: String,
        /// The underlying error.
        #[source]
        source: ZipError,
    },

    /// Copying the source bytes into the entry failed.
    #[error("error copying data into entry '{name}': {source}")]
    EntryCopy {
        /// Entry name.
        name: String,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The archive file could not be created or truncated.
    #[error("error creating archive '{}': {source}", path.display())]
    ArchiveCreate {
        /// Path of the archive.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The archive file could not be opened.
    #[error("error opening archive '{}': {source}", path.display())]
    ArchiveOpen {
        /// Path of the archive.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// The archive file is not a valid zip archive.
    #[error("invalid zip archive '{}': {source}", path.display())]
    InvalidArchive {
        /// Path of the archive.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: ZipError,
    },

    /// Writing the central directory failed while closing the session.
    #[error("error finalizing archive '{}': {source}", path.display())]
    Finalize {
        /// Path of the archive.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: ZipError,
    },

    /// The archive is open for writing on this handle and cannot be read.
    #[error("archive '{}' is open for writing", path.display())]
    WriteSessionActive {
        /// Path of the archive.
        path: PathBuf,
    },

    /// An entry was added without an open write session.
    #[error("archive '{}' is not open for writing", path.display())]
    NoWriteSession {
        /// Path of the archive.
        path: PathBuf,
    },

    /// The configured compression level is out of range.
    #[error("invalid compression level {level}: must be 1-9")]
    InvalidCompressionLevel {
        /// The rejected level.
        level: u32,
    },
}

impl Error {
    /// Returns the coarse classification of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::ArchiveNotFound { .. } | Error::SourceNotFound { .. } => ErrorKind::NotFound,
            Error::Io(e) if e.kind() == io::ErrorKind::NotFound => ErrorKind::NotFound,
            Error::WriteSessionActive { .. } => ErrorKind::Conflict,
            Error::NoWriteSession { .. } => ErrorKind::Precondition,
            Error::InvalidCompressionLevel { .. } => ErrorKind::Config,
            _ => ErrorKind::Io,
        }
    }

    /// Returns true if a required file does not exist.
    pub fn is_not_found(&self) -> bool {
        self.kind() == ErrorKind::NotFound
    }

    /// Returns true if a listing collided with an active write session.
    pub fn is_conflict(&self) -> bool {
        self.kind() == ErrorKind::Conflict
    }

    /// Returns the filesystem path this error refers to, if any.
    pub fn path(&self) -> Option<&std::path::Path> {
        match self {
            Error::ArchiveNotFound { path }
            | Error::SourceNotFound { path }
            | Error::SourceOpen { path, .. }
            | Error::SourceMetadata { path, .. }
            | Error::InvalidEntryHeader { path, .. }
            | Error::ArchiveCreate { path, .. }
            | Error::ArchiveOpen { path, .. }
            | Error::InvalidArchive { path, .. }
            | Error::Finalize { path, .. }
            | Error::WriteSessionActive { path }
            | Error::NoWriteSession { path } => Some(path.as_path()),
            _ => None,
        }
    }

    /// Returns the entry name this error refers to, if any.
    pub fn entry_name(&self) -> Option<&str> {
        match self {
            Error::EntryCreate { name, .. } | Error::EntryCopy { name, .. } => Some(name.as_str()),
            _ => None,
        }
    }

    pub(crate) fn invalid_header(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::InvalidEntryHeader {
            path: path.into(),
            reason: reason.into(),
        }
    }
}

/// A specialized Result type for archive operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_from() {
        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert!(err.to_string().contains("I/O error"));
        assert_eq!(err.kind(), ErrorKind::Io);
    }

    #[test]
    fn test_io_not_found_is_not_found() {
        let err: Error = io::Error::new(io::ErrorKind::NotFound, "gone").into();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_not_found_variants() {
        let err = Error::ArchiveNotFound {
            path: "out.zip".into(),
        };
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.to_string().contains("out.zip"));

        let err = Error::SourceNotFound {
            path: "missing.txt".into(),
        };
        assert!(err.is_not_found());
        assert_eq!(err.path(), Some(std::path::Path::new("missing.txt")));
    }

    #[test]
    fn test_step_messages_are_distinct() {
        let open = Error::SourceOpen {
            path: "a.txt".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };
        let header = Error::invalid_header("a.txt", "not a regular file");
        let copy = Error::EntryCopy {
            name: "a.txt".into(),
            source: io::Error::other("disk full"),
        };

        assert!(open.to_string().contains("opening file to add"));
        assert!(header.to_string().contains("determining header"));
        assert!(header.to_string().contains("not a regular file"));
        assert!(copy.to_string().contains("copying data"));
        assert_eq!(copy.entry_name(), Some("a.txt"));

        for err in [open, header, copy] {
            assert_eq!(err.kind(), ErrorKind::Io);
        }
    }

    #[test]
    fn test_conflict_and_precondition() {
        let err = Error::WriteSessionActive {
            path: "a.zip".into(),
        };
        assert!(err.is_conflict());
        assert!(err.to_string().contains("open for writing"));

        let err = Error::NoWriteSession {
            path: "a.zip".into(),
        };
        assert_eq!(err.kind(), ErrorKind::Precondition);
        assert!(!err.is_conflict());
    }

    #[test]
    fn test_invalid_compression_level() {
        let err = Error::InvalidCompressionLevel { level: 12 };
        assert_eq!(err.kind(), ErrorKind::Config);
        assert_eq!(err.to_string(), "invalid compression level 12: must be 1-9");
    }

    #[test]
    fn test_source_chain_preserved() {
        let err = Error::InvalidArchive {
            path: "bad.zip".into(),
            source: ZipError::InvalidArchive("no end of central directory".into()),
        };
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
