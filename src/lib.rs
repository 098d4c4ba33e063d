//! # zipper
//!
//! A small wrapper for creating zip archives, appending individually
//! compressed files to them, and listing the entries already present.
//!
//! Archive framing and deflate compression are provided by the [`zip`]
//! crate. This crate sequences the calls, keeps track of the single write
//! session an archive may have, and reports failures with enough detail to
//! tell which step went wrong.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use zipper::{ArchiveHandle, Result};
//!
//! fn main() -> Result<()> {
//!     let mut archive = ArchiveHandle::new("logs.zip");
//!
//!     // Create the file unless it already exists
//!     archive.create(false)?;
//!
//!     // Append entries, compressed with the strongest deflate level
//!     archive.open()?;
//!     archive.add_file("app.log")?;
//!     archive.add_file("app.log.1")?;
//!     archive.close()?;
//!
//!     // List entries in the order they were written
//!     for name in archive.file_list()? {
//!         println!("{}", name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Write Sessions
//!
//! Entries can only be added between [`ArchiveHandle::open`] and
//! [`ArchiveHandle::close`]. While a session is open the archive is not in a
//! readable state, so [`ArchiveHandle::file_list`] refuses with
//! [`Error::WriteSessionActive`]. Opening an archive that already holds
//! entries continues it; existing entries are kept.
//!
//! ## Configuration
//!
//! ```rust
//! use zipper::{ArchiveHandle, WriteOptions};
//!
//! let options = WriteOptions::new().level(6)?;
//! let archive = ArchiveHandle::with_options("fast.zip", options);
//! assert_eq!(archive.options().level, 6);
//! # Ok::<(), zipper::Error>(())
//! ```
//!
//! ## Logging
//!
//! Diagnostics are emitted through the [`log`] facade. Install any logger
//! implementation to see session and entry activity at `debug` level.
//!
//! ## Minimum Supported Rust Version (MSRV)
//!
//! This crate requires **Rust 1.85** or later.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
#![warn(rust_2018_idioms)]

pub mod entry;
pub mod error;
pub mod handle;
pub mod list;
pub mod options;

mod session;

pub use entry::EntryHeader;
pub use error::{Error, ErrorKind, Result};
pub use handle::ArchiveHandle;
pub use list::file_names;
pub use options::WriteOptions;
