//! Compression options for write sessions.

use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

use crate::{Error, Result};

/// Weakest deflate compression level the writer accepts.
pub const MIN_LEVEL: u32 = 1;

/// Strongest deflate compression level.
pub const MAX_LEVEL: u32 = 9;

/// Options applied to every entry written during a write session.
///
/// Entries are always deflate-compressed; only the level is configurable.
/// The default is the strongest level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOptions {
    /// Deflate compression level (1-9).
    pub level: u32,
}

impl Default for WriteOptions {
    fn default() -> Self {
        Self { level: MAX_LEVEL }
    }
}

impl WriteOptions {
    /// Creates new write options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the compression level (strict validation).
    ///
    /// Valid values are 1-9, where 1 is fastest and 9 gives the smallest
    /// output. The zip writer has no deflate level 0.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCompressionLevel`] if level is 0 or greater than 9.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use zipper::WriteOptions;
    ///
    /// let opts = WriteOptions::new().level(6)?;
    /// assert_eq!(opts.level, 6);
    ///
    /// assert!(WriteOptions::new().level(0).is_err());
    /// assert!(WriteOptions::new().level(15).is_err());
    /// # Ok::<(), zipper::Error>(())
    /// ```
    pub fn level(mut self, level: u32) -> Result<Self> {
        if !(MIN_LEVEL..=MAX_LEVEL).contains(&level) {
            return Err(Error::InvalidCompressionLevel { level });
        }
        self.level = level;
        Ok(self)
    }

    /// Sets the compression level, clamping it into 1-9.
    pub fn level_clamped(mut self, level: u32) -> Self {
        self.level = level.clamp(MIN_LEVEL, MAX_LEVEL);
        self
    }

    /// Base zip file options for a new entry: deflate at the configured level.
    pub(crate) fn file_options(&self) -> SimpleFileOptions {
        SimpleFileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .compression_level(Some(i64::from(self.level)))
    }
}
