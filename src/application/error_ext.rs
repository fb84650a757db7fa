//! Error conversion helpers for document I/O
//!
//! Provides extension traits for attaching the document path to I/O errors.

use std::io;
use std::path::Path;

use crate::application::{ApplicationError, ApplicationResult};

/// Extension trait for converting `io::Result` to `ApplicationResult` with context.
pub trait IoResultExt<T> {
    /// Classify an error raised while opening or reading the document.
    fn on_open(self, path: &Path) -> ApplicationResult<T>;

    /// Classify an error raised while writing the document back.
    fn on_write(self, path: &Path) -> ApplicationResult<T>;

    /// Classify an error raised while printing step output.
    fn on_output(self) -> ApplicationResult<T>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn on_open(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::FileOpen {
            path: path.to_path_buf(),
            source,
        })
    }

    fn on_write(self, path: &Path) -> ApplicationResult<T> {
        self.map_err(|source| ApplicationError::FileWrite {
            path: path.to_path_buf(),
            source,
        })
    }

    fn on_output(self) -> ApplicationResult<T> {
        self.map_err(ApplicationError::Output)
    }
}
