//! I/O boundary traits for testability
//!
//! These traits abstract the document file and the XML engine, allowing the
//! navigator to be tested with in-memory implementations.

use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::domain::{Document, NodeId};
use crate::infrastructure::xml::XmlError;

/// Filesystem abstraction for testability.
pub trait FileSystem: Send + Sync {
    /// Read file contents to string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;

    /// Replace the file at `path` with `content` in a single rename.
    ///
    /// Readers see either the old or the new content, never a partial write.
    fn write_atomic(&self, path: &Path, content: &str) -> io::Result<()>;
}

/// XML engine abstraction: text to document and back.
pub trait DocumentCodec: Send + Sync {
    /// Parse a whole document.
    fn parse(&self, text: &str) -> Result<Document, XmlError>;

    /// Serialize the subtree rooted at `node`.
    fn serialize(&self, document: &Document, node: NodeId) -> Result<String, XmlError>;
}

// ============================================================
// REAL IMPLEMENTATIONS
// ============================================================

/// Real filesystem implementation.
#[derive(Debug, Default)]
pub struct RealFileSystem;

impl FileSystem for RealFileSystem {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }

    fn write_atomic(&self, path: &Path, content: &str) -> io::Result<()> {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or(Path::new("."));

        // temp file must live on the same filesystem for the rename to be atomic
        let mut tmp = NamedTempFile::new_in(dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.as_file().sync_all()?;

        if let Ok(meta) = std::fs::metadata(path) {
            tmp.as_file().set_permissions(meta.permissions())?;
        }

        debug!("write_atomic: {} -> {}", tmp.path().display(), path.display());
        tmp.persist(path).map_err(|e| e.error)?;
        Ok(())
    }
}
