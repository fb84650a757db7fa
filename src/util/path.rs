use std::io;
use std::path::{Path, PathBuf};

/// Resolve `path` against the current working directory.
///
/// Does not touch the filesystem, so a missing file still yields a usable
/// path for diagnostics.
pub fn absolutize(path: &Path) -> io::Result<PathBuf> {
    if path.is_absolute() {
        Ok(path.to_path_buf())
    } else {
        Ok(std::env::current_dir()?.join(path))
    }
}
