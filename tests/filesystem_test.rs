//! Tests for the real FileSystem implementation

use std::fs;

use tempfile::TempDir;

use vtcli::infrastructure::traits::{FileSystem, RealFileSystem};

// ============================================================
// write_atomic tests
// ============================================================

#[test]
fn given_existing_file_when_write_atomic_then_replaces_content() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("doc.xml");
    fs::write(&path, "<old/>").unwrap();

    // Act
    RealFileSystem.write_atomic(&path, "<new/>\n").unwrap();

    // Assert
    assert_eq!(fs::read_to_string(&path).unwrap(), "<new/>\n");
}

#[test]
fn given_new_path_when_write_atomic_then_creates_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("fresh.xml");

    RealFileSystem.write_atomic(&path, "<root/>").unwrap();

    assert_eq!(RealFileSystem.read_to_string(&path).unwrap(), "<root/>");
}

#[test]
fn given_missing_directory_when_write_atomic_then_fails_without_creating_it() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nowhere/doc.xml");

    let result = RealFileSystem.write_atomic(&path, "<root/>");

    assert!(result.is_err());
    assert!(!temp.path().join("nowhere").exists());
}

#[cfg(unix)]
#[test]
fn given_file_with_permissions_when_write_atomic_then_keeps_mode() {
    use std::os::unix::fs::PermissionsExt;

    let temp = TempDir::new().unwrap();
    let path = temp.path().join("doc.xml");
    fs::write(&path, "<old/>").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

    RealFileSystem.write_atomic(&path, "<new/>").unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o640);
}

#[test]
fn given_missing_file_when_read_to_string_then_not_found() {
    let temp = TempDir::new().unwrap();

    let err = RealFileSystem
        .read_to_string(&temp.path().join("absent.xml"))
        .unwrap_err();

    assert_eq!(err.kind(), std::io::ErrorKind::NotFound);
}
