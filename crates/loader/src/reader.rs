//! File reading with not-found as an ordinary outcome.
//!
//! Both functions return `Ok(None)` when the path does not exist, and a
//! zero-byte file reads as `Ok(Some(String::new()))` so callers can tell an
//! empty file from a missing one. Every other I/O failure (permission
//! denied, a directory where a file was expected) propagates.

use std::io;
use std::path::Path;

/// Read a file without blocking, mapping not-found to `None`.
pub async fn read(path: &Path) -> io::Result<Option<String>> {
    match tokio::fs::read_to_string(path).await {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

/// Blocking variant of [`read`], identical in behavior.
pub fn read_sync(path: &Path) -> io::Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(err) => Err(err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(read_sync(&dir.path().join("absent")).unwrap(), None);
    }

    #[test]
    fn empty_file_reads_as_empty_string() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty");
        std::fs::write(&path, "").unwrap();
        assert_eq!(read_sync(&path).unwrap(), Some(String::new()));
    }

    #[test]
    fn directory_read_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_sync(dir.path()).is_err());
    }

    #[tokio::test]
    async fn async_read_agrees_with_blocking_read() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("present");
        std::fs::write(&path, "content\n").unwrap();

        assert_eq!(read(&path).await.unwrap(), read_sync(&path).unwrap());
        let absent = dir.path().join("absent");
        assert_eq!(read(&absent).await.unwrap(), read_sync(&absent).unwrap());
    }
}
