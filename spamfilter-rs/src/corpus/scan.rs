//! Corpus directory enumeration

use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

/// List the message files of a corpus directory.
///
/// Flat enumeration in filesystem order; subdirectories are skipped. The
/// order is platform-dependent and nothing downstream depends on it beyond
/// the aggregate counts it produces.
pub fn list_messages<P: AsRef<Path>>(dir: P) -> Result<Vec<PathBuf>> {
    let mut paths = Vec::new();

    for entry in std::fs::read_dir(dir.as_ref())? {
        let entry = entry?;
        let path = entry.path();

        if path.is_file() {
            paths.push(path);
        }
    }

    debug!("Found {} messages in {}", paths.len(), dir.as_ref().display());

    Ok(paths)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_list_messages() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.eml"), "x").unwrap();
        fs::write(dir.path().join("b.eml"), "y").unwrap();
        fs::create_dir(dir.path().join("subdir")).unwrap();

        let paths = list_messages(dir.path()).unwrap();
        assert_eq!(paths.len(), 2);
        assert!(paths.iter().all(|p| p.is_file()));
    }

    #[test]
    fn test_list_messages_empty_dir() {
        let dir = TempDir::new().unwrap();
        let paths = list_messages(dir.path()).unwrap();
        assert!(paths.is_empty());
    }

    #[test]
    fn test_list_messages_missing_dir() {
        let dir = TempDir::new().unwrap();
        let result = list_messages(dir.path().join("missing"));
        assert!(result.is_err());
    }
}
