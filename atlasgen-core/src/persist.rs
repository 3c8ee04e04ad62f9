//! Whole-file writes: an artifact either appears complete or not at all.

use crate::error::{AtlasError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Sibling path used while an artifact is being written.
pub(crate) fn staging_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}

pub(crate) fn ensure_parent(path: &Path) -> Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => {
            fs::create_dir_all(dir).map_err(|e| AtlasError::io(dir, e))
        }
        _ => Ok(()),
    }
}

/// Move a finished staging file over `path`.
pub(crate) fn commit(staging: &Path, path: &Path) -> Result<()> {
    fs::rename(staging, path).map_err(|e| {
        let _ = fs::remove_file(staging);
        AtlasError::io(path, e)
    })
}

/// Create parent directories, write `bytes` to a staging file, then rename it
/// over `path`.
pub fn write_atomic(path: impl AsRef<Path>, bytes: &[u8]) -> Result<()> {
    let path = path.as_ref();
    ensure_parent(path)?;
    let staging = staging_path(path);
    fs::write(&staging, bytes).map_err(|e| AtlasError::io(&staging, e))?;
    commit(&staging, path)?;
    log::info!("wrote {} ({} bytes)", path.display(), bytes.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_directories_and_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("assets/nested/atlas.png");
        write_atomic(&target, b"abc").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"abc");
        assert!(!staging_path(&target).exists());
    }

    #[test]
    fn overwrites_existing_artifact() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("atlas.png");
        write_atomic(&target, b"first").unwrap();
        write_atomic(&target, b"second").unwrap();
        assert_eq!(fs::read(&target).unwrap(), b"second");
    }

    #[test]
    fn unwritable_location_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        fs::write(&blocker, b"x").unwrap();
        // parent "directory" is a regular file
        let err = write_atomic(blocker.join("atlas.png"), b"abc").unwrap_err();
        assert!(matches!(err, AtlasError::Io { .. }));
    }

    #[test]
    fn staging_path_is_a_sibling() {
        let p = Path::new("assets/atlas.png");
        assert_eq!(staging_path(p), Path::new("assets/atlas.png.partial"));
    }
}
