use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::kv::KvStore;

/// File-backed store: one file per key under a root directory.
///
/// Writes go to a temp file then rename, so a crash mid-write never leaves
/// a truncated value behind.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        if key.is_empty() || key.contains(['/', '\\', '.']) {
            return Err(StorageError::InvalidKey {
                key: key.to_string(),
            });
        }
        Ok(self.root.join(format!("{key}.json")))
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Read(e)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.root).map_err(StorageError::Write)?;

        // Write to a temp file then rename for atomicity
        let tmp_path = path.with_extension("json.tmp");
        std::fs::write(&tmp_path, value.as_bytes()).map_err(StorageError::Write)?;
        set_private(&tmp_path)?;
        std::fs::rename(&tmp_path, &path).map_err(StorageError::Write)?;

        tracing::debug!(path = %path.display(), "value flushed to disk");
        Ok(())
    }
}

// The store holds usage records keyed by credential ids; keep files
// owner-readable only.
#[cfg(unix)]
fn set_private(path: &Path) -> Result<(), StorageError> {
    use std::os::unix::fs::PermissionsExt;
    std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
        .map_err(StorageError::Write)
}

#[cfg(not(unix))]
fn set_private(_path: &Path) -> Result<(), StorageError> {
    Ok(())
}
