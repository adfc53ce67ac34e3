//! JSON blob storage rooted in a `cap-std` directory handle.

use async_trait::async_trait;
use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use std::sync::Arc;

use crate::task::{
    domain::Task,
    ports::{TaskStorage, TaskStorageError, TaskStorageResult},
};

/// Key used when none is configured; the blob is written to `tasks.json`.
pub const DEFAULT_STORAGE_KEY: &str = "tasks";

/// Task storage that keeps the whole collection in one JSON file.
///
/// Writes land in a temporary sibling first and are renamed into place, so
/// readers never observe a half-written blob.
#[derive(Debug, Clone)]
pub struct FileTaskStorage {
    dir: Arc<Dir>,
    file_name: String,
    temp_name: String,
}

impl FileTaskStorage {
    /// Wraps an already opened directory.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError::Io`] with [`io::ErrorKind::InvalidInput`]
    /// when `key` is empty or contains a path separator.
    pub fn new(dir: Dir, key: &str) -> TaskStorageResult<Self> {
        let trimmed = key.trim();
        if trimmed.is_empty() || trimmed.contains(['/', '\\']) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("invalid storage key '{key}'"),
            )
            .into());
        }
        Ok(Self {
            dir: Arc::new(dir),
            file_name: format!("{trimmed}.json"),
            temp_name: format!(".{trimmed}.json.tmp"),
        })
    }

    /// Opens an existing directory at `path` using ambient authority.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStorageError::Io`] when the directory cannot be opened
    /// or the key is invalid.
    pub fn open(path: &Utf8Path, key: &str) -> TaskStorageResult<Self> {
        let dir = Dir::open_ambient_dir(path, ambient_authority())?;
        Self::new(dir, key)
    }

    /// Returns the blob file name inside the directory.
    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

/// Runs a blocking filesystem operation off the async executor.
async fn run_blocking<F, T>(f: F) -> TaskStorageResult<T>
where
    F: FnOnce() -> TaskStorageResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(TaskStorageError::persistence)?
}

#[async_trait]
impl TaskStorage for FileTaskStorage {
    async fn load(&self) -> TaskStorageResult<Vec<Task>> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        run_blocking(move || {
            let raw = match dir.read_to_string(&file_name) {
                Ok(raw) => raw,
                Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
                Err(err) => return Err(err.into()),
            };
            if raw.trim().is_empty() {
                return Ok(Vec::new());
            }
            Ok(serde_json::from_str(&raw)?)
        })
        .await
    }

    async fn save(&self, tasks: &[Task]) -> TaskStorageResult<()> {
        let encoded = serde_json::to_string(tasks)?;
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        let temp_name = self.temp_name.clone();
        run_blocking(move || {
            dir.write(&temp_name, encoded.as_bytes())?;
            dir.rename(&temp_name, &dir, &file_name)?;
            Ok(())
        })
        .await
    }

    async fn clear(&self) -> TaskStorageResult<()> {
        let dir = Arc::clone(&self.dir);
        let file_name = self.file_name.clone();
        run_blocking(move || match dir.remove_file(&file_name) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        })
        .await
    }
}
