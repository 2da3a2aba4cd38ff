//! JSON blob storage with atomic writes.
//!
//! Provides the durable layer under the history, bookmark, and profile
//! repositories. One storage handle owns one file.
//!
//! Provides:
//! - **Atomicity**: updates are all-or-nothing via tmp file + atomic rename
//! - **Isolation**: an exclusive advisory lock guards writers
//! - **Durability**: explicit fsync before rename
//!
//! Does NOT:
//! - Know about specific entities (records, profiles)
//! - Decide what happens on parse failure (delegated to the repositories)

use biolit_core::BiolitError;
use serde_json::Value as JsonValue;
use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::path::{Path, PathBuf};

/// A JSON blob file with atomic write semantics.
pub struct JsonStorage {
    path: PathBuf,
}

impl JsonStorage {
    /// Creates a new storage handle for the given file.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the blob as a `serde_json::Value`.
    ///
    /// Returns `Ok(None)` when the file is missing or empty. A read or
    /// parse failure is an error here; the repository layer decides
    /// whether to degrade.
    pub fn load(&self) -> Result<Option<JsonValue>, BiolitError> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let value = serde_json::from_str(&content)?;
        Ok(Some(value))
    }

    /// Saves the blob atomically.
    ///
    /// Writes to a dot-prefixed tmp file in the same directory, fsyncs,
    /// then renames over the target. An exclusive lock is held for the
    /// duration of the write.
    pub fn save(&self, data: &JsonValue) -> Result<(), BiolitError> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let _lock = FileLock::acquire(&self.path)?;

        let serialized = serde_json::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(serialized.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Removes the blob file. Missing files are not an error.
    pub fn remove(&self) -> Result<(), BiolitError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn temp_path(&self) -> Result<PathBuf, BiolitError> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| BiolitError::io("Path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| BiolitError::io("Path has no file name"))?;
        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }
}

/// A file lock guard that releases the lock when dropped.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self, BiolitError> {
        let lock_path = path.with_extension("lock");

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| BiolitError::io(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock is automatic when the file handle is dropped
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(temp_dir.path().join("blob.json"));

        let data = serde_json::json!({ "name": "test", "count": 42 });
        storage.save(&data).unwrap();

        let loaded = storage.load().unwrap().unwrap();
        assert_eq!(loaded["name"], "test");
        assert_eq!(loaded["count"], 42);
    }

    #[test]
    fn load_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(temp_dir.path().join("nope.json"));
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn load_empty_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.json");
        fs::write(&path, "   ").unwrap();
        let storage = JsonStorage::new(path);
        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn load_corrupt_file_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.json");
        fs::write(&path, "not-json{{{").unwrap();
        let storage = JsonStorage::new(path);
        assert!(storage.load().is_err());
    }

    #[test]
    fn no_temp_or_lock_files_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("blob.json");
        let storage = JsonStorage::new(path.clone());

        storage.save(&serde_json::json!([1, 2, 3])).unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join(".blob.json.tmp").exists());
        assert!(!temp_dir.path().join("blob.lock").exists());
    }

    #[test]
    fn remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let storage = JsonStorage::new(temp_dir.path().join("blob.json"));
        storage.save(&serde_json::json!({})).unwrap();
        storage.remove().unwrap();
        storage.remove().unwrap();
        assert!(storage.load().unwrap().is_none());
    }
}
