//! File-backed history and bookmark persistence.
//!
//! Two blobs: `history.json` (recency-ordered, capped upstream) and
//! `bookmarks.json` (unordered durable copies). Loads follow the
//! silent-degrade policy: any read or parse failure yields an empty
//! collection, with a warning in the log. The persisted data is cached
//! state, never a source of truth.

use crate::json_storage::JsonStorage;
use crate::paths::BiolitPaths;
use biolit_core::repository::HistoryRepository;
use biolit_core::{BiolitError, ResultRecord};
use std::path::Path;

/// History/bookmark repository over two [`JsonStorage`] blobs.
pub struct JsonHistoryRepository {
    history: JsonStorage,
    bookmarks: JsonStorage,
}

impl JsonHistoryRepository {
    /// Repository at the default platform paths.
    pub fn new() -> Result<Self, BiolitError> {
        Ok(Self {
            history: JsonStorage::new(BiolitPaths::history_file()?),
            bookmarks: JsonStorage::new(BiolitPaths::bookmarks_file()?),
        })
    }

    /// Repository rooted at a custom directory (for testing).
    pub fn at_dir(dir: &Path) -> Self {
        Self {
            history: JsonStorage::new(dir.join("history.json")),
            bookmarks: JsonStorage::new(dir.join("bookmarks.json")),
        }
    }

    fn load_records(storage: &JsonStorage, name: &str) -> Vec<ResultRecord> {
        let value = match storage.load() {
            Ok(Some(value)) => value,
            Ok(None) => return Vec::new(),
            Err(err) => {
                tracing::warn!(blob = name, error = %err, "discarding unreadable blob");
                return Vec::new();
            }
        };

        match serde_json::from_value(value) {
            Ok(records) => records,
            Err(err) => {
                tracing::warn!(blob = name, error = %err, "discarding malformed blob");
                Vec::new()
            }
        }
    }

    fn save_records(storage: &JsonStorage, records: &[ResultRecord]) -> Result<(), BiolitError> {
        let value = serde_json::to_value(records)?;
        storage.save(&value)
    }
}

impl HistoryRepository for JsonHistoryRepository {
    fn load_history(&self) -> Vec<ResultRecord> {
        Self::load_records(&self.history, "history")
    }

    fn save_history(&self, records: &[ResultRecord]) -> Result<(), BiolitError> {
        Self::save_records(&self.history, records)
    }

    fn load_bookmarks(&self) -> Vec<ResultRecord> {
        Self::load_records(&self.bookmarks, "bookmarks")
    }

    fn save_bookmarks(&self, records: &[ResultRecord]) -> Result<(), BiolitError> {
        Self::save_records(&self.bookmarks, records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biolit_core::AppMode;
    use std::fs;
    use tempfile::TempDir;

    fn record(query: &str) -> ResultRecord {
        ResultRecord::new(AppMode::QueryBuilder, query, "content", None)
    }

    #[test]
    fn round_trips_both_collections() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonHistoryRepository::at_dir(temp_dir.path());

        let history = vec![record("a"), record("b")];
        let bookmarks = vec![record("c").bookmarked()];
        repo.save_history(&history).unwrap();
        repo.save_bookmarks(&bookmarks).unwrap();

        assert_eq!(repo.load_history(), history);
        assert_eq!(repo.load_bookmarks(), bookmarks);
    }

    #[test]
    fn missing_blobs_load_empty() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonHistoryRepository::at_dir(temp_dir.path());
        assert!(repo.load_history().is_empty());
        assert!(repo.load_bookmarks().is_empty());
    }

    #[test]
    fn corrupt_blob_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("history.json"), "not json at all").unwrap();
        // Valid JSON of the wrong shape degrades too
        fs::write(temp_dir.path().join("bookmarks.json"), "{\"a\": 1}").unwrap();

        let repo = JsonHistoryRepository::at_dir(temp_dir.path());
        assert!(repo.load_history().is_empty());
        assert!(repo.load_bookmarks().is_empty());
    }
}
