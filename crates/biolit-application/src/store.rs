//! History and bookmark management.
//!
//! Two bounded collections of [`ResultRecord`]: a recency-ordered
//! history (capped, newest first) and an unordered bookmark set
//! (uncapped durable copies, not a view over history). Every mutation
//! synchronously rewrites the affected blob through the repository.
//!
//! Single-writer, single-reader, same thread; persistence failures are
//! logged and swallowed because the store holds cached state, not a
//! source of truth.

use biolit_core::repository::HistoryRepository;
use biolit_core::{AppMode, ResultRecord};
use uuid::Uuid;

/// The history/bookmark store, mirrored to persisted local storage.
pub struct ResearchStore {
    history: Vec<ResultRecord>,
    bookmarks: Vec<ResultRecord>,
    cap: usize,
    repository: Box<dyn HistoryRepository>,
}

impl ResearchStore {
    /// Loads both collections from the repository.
    ///
    /// Deserialization is defensive by repository contract: corrupt
    /// blobs come back empty. An over-long persisted history (e.g. the
    /// cap was lowered) is trimmed on load.
    pub fn load(repository: Box<dyn HistoryRepository>, cap: usize) -> Self {
        let mut history = repository.load_history();
        history.truncate(cap);
        let bookmarks = repository.load_bookmarks();
        Self {
            history,
            bookmarks,
            cap,
            repository,
        }
    }

    /// Inserts a record at the head of history, evicting past the cap.
    ///
    /// Never touches bookmarks; never fails from the caller's view.
    pub fn append(&mut self, record: ResultRecord) {
        self.history.insert(0, record);
        self.history.truncate(self.cap);
        self.persist_history();
    }

    /// Toggles bookmark membership for a record id.
    ///
    /// Removes the record if bookmarked; otherwise copies the matching
    /// history record into bookmarks with its flag set. Returns the
    /// membership after the toggle; an id found nowhere is a no-op.
    pub fn toggle_bookmark(&mut self, id: Uuid) -> bool {
        if let Some(pos) = self.bookmarks.iter().position(|r| r.id == id) {
            self.bookmarks.remove(pos);
            self.persist_bookmarks();
            return false;
        }
        if let Some(record) = self.history.iter().find(|r| r.id == id).cloned() {
            self.bookmarks.insert(0, record.bookmarked());
            self.persist_bookmarks();
            return true;
        }
        false
    }

    /// Toggles bookmark membership for the currently displayed record,
    /// which may already have been evicted from history.
    pub fn toggle_bookmark_record(&mut self, record: &ResultRecord) -> bool {
        if let Some(pos) = self.bookmarks.iter().position(|r| r.id == record.id) {
            self.bookmarks.remove(pos);
            self.persist_bookmarks();
            false
        } else {
            self.bookmarks.insert(0, record.bookmarked());
            self.persist_bookmarks();
            true
        }
    }

    /// Removes a record from the bookmark set.
    pub fn remove_bookmark(&mut self, id: Uuid) {
        let before = self.bookmarks.len();
        self.bookmarks.retain(|r| r.id != id);
        if self.bookmarks.len() != before {
            self.persist_bookmarks();
        }
    }

    /// Empties the history list.
    ///
    /// Bookmarks are durable copies and are never reduced by this.
    pub fn clear_history(&mut self) {
        self.history.clear();
        self.persist_history();
    }

    /// Read-side projection of history by mode; `None` means all.
    pub fn filter_by_mode(&self, mode: Option<AppMode>) -> Vec<&ResultRecord> {
        match mode {
            None => self.history.iter().collect(),
            Some(mode) => self.history.iter().filter(|r| r.mode == mode).collect(),
        }
    }

    /// Finds a record by id, bookmarks first, then history.
    pub fn find(&self, id: Uuid) -> Option<&ResultRecord> {
        self.bookmarks
            .iter()
            .find(|r| r.id == id)
            .or_else(|| self.history.iter().find(|r| r.id == id))
    }

    pub fn is_bookmarked(&self, id: Uuid) -> bool {
        self.bookmarks.iter().any(|r| r.id == id)
    }

    pub fn history(&self) -> &[ResultRecord] {
        &self.history
    }

    pub fn bookmarks(&self) -> &[ResultRecord] {
        &self.bookmarks
    }

    pub fn cap(&self) -> usize {
        self.cap
    }

    fn persist_history(&self) {
        if let Err(err) = self.repository.save_history(&self.history) {
            tracing::warn!(error = %err, "failed to persist history");
        }
    }

    fn persist_bookmarks(&self) {
        if let Err(err) = self.repository.save_bookmarks(&self.bookmarks) {
            tracing::warn!(error = %err, "failed to persist bookmarks");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biolit_core::BiolitError;
    use std::sync::Mutex;

    /// In-memory repository standing in for the file-backed one.
    #[derive(Default)]
    struct MemoryRepository {
        history: Mutex<Vec<ResultRecord>>,
        bookmarks: Mutex<Vec<ResultRecord>>,
    }

    impl HistoryRepository for MemoryRepository {
        fn load_history(&self) -> Vec<ResultRecord> {
            self.history.lock().unwrap().clone()
        }
        fn save_history(&self, records: &[ResultRecord]) -> Result<(), BiolitError> {
            *self.history.lock().unwrap() = records.to_vec();
            Ok(())
        }
        fn load_bookmarks(&self) -> Vec<ResultRecord> {
            self.bookmarks.lock().unwrap().clone()
        }
        fn save_bookmarks(&self, records: &[ResultRecord]) -> Result<(), BiolitError> {
            *self.bookmarks.lock().unwrap() = records.to_vec();
            Ok(())
        }
    }

    fn store(cap: usize) -> ResearchStore {
        ResearchStore::load(Box::new(MemoryRepository::default()), cap)
    }

    fn record(query: &str) -> ResultRecord {
        ResultRecord::new(AppMode::QueryBuilder, query, "content", None)
    }

    #[test]
    fn history_never_exceeds_cap_and_stays_newest_first() {
        let mut store = store(3);
        for i in 0..10 {
            store.append(record(&format!("q{i}")));
            assert!(store.history().len() <= 3);
        }
        let queries: Vec<&str> = store
            .history()
            .iter()
            .map(|r| r.original_query.as_str())
            .collect();
        assert_eq!(queries, vec!["q9", "q8", "q7"]);
    }

    #[test]
    fn toggle_twice_restores_membership() {
        let mut store = store(10);
        let rec = record("a");
        let id = rec.id;
        store.append(rec);

        assert!(store.toggle_bookmark(id));
        assert!(store.is_bookmarked(id));
        assert!(!store.toggle_bookmark(id));
        assert!(!store.is_bookmarked(id));
        assert!(store.bookmarks().is_empty());
    }

    #[test]
    fn toggle_unknown_id_is_a_noop() {
        let mut store = store(10);
        assert!(!store.toggle_bookmark(Uuid::new_v4()));
        assert!(store.bookmarks().is_empty());
    }

    #[test]
    fn clear_history_preserves_bookmarks() {
        let mut store = store(10);
        let rec = record("keep me");
        let id = rec.id;
        store.append(rec);
        store.append(record("other"));
        store.toggle_bookmark(id);

        store.clear_history();

        assert!(store.history().is_empty());
        assert_eq!(store.bookmarks().len(), 1);
        assert!(store.is_bookmarked(id));
    }

    #[test]
    fn eviction_with_cap_two_keeps_bookmarked_copy() {
        // Cap 2, append A, B, C: history is [C, B], A evicted but its
        // prior bookmark survives.
        let mut store = store(2);
        let a = record("A");
        let a_id = a.id;
        store.append(a);
        store.toggle_bookmark(a_id);
        store.append(record("B"));
        store.append(record("C"));

        let queries: Vec<&str> = store
            .history()
            .iter()
            .map(|r| r.original_query.as_str())
            .collect();
        assert_eq!(queries, vec!["C", "B"]);
        assert!(store.is_bookmarked(a_id));
        assert_eq!(store.bookmarks()[0].original_query, "A");
    }

    #[test]
    fn filter_all_is_identity() {
        let mut store = store(10);
        store.append(record("a"));
        store.append(ResultRecord::new(AppMode::LabScout, "b", "c", None));

        let all = store.filter_by_mode(None);
        assert_eq!(all.len(), store.history().len());
        for (filtered, original) in all.iter().zip(store.history()) {
            assert_eq!(*filtered, original);
        }
    }

    #[test]
    fn filter_by_mode_projects_without_mutating() {
        let mut store = store(10);
        store.append(record("a"));
        store.append(ResultRecord::new(AppMode::LabScout, "b", "c", None));

        let scouts = store.filter_by_mode(Some(AppMode::LabScout));
        assert_eq!(scouts.len(), 1);
        assert_eq!(scouts[0].original_query, "b");
        assert_eq!(store.history().len(), 2);
    }

    #[test]
    fn bookmark_copy_survives_as_separate_record() {
        let mut store = store(10);
        let rec = record("a");
        let id = rec.id;
        store.append(rec);
        store.toggle_bookmark(id);

        // History copy stays unflagged; the bookmark copy carries the flag
        assert!(!store.history()[0].is_bookmarked);
        assert!(store.bookmarks()[0].is_bookmarked);
    }

    #[test]
    fn toggle_record_works_for_evicted_records() {
        let mut store = store(1);
        let a = record("A");
        store.append(a.clone());
        store.append(record("B")); // A evicted

        assert!(store.toggle_bookmark_record(&a));
        assert!(store.is_bookmarked(a.id));
        assert!(!store.toggle_bookmark_record(&a));
        assert!(!store.is_bookmarked(a.id));
    }

    #[test]
    fn mutations_round_trip_through_a_real_repository() {
        let dir = tempfile::TempDir::new().unwrap();
        let repo = biolit_infrastructure::JsonHistoryRepository::at_dir(dir.path());
        let mut store = ResearchStore::load(Box::new(repo), 5);
        let rec = record("persisted");
        let id = rec.id;
        store.append(rec);
        store.toggle_bookmark(id);

        // A fresh store over the same directory sees both collections
        let repo = biolit_infrastructure::JsonHistoryRepository::at_dir(dir.path());
        let reloaded = ResearchStore::load(Box::new(repo), 5);
        assert_eq!(reloaded.history().len(), 1);
        assert!(reloaded.is_bookmarked(id));
    }
}
