//! Repository traits implemented by the infrastructure crate.
//!
//! All persistence in BioLit is single-writer, single-reader, same
//! thread: three independently keyed blobs (history, bookmarks, profile)
//! rewritten in full on every mutation. Loads are infallible by
//! contract: a corrupt blob yields the empty collection rather than an
//! error, because the persisted data is cached state, not a source of
//! truth.

use crate::config::AppConfig;
use crate::error::BiolitError;
use crate::profile::UserProfile;
use crate::result::ResultRecord;

/// Persistence for the history list and the bookmark set.
pub trait HistoryRepository: Send + Sync {
    /// Loads the history list; a missing or corrupt blob is empty.
    fn load_history(&self) -> Vec<ResultRecord>;

    /// Rewrites the history blob.
    fn save_history(&self, records: &[ResultRecord]) -> Result<(), BiolitError>;

    /// Loads the bookmark set; a missing or corrupt blob is empty.
    fn load_bookmarks(&self) -> Vec<ResultRecord>;

    /// Rewrites the bookmark blob.
    fn save_bookmarks(&self, records: &[ResultRecord]) -> Result<(), BiolitError>;
}

/// Persistence for the user profile.
pub trait ProfileRepository: Send + Sync {
    /// Loads the profile; a missing or corrupt blob is `None`.
    fn load(&self) -> Option<UserProfile>;

    /// Rewrites the profile blob.
    fn save(&self, profile: &UserProfile) -> Result<(), BiolitError>;

    /// Deletes the persisted profile.
    fn clear(&self) -> Result<(), BiolitError>;
}

/// Read-only access to the application configuration.
pub trait ConfigRepository: Send + Sync {
    /// Loads `config.toml`; a missing or corrupt file is the default config.
    fn load(&self) -> AppConfig;
}
