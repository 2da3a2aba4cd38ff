//! File-backed persistence for BioLit.
//!
//! Three independently keyed JSON blobs (history, bookmarks, profile)
//! plus a TOML application config and a JSON secret file, all under the
//! platform config directory. Writes are atomic (tmp file + rename);
//! loads degrade silently to the empty collection on corruption.

pub mod config_repository;
pub mod history_repository;
pub mod json_storage;
pub mod paths;
pub mod profile_repository;
pub mod secret_storage;

pub use config_repository::TomlConfigRepository;
pub use history_repository::JsonHistoryRepository;
pub use json_storage::JsonStorage;
pub use paths::BiolitPaths;
pub use profile_repository::JsonProfileRepository;
pub use secret_storage::SecretStorage;
