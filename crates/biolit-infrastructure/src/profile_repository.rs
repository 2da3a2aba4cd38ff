//! File-backed user profile persistence.

use crate::json_storage::JsonStorage;
use crate::paths::BiolitPaths;
use biolit_core::repository::ProfileRepository;
use biolit_core::{BiolitError, UserProfile};
use std::path::Path;

/// Profile repository over a single [`JsonStorage`] blob.
pub struct JsonProfileRepository {
    storage: JsonStorage,
}

impl JsonProfileRepository {
    /// Repository at the default platform path.
    pub fn new() -> Result<Self, BiolitError> {
        Ok(Self {
            storage: JsonStorage::new(BiolitPaths::profile_file()?),
        })
    }

    /// Repository rooted at a custom directory (for testing).
    pub fn at_dir(dir: &Path) -> Self {
        Self {
            storage: JsonStorage::new(dir.join("profile.json")),
        }
    }
}

impl ProfileRepository for JsonProfileRepository {
    fn load(&self) -> Option<UserProfile> {
        let value = match self.storage.load() {
            Ok(Some(value)) => value,
            Ok(None) => return None,
            Err(err) => {
                tracing::warn!(error = %err, "discarding unreadable profile blob");
                return None;
            }
        };

        match serde_json::from_value(value) {
            Ok(profile) => Some(profile),
            Err(err) => {
                tracing::warn!(error = %err, "discarding malformed profile blob");
                None
            }
        }
    }

    fn save(&self, profile: &UserProfile) -> Result<(), BiolitError> {
        let value = serde_json::to_value(profile)?;
        self.storage.save(&value)
    }

    fn clear(&self) -> Result<(), BiolitError> {
        self.storage.remove()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn profile() -> UserProfile {
        UserProfile {
            email: "researcher@lab.edu".into(),
            field_of_study: "Biomaterials".into(),
            institution: "KAIST".into(),
            level: "Postdoc".into(),
            research_interests: "3D bioprinting".into(),
        }
    }

    #[test]
    fn save_load_clear() {
        let temp_dir = TempDir::new().unwrap();
        let repo = JsonProfileRepository::at_dir(temp_dir.path());

        assert!(repo.load().is_none());
        repo.save(&profile()).unwrap();
        assert_eq!(repo.load(), Some(profile()));
        repo.clear().unwrap();
        assert!(repo.load().is_none());
    }

    #[test]
    fn corrupt_profile_loads_none() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("profile.json"), "<html>").unwrap();
        let repo = JsonProfileRepository::at_dir(temp_dir.path());
        assert!(repo.load().is_none());
    }
}
