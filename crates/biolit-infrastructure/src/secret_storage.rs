//! Secret configuration loading (`secret.json`).
//!
//! Read-only. The `GEMINI_API_KEY` environment variable takes precedence
//! over the file; a key found in neither place is the distinguished
//! missing-credentials failure.
//!
//! # Security Note
//!
//! `secret.json` is plaintext; it should carry restrictive permissions
//! (e.g. 600).

use crate::paths::BiolitPaths;
use biolit_core::config::SecretConfig;
use biolit_core::BiolitError;
use std::fs;
use std::path::PathBuf;

/// Environment variable consulted before `secret.json`.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

/// Storage for the secret configuration file.
pub struct SecretStorage {
    path: PathBuf,
}

impl SecretStorage {
    /// Storage at the default platform path.
    pub fn new() -> Result<Self, BiolitError> {
        Ok(Self {
            path: BiolitPaths::secret_file()?,
        })
    }

    /// Storage at a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Loads and parses `secret.json`; a missing file is an empty config.
    pub fn load(&self) -> Result<SecretConfig, BiolitError> {
        if !self.path.exists() {
            return Ok(SecretConfig::default());
        }
        let content = fs::read_to_string(&self.path)?;
        let config = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Resolves the Gemini API key from the environment or the file.
    pub fn api_key(&self) -> Result<String, BiolitError> {
        let env_key = std::env::var(API_KEY_ENV).ok();
        self.resolve_api_key(env_key)
    }

    fn resolve_api_key(&self, env_key: Option<String>) -> Result<String, BiolitError> {
        if let Some(key) = env_key {
            if !key.trim().is_empty() {
                return Ok(key);
            }
        }

        self.load()?
            .gemini
            .map(|g| g.api_key)
            .filter(|key| !key.trim().is_empty())
            .ok_or(BiolitError::MissingCredentials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn env_key_takes_precedence() {
        let temp_dir = TempDir::new().unwrap();
        let storage = SecretStorage::with_path(temp_dir.path().join("secret.json"));
        let key = storage.resolve_api_key(Some("env-key".into())).unwrap();
        assert_eq!(key, "env-key");
    }

    #[test]
    fn falls_back_to_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("secret.json");
        fs::write(&path, r#"{"gemini": {"api_key": "file-key"}}"#).unwrap();
        let storage = SecretStorage::with_path(path);
        assert_eq!(storage.resolve_api_key(None).unwrap(), "file-key");
    }

    #[test]
    fn missing_everywhere_is_missing_credentials() {
        let temp_dir = TempDir::new().unwrap();
        let storage = SecretStorage::with_path(temp_dir.path().join("secret.json"));
        let err = storage.resolve_api_key(None).unwrap_err();
        assert!(err.is_missing_credentials());
    }

    #[test]
    fn blank_keys_do_not_count() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("secret.json");
        fs::write(&path, r#"{"gemini": {"api_key": "  "}}"#).unwrap();
        let storage = SecretStorage::with_path(path);
        let err = storage.resolve_api_key(Some("  ".into())).unwrap_err();
        assert!(err.is_missing_credentials());
    }
}
