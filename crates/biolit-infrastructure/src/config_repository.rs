//! Application config loading (`config.toml`).

use crate::paths::BiolitPaths;
use biolit_core::config::AppConfig;
use biolit_core::repository::ConfigRepository;
use std::fs;
use std::path::PathBuf;

/// Read-only TOML config loader.
///
/// Missing or malformed files fall back to the default configuration;
/// the config is a convenience layer, not required state.
pub struct TomlConfigRepository {
    path: Option<PathBuf>,
}

impl TomlConfigRepository {
    /// Loader for the default platform path.
    ///
    /// An unresolvable home directory just means defaults.
    pub fn new() -> Self {
        Self {
            path: BiolitPaths::config_file().ok(),
        }
    }

    /// Loader for a custom path (for testing).
    pub fn with_path(path: PathBuf) -> Self {
        Self { path: Some(path) }
    }
}

impl Default for TomlConfigRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigRepository for TomlConfigRepository {
    fn load(&self) -> AppConfig {
        let Some(path) = &self.path else {
            return AppConfig::default();
        };
        if !path.exists() {
            return AppConfig::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!(error = %err, "failed to read config.toml, using defaults");
                return AppConfig::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(error = %err, "failed to parse config.toml, using defaults");
                AppConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let repo = TomlConfigRepository::with_path(temp_dir.path().join("config.toml"));
        assert_eq!(repo.load(), AppConfig::default());
    }

    #[test]
    fn loads_overrides() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "history_cap = 5\nflash_model = \"my-flash\"").unwrap();
        let config = TomlConfigRepository::with_path(path).load();
        assert_eq!(config.history_cap, 5);
        assert_eq!(config.flash_model, "my-flash");
    }

    #[test]
    fn malformed_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "history_cap = [not toml").unwrap();
        assert_eq!(TomlConfigRepository::with_path(path).load(), AppConfig::default());
    }
}
