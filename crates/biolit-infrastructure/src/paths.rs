//! Unified path management for BioLit configuration files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/biolit/            # Config directory
//! ├── config.toml              # Application configuration
//! ├── secret.json              # API keys
//! ├── history.json             # Recency-ordered result history
//! ├── bookmarks.json           # Durable bookmark copies
//! └── profile.json             # User profile
//! ```

use biolit_core::BiolitError;
use std::path::PathBuf;

/// Unified path management for BioLit.
pub struct BiolitPaths;

impl BiolitPaths {
    /// Returns the BioLit configuration directory.
    ///
    /// Uses the platform config directory (`~/.config/biolit/` on XDG
    /// platforms). The directory is not created here.
    pub fn config_dir() -> Result<PathBuf, BiolitError> {
        dirs::config_dir()
            .map(|dir| dir.join("biolit"))
            .ok_or_else(|| BiolitError::config("Cannot find home directory"))
    }

    /// Path to `config.toml`.
    pub fn config_file() -> Result<PathBuf, BiolitError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Path to `secret.json`.
    pub fn secret_file() -> Result<PathBuf, BiolitError> {
        Ok(Self::config_dir()?.join("secret.json"))
    }

    /// Path to the history blob.
    pub fn history_file() -> Result<PathBuf, BiolitError> {
        Ok(Self::config_dir()?.join("history.json"))
    }

    /// Path to the bookmark blob.
    pub fn bookmarks_file() -> Result<PathBuf, BiolitError> {
        Ok(Self::config_dir()?.join("bookmarks.json"))
    }

    /// Path to the profile blob.
    pub fn profile_file() -> Result<PathBuf, BiolitError> {
        Ok(Self::config_dir()?.join("profile.json"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_live_under_the_config_dir() {
        // dirs resolves a home in test environments on all supported platforms
        let dir = BiolitPaths::config_dir().unwrap();
        assert!(BiolitPaths::history_file().unwrap().starts_with(&dir));
        assert!(BiolitPaths::secret_file().unwrap().ends_with("secret.json"));
    }
}
