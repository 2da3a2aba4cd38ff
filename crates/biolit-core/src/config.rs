//! Application and secret configuration models.

use crate::mode::{AppMode, ModelTier};
use serde::{Deserialize, Serialize};

/// Default number of history records retained.
pub const DEFAULT_HISTORY_CAP: usize = 50;

/// Default model names per tier.
pub const DEFAULT_FLASH_MODEL: &str = "gemini-3-flash-preview";
pub const DEFAULT_PRO_MODEL: &str = "gemini-3-pro-preview";

/// Thinking budget attached to pro-tier requests.
pub const THINKING_BUDGET: u32 = 32_768;

/// Application configuration loaded from `config.toml`.
///
/// Every field has a default; a missing file means a default config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Most-recent-N cap on the history list.
    pub history_cap: usize,
    /// Model used for flash-tier modes.
    pub flash_model: String,
    /// Model used for pro-tier (thinking) modes.
    pub pro_model: String,
    /// Mode the interactive shell starts in.
    pub default_mode: AppMode,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_cap: DEFAULT_HISTORY_CAP,
            flash_model: DEFAULT_FLASH_MODEL.to_string(),
            pro_model: DEFAULT_PRO_MODEL.to_string(),
            default_mode: AppMode::QueryBuilder,
        }
    }
}

impl AppConfig {
    /// Resolves the model name for a tier.
    pub fn model_for(&self, tier: ModelTier) -> &str {
        match tier {
            ModelTier::Flash => &self.flash_model,
            ModelTier::ProThinking => &self.pro_model,
        }
    }
}

/// Secret configuration loaded from `secret.json`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SecretConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gemini: Option<GeminiSecret>,
}

/// Gemini credentials section of `secret.json`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeminiSecret {
    pub api_key: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = AppConfig::default();
        assert_eq!(config.history_cap, 50);
        assert_eq!(config.model_for(ModelTier::Flash), DEFAULT_FLASH_MODEL);
        assert_eq!(config.model_for(ModelTier::ProThinking), DEFAULT_PRO_MODEL);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str("history_cap = 10").unwrap();
        assert_eq!(config.history_cap, 10);
        assert_eq!(config.flash_model, DEFAULT_FLASH_MODEL);
        assert_eq!(config.default_mode, AppMode::QueryBuilder);
    }

    #[test]
    fn secret_without_gemini_section() {
        let secret: SecretConfig = serde_json::from_str("{}").unwrap();
        assert!(secret.gemini.is_none());
    }
}
