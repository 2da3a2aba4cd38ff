//! Subcommand implementations.

pub mod ask;
pub mod bookmarks;
pub mod history;
pub mod modes;
pub mod profile;
pub mod repl;

use std::str::FromStr;

use anyhow::{bail, Context, Result};
use biolit_application::ResearchStore;
use biolit_core::config::AppConfig;
use biolit_core::repository::ConfigRepository;
use biolit_core::AppMode;
use biolit_infrastructure::{JsonHistoryRepository, SecretStorage, TomlConfigRepository};
use biolit_interaction::ResearchGateway;
use uuid::Uuid;

/// Loads the application config from the default path.
pub fn load_config() -> AppConfig {
    TomlConfigRepository::new().load()
}

/// Opens the history/bookmark store at the default path.
pub fn open_store(config: &AppConfig) -> Result<ResearchStore> {
    let repository = JsonHistoryRepository::new().context("locating the data directory")?;
    Ok(ResearchStore::load(Box::new(repository), config.history_cap))
}

/// Builds the model gateway from the stored or environment credentials.
pub fn build_gateway(config: &AppConfig) -> Result<ResearchGateway> {
    let api_key = SecretStorage::new()?
        .api_key()
        .context("no Gemini API key; set GEMINI_API_KEY or add it to secret.json")?;
    Ok(ResearchGateway::new(api_key, config.clone()))
}

/// Parses a mode tag, listing valid tags on failure.
pub fn parse_mode(tag: &str) -> Result<AppMode> {
    match AppMode::from_str(tag) {
        Ok(mode) => Ok(mode),
        Err(_) => bail!("unknown mode '{tag}', run `biolit modes` for the list"),
    }
}

/// Parses a record id, accepting an unambiguous prefix of a known id.
pub fn parse_id(store: &ResearchStore, input: &str) -> Result<Uuid> {
    if let Ok(id) = Uuid::from_str(input) {
        return Ok(id);
    }
    let mut matches: Vec<Uuid> = store
        .history()
        .iter()
        .chain(store.bookmarks().iter())
        .map(|r| r.id)
        .filter(|id| id.to_string().starts_with(input))
        .collect();
    // A record can sit in both lists under the same id
    matches.sort();
    matches.dedup();
    match matches.as_slice() {
        [id] => Ok(*id),
        [] => bail!("no record matches id '{input}'"),
        _ => bail!("id prefix '{input}' is ambiguous"),
    }
}
