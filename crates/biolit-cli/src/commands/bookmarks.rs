//! Bookmark management.

use anyhow::Result;
use biolit_core::BiolitError;
use colored::Colorize;

pub fn list() -> Result<()> {
    let config = super::load_config();
    let store = super::open_store(&config)?;
    if store.bookmarks().is_empty() {
        println!("{}", "No bookmarks yet.".dimmed());
        return Ok(());
    }
    for record in store.bookmarks() {
        super::history::print_line(record, true);
    }
    Ok(())
}

pub fn toggle(id: &str) -> Result<()> {
    let config = super::load_config();
    let mut store = super::open_store(&config)?;
    let id = super::parse_id(&store, id)?;
    if store.find(id).is_none() {
        return Err(BiolitError::not_found("result", id.to_string()).into());
    }
    if store.toggle_bookmark(id) {
        println!("Bookmarked {id}.");
    } else {
        println!("Removed bookmark {id}.");
    }
    Ok(())
}

pub fn remove(id: &str) -> Result<()> {
    let config = super::load_config();
    let mut store = super::open_store(&config)?;
    let id = super::parse_id(&store, id)?;
    store.remove_bookmark(id);
    println!("Removed bookmark {id}.");
    Ok(())
}
