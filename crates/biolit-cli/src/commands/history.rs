//! History inspection and clearing.

use anyhow::Result;
use biolit_application::render;
use biolit_core::{BiolitError, ResultRecord};
use colored::Colorize;

pub fn list(mode_tag: Option<&str>) -> Result<()> {
    let config = super::load_config();
    let store = super::open_store(&config)?;
    let filter = mode_tag.map(super::parse_mode).transpose()?;

    let records = store.filter_by_mode(filter);
    if records.is_empty() {
        println!("{}", "No history yet.".dimmed());
        return Ok(());
    }
    for record in records {
        print_line(record, store.is_bookmarked(record.id));
    }
    Ok(())
}

pub fn show(id: &str) -> Result<()> {
    let config = super::load_config();
    let store = super::open_store(&config)?;
    let id = super::parse_id(&store, id)?;
    match store.find(id) {
        Some(record) => {
            println!("{}", render::render(record));
            Ok(())
        }
        None => Err(BiolitError::not_found("result", id.to_string()).into()),
    }
}

pub fn clear() -> Result<()> {
    let config = super::load_config();
    let mut store = super::open_store(&config)?;
    let count = store.history().len();
    store.clear_history();
    println!("Cleared {count} records. Bookmarks are untouched.");
    Ok(())
}

pub(super) fn print_line(record: &ResultRecord, bookmarked: bool) {
    let marker = if bookmarked { "★".yellow() } else { " ".normal() };
    let id = record.id.to_string();
    let tag = format!("{:<28}", record.mode.to_string());
    println!(
        "{} {} {} {} {}",
        marker,
        id[..8].dimmed(),
        tag.cyan(),
        record.created_at.format("%Y-%m-%d %H:%M"),
        truncate(&record.original_query, 48)
    );
}

fn truncate(text: &str, max: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= max {
        flat
    } else {
        let cut: String = flat.chars().take(max).collect();
        format!("{cut}…")
    }
}
