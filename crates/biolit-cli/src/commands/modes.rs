//! Mode listing.

use biolit_core::AppMode;
use colored::Colorize;
use strum::IntoEnumIterator;

pub fn run() {
    for mode in AppMode::iter() {
        let spec = mode.spec();
        // Pad before coloring so ANSI codes don't break the column
        let tag = format!("{:<28}", mode.to_string());
        if spec.implemented {
            println!(
                "  {} {}  {}",
                tag.cyan(),
                spec.label.bold(),
                spec.description.dimmed()
            );
        } else {
            println!(
                "  {} {}  {}",
                tag.dimmed(),
                spec.label.dimmed(),
                "(not yet available)".yellow()
            );
        }
    }
}
