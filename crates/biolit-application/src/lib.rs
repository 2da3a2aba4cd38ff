//! The application shell: history/bookmark store, shell state machine,
//! and the renderer set.

pub mod render;
pub mod shell;
pub mod store;

pub use shell::{AppShell, QueryStatus};
pub use store::ResearchStore;
