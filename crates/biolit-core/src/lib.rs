//! Core domain types for BioLit.
//!
//! This crate holds everything the rest of the workspace agrees on:
//! the closed mode enumeration and its registry, the result and profile
//! domain models, configuration models, the shared error type, and the
//! repository traits implemented by the infrastructure crate.

pub mod config;
pub mod error;
pub mod mode;
pub mod profile;
pub mod repository;
pub mod result;

// Re-export the common error type
pub use error::BiolitError;
pub use mode::{AppMode, GroundingPolicy, ModeSpec, ModelTier, OutputContract};
pub use profile::UserProfile;
pub use result::{GroundingSource, ResultRecord};
