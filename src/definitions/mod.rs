//! Definition document loading.
//!
//! This module handles everything between files on disk and typed definitions:
//! - [`source`] - Collecting raw documents from a directory
//! - [`loader`] - Parsing raw documents into [`crate::models::SubscriptionDef`]

mod loader;
mod source;

// Re-export public functions
pub use loader::load_definitions;
pub use source::read_definition_dir;
