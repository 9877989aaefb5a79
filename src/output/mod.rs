//! Output formatting for the resolved plan.
//!
//! This module handles formatting and outputting the provisioning plan:
//! - [`json`] - JSON hand-off for the provisioning executor
//! - [`terminal`] - Terminal output with colors

mod json;
mod terminal;

pub use json::{plan_to_json, write_plan_file};
pub use terminal::print_plan;
