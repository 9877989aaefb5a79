//! Topology resolution logic.
//!
//! This module contains the pure resolution passes:
//! - [`defaults`] - Default and inheritance resolution
//! - [`flatten`] - Expansion of nested definitions into flat keyed collections
//! - [`hub`] - Hub network reference resolution
//! - [`peering`] - Hub-spoke peering planning
//! - [`plan`] - Dependency-ordered plan emission

pub mod defaults;
pub mod flatten;
pub mod hub;
pub mod peering;
pub mod plan;

// Re-export public types and functions
pub use defaults::{effective_location, effective_tags, effective_workload_type, inherit_location};
pub use flatten::{flatten, Topology};
pub use hub::{resolve_hub, ExplicitHub, HubInput, ProviderNetwork};
pub use peering::plan_peerings;
pub use plan::emit_plan;
