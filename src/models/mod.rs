//! Domain models for topology resolution.
//!
//! This module contains the core data structures used throughout the application:
//! - [`SubscriptionDef`] and nested definition shapes - operator-written input documents
//! - [`Subscription`], [`ResourceGroup`], [`VirtualNetwork`], [`Subnet`], [`Peering`] - derived entities
//! - [`HubReference`] - the resolved hub network identity
//! - [`ProvisioningPlan`] - the ordered hand-off to the provisioning executor

mod definition;
mod entity;
mod plan;

// Re-export public types
pub use definition::{ResourceGroupDef, SubnetDef, SubscriptionDef, VirtualNetworkDef};
pub use entity::{
    HubReference, NetworkIdentity, Peering, PeeringDirection, ResourceGroup, Subnet, Subscription,
    VirtualNetwork,
};
pub use plan::{PlanEntity, PlanStep, ProvisioningPlan};
