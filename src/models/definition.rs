//! Definition document shapes.
//!
//! One YAML document per subscription; the file stem is the subscription key.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A per-tenant subscription definition as written by the operator.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct SubscriptionDef {
    /// Display name of the subscription.
    pub display_name: String,
    /// Management group the subscription is associated into.
    pub management_group_id: String,
    /// Workload type ("Production" if omitted).
    pub workload_type: Option<String>,
    /// Azure region location ("japaneast" if omitted).
    pub location: Option<String>,
    /// Tags applied to the subscription and inherited by derived entities.
    #[serde(default)]
    pub tags: BTreeMap<String, String>,
    /// Resource groups to create, keyed by a short identifier.
    #[serde(default)]
    pub resource_groups: BTreeMap<String, ResourceGroupDef>,
    /// Optional single virtual network for this subscription.
    pub virtual_network: Option<VirtualNetworkDef>,
}

/// A resource group entry nested in a subscription definition.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct ResourceGroupDef {
    /// Name of the resource group.
    pub name: String,
    /// Location override (inherits the subscription location if omitted).
    pub location: Option<String>,
}

/// The optional virtual network nested in a subscription definition.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct VirtualNetworkDef {
    /// Name of the virtual network.
    pub name: String,
    /// Name of the resource group that owns the network.
    pub resource_group_name: String,
    /// CIDR blocks of the virtual network.
    pub address_space: Vec<String>,
    /// Location override (inherits the subscription location if omitted).
    pub location: Option<String>,
    /// Whether this network peers with the hub network.
    #[serde(default)]
    pub hub_peering_enabled: bool,
    /// Whether this network routes through the hub's gateway.
    #[serde(default)]
    pub use_hub_gateway: bool,
    /// Subnets to create inside the network.
    #[serde(default)]
    pub subnets: Vec<SubnetDef>,
}

/// A subnet entry nested in a virtual network definition.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(deny_unknown_fields)]
pub struct SubnetDef {
    /// Name of the subnet.
    pub name: String,
    /// CIDR block of the subnet.
    pub address_prefix: String,
}
