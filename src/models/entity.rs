//! Derived topology entities.
//!
//! Flat, uniquely keyed records produced by the resolution pass. All fields
//! are resolved values; no defaults remain to be applied downstream.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// A subscription with its defaults resolved.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Subscription {
    /// Short identifier (definition file stem), unique per run.
    pub key: String,
    /// Display name of the subscription.
    pub display_name: String,
    /// Management group the subscription is associated into.
    pub management_group_id: String,
    /// Resolved workload type.
    pub workload_type: String,
    /// Resolved Azure region location.
    pub location: String,
    /// Resolved tags.
    pub tags: BTreeMap<String, String>,
}

/// A resource group derived from a subscription definition.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ResourceGroup {
    /// Derived key `{subscriptionKey}-{resourceGroupKey}`.
    pub key: String,
    /// Name of the resource group.
    pub name: String,
    /// Resolved location (override or inherited).
    pub location: String,
    /// Tags inherited from the owning subscription.
    pub tags: BTreeMap<String, String>,
    /// Key of the owning subscription.
    pub subscription_key: String,
}

/// A virtual network derived from a subscription definition.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct VirtualNetwork {
    /// Derived key; the owning subscription key (at most one network each).
    pub key: String,
    /// Name of the virtual network.
    pub name: String,
    /// Resolved location (override or inherited).
    pub location: String,
    /// Name of the resource group that owns the network.
    pub resource_group_name: String,
    /// CIDR blocks of the virtual network.
    pub address_space: Vec<String>,
    /// Tags inherited from the owning subscription.
    pub tags: BTreeMap<String, String>,
    /// Whether this network peers with the hub network.
    pub hub_peering_enabled: bool,
    /// Whether this network routes through the hub's gateway.
    pub use_hub_gateway: bool,
    /// Key of the owning subscription.
    pub subscription_key: String,
}

/// A subnet derived from a virtual network definition.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Subnet {
    /// Derived key `{subscriptionKey}-{subnetName}`.
    pub key: String,
    /// Name of the subnet.
    pub name: String,
    /// Name of the virtual network containing this subnet.
    pub vnet_name: String,
    /// Name of the resource group that owns the network.
    pub resource_group_name: String,
    /// CIDR block of the subnet.
    pub address_prefix: String,
    /// Key of the owning subscription.
    pub subscription_key: String,
}

/// Identifies one side of a peering.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NetworkIdentity {
    /// Full resource id; present for the hub, which lives outside the plan
    /// and is only reachable by id. Networks created by the plan itself get
    /// their id assigned by the executor.
    pub id: Option<String>,
    /// Name of the virtual network.
    pub name: String,
    /// Resource group the network lives in.
    pub resource_group_name: String,
}

/// Direction of a single peering entity within a spoke/hub pair.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PeeringDirection {
    /// From the spoke network towards the hub.
    SpokeToHub,
    /// From the hub network towards the spoke.
    HubToSpoke,
}

/// One directional half of a spoke/hub peering pair.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Peering {
    /// Derived key `{subscriptionKey}-{peeringName}`.
    pub key: String,
    /// Direction of this half of the pair.
    pub direction: PeeringDirection,
    /// Peering name (`{vnet}-to-hub` or `hub-to-{vnet}`).
    pub name: String,
    /// The network the peering is created on.
    pub source: NetworkIdentity,
    /// The network the peering points at.
    pub remote: NetworkIdentity,
    /// Allow traffic between the peered networks.
    pub allow_network_access: bool,
    /// Allow forwarded traffic from the remote network.
    pub allow_forwarded_traffic: bool,
    /// Offer this side's gateway to the remote network.
    pub allow_gateway_transit: bool,
    /// Route through the remote network's gateway.
    pub use_remote_gateways: bool,
    /// Key of the spoke's owning subscription.
    pub subscription_key: String,
}

/// The resolved hub network identity; at most one per run.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HubReference {
    /// Full resource id of the hub virtual network.
    pub id: String,
    /// Name of the hub virtual network.
    pub name: String,
    /// Resource group the hub network lives in.
    pub resource_group_name: String,
}

impl fmt::Display for VirtualNetwork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} [{}] ({} in {})",
            self.name,
            self.address_space.join(", "),
            self.resource_group_name,
            self.location
        )
    }
}

impl fmt::Display for Peering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} -> {})",
            self.name, self.source.name, self.remote.name
        )
    }
}
