//! Flattening of nested definitions into keyed entity collections.
//!
//! Each subscription's nested resource groups, optional virtual network and
//! subnets become independently keyed, flat records carrying the subscription
//! identity and inherited attributes.

use crate::config;
use crate::error::ResolveError;
use crate::models::{ResourceGroup, Subnet, Subscription, SubscriptionDef, VirtualNetwork};
use crate::processing::defaults::{
    effective_location, effective_tags, effective_workload_type, inherit_location,
};
use std::collections::BTreeMap;

/// Flat, uniquely keyed entity collections derived from all definitions.
///
/// BTreeMap keys give every collection a stable iteration order, so repeated
/// resolution of the same input produces identical output.
#[derive(Debug, Default)]
pub struct Topology {
    /// Subscriptions keyed by definition identifier.
    pub subscriptions: BTreeMap<String, Subscription>,
    /// Resource groups keyed by `{subscriptionKey}-{resourceGroupKey}`.
    pub resource_groups: BTreeMap<String, ResourceGroup>,
    /// Virtual networks keyed by owning subscription key.
    pub virtual_networks: BTreeMap<String, VirtualNetwork>,
    /// Subnets keyed by `{subscriptionKey}-{subnetName}`.
    pub subnets: BTreeMap<String, Subnet>,
}

/// Build a derived key from the owning subscription key and a nested key.
pub fn derived_key(subscription_key: &str, nested_key: &str) -> String {
    format!("{subscription_key}{sep}{nested_key}", sep = config::KEY_SEPARATOR)
}

fn insert_unique<T>(
    map: &mut BTreeMap<String, T>,
    collection: &'static str,
    key: String,
    value: T,
) -> Result<(), ResolveError> {
    if map.contains_key(&key) {
        return Err(ResolveError::DuplicateKey { collection, key });
    }
    map.insert(key, value);
    Ok(())
}

/// Expand every subscription definition into flat entity collections.
///
/// A subscription with no resource groups and no virtual network contributes
/// only its own record; empty nested collections are valid.
///
/// # Arguments
/// * `defs` - Parsed definitions keyed by subscription identifier
///
/// # Returns
/// * `Ok(Topology)` - Flat collections with referential integrity verified
/// * `Err` - On derived-key collision or dangling reference
pub fn flatten(defs: &BTreeMap<String, SubscriptionDef>) -> Result<Topology, ResolveError> {
    let mut topology = Topology::default();

    for (sub_key, def) in defs {
        let location = effective_location(def);
        let tags = effective_tags(def);

        topology.subscriptions.insert(
            sub_key.clone(),
            Subscription {
                key: sub_key.clone(),
                display_name: def.display_name.clone(),
                management_group_id: def.management_group_id.clone(),
                workload_type: effective_workload_type(def),
                location: location.clone(),
                tags: tags.clone(),
            },
        );

        for (rg_key, rg) in &def.resource_groups {
            let key = derived_key(sub_key, rg_key);
            insert_unique(
                &mut topology.resource_groups,
                "resource_group",
                key.clone(),
                ResourceGroup {
                    key,
                    name: rg.name.clone(),
                    location: inherit_location(rg.location.as_deref(), &location),
                    tags: tags.clone(),
                    subscription_key: sub_key.clone(),
                },
            )?;
        }

        if let Some(vnet) = &def.virtual_network {
            // At most one network per subscription, keyed by the subscription.
            insert_unique(
                &mut topology.virtual_networks,
                "virtual_network",
                sub_key.clone(),
                VirtualNetwork {
                    key: sub_key.clone(),
                    name: vnet.name.clone(),
                    location: inherit_location(vnet.location.as_deref(), &location),
                    resource_group_name: vnet.resource_group_name.clone(),
                    address_space: vnet.address_space.clone(),
                    tags: tags.clone(),
                    hub_peering_enabled: vnet.hub_peering_enabled,
                    use_hub_gateway: vnet.use_hub_gateway,
                    subscription_key: sub_key.clone(),
                },
            )?;

            for subnet in &vnet.subnets {
                let key = derived_key(sub_key, &subnet.name);
                insert_unique(
                    &mut topology.subnets,
                    "subnet",
                    key.clone(),
                    Subnet {
                        key,
                        name: subnet.name.clone(),
                        vnet_name: vnet.name.clone(),
                        resource_group_name: vnet.resource_group_name.clone(),
                        address_prefix: subnet.address_prefix.clone(),
                        subscription_key: sub_key.clone(),
                    },
                )?;
            }
        }
    }

    validate_references(&topology)?;

    log::info!(
        "flattened {} subscriptions into {} resource groups, {} vnets, {} subnets",
        topology.subscriptions.len(),
        topology.resource_groups.len(),
        topology.virtual_networks.len(),
        topology.subnets.len()
    );
    Ok(topology)
}

/// Verify that every derived entity points at records that exist.
fn validate_references(topology: &Topology) -> Result<(), ResolveError> {
    for rg in topology.resource_groups.values() {
        if !topology.subscriptions.contains_key(&rg.subscription_key) {
            return Err(ResolveError::DanglingReference {
                entity: "resource_group",
                key: rg.key.clone(),
                target: "subscription",
                reference: rg.subscription_key.clone(),
            });
        }
    }

    for vnet in topology.virtual_networks.values() {
        if !topology.subscriptions.contains_key(&vnet.subscription_key) {
            return Err(ResolveError::DanglingReference {
                entity: "virtual_network",
                key: vnet.key.clone(),
                target: "subscription",
                reference: vnet.subscription_key.clone(),
            });
        }

        let rg_exists = topology
            .resource_groups
            .values()
            .any(|rg| rg.subscription_key == vnet.subscription_key && rg.name == vnet.resource_group_name);
        if !rg_exists {
            return Err(ResolveError::DanglingReference {
                entity: "virtual_network",
                key: vnet.key.clone(),
                target: "resource_group",
                reference: vnet.resource_group_name.clone(),
            });
        }
    }

    for subnet in topology.subnets.values() {
        let vnet = topology.virtual_networks.get(&subnet.subscription_key);
        match vnet {
            Some(vnet) if vnet.name == subnet.vnet_name => {}
            _ => {
                return Err(ResolveError::DanglingReference {
                    entity: "subnet",
                    key: subnet.key.clone(),
                    target: "virtual_network",
                    reference: subnet.vnet_name.clone(),
                });
            }
        }
    }

    Ok(())
}
