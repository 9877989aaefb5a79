//! Hub-spoke peering planning.
//!
//! Every spoke network opting into hub connectivity gets exactly two peering
//! entities, one per direction. Pair-or-nothing: a spoke never ends up with a
//! single half.

use crate::error::ResolveError;
use crate::models::{NetworkIdentity, Peering, PeeringDirection, VirtualNetwork};
use crate::processing::flatten::{derived_key, Topology};
use crate::processing::hub::{require_hub, HubInput};
use std::collections::BTreeMap;

/// Plan peering pairs for every hub-peering-enabled virtual network.
///
/// The hub identity is resolved on first use; if any network requests a
/// peering while no hub resolves, the whole run fails before a single peering
/// is emitted.
///
/// # Arguments
/// * `topology` - Flattened entity collections
/// * `hub_input` - Upstream provider output and explicit hub fallback values
///
/// # Returns
/// * `Ok(BTreeMap)` - Peerings keyed by `{subscriptionKey}-{peeringName}`
/// * `Err(ResolveError::HubUnresolved)` - Naming the first requesting network
pub fn plan_peerings(
    topology: &Topology,
    hub_input: &HubInput,
) -> Result<BTreeMap<String, Peering>, ResolveError> {
    let mut peerings = BTreeMap::new();
    // Resolved once on first use, read-only afterwards.
    let mut hub: Option<NetworkIdentity> = None;

    for vnet in topology.virtual_networks.values() {
        if !vnet.hub_peering_enabled {
            continue;
        }

        if hub.is_none() {
            let resolved = require_hub(hub_input, &vnet.key)?;
            hub = Some(NetworkIdentity {
                id: Some(resolved.id),
                name: resolved.name,
                resource_group_name: resolved.resource_group_name,
            });
        }
        if let Some(hub_identity) = &hub {
            for peering in peering_pair(vnet, hub_identity) {
                peerings.insert(peering.key.clone(), peering);
            }
        }
    }

    log::info!("planned {} peering entities", peerings.len());
    Ok(peerings)
}

/// Build the two directional halves for one spoke network.
fn peering_pair(vnet: &VirtualNetwork, hub: &NetworkIdentity) -> [Peering; 2] {
    let spoke = NetworkIdentity {
        id: None,
        name: vnet.name.clone(),
        resource_group_name: vnet.resource_group_name.clone(),
    };

    let spoke_to_hub_name = format!("{}-to-hub", vnet.name);
    let hub_to_spoke_name = format!("hub-to-{}", vnet.name);

    // Gateway flags are complementary across the pair: the hub offers transit
    // exactly when the spoke asks to use the hub gateway.
    [
        Peering {
            key: derived_key(&vnet.subscription_key, &spoke_to_hub_name),
            direction: PeeringDirection::SpokeToHub,
            name: spoke_to_hub_name,
            source: spoke.clone(),
            remote: hub.clone(),
            allow_network_access: true,
            allow_forwarded_traffic: true,
            allow_gateway_transit: false,
            use_remote_gateways: vnet.use_hub_gateway,
            subscription_key: vnet.subscription_key.clone(),
        },
        Peering {
            key: derived_key(&vnet.subscription_key, &hub_to_spoke_name),
            direction: PeeringDirection::HubToSpoke,
            name: hub_to_spoke_name,
            source: hub.clone(),
            remote: spoke,
            allow_network_access: true,
            allow_forwarded_traffic: true,
            allow_gateway_transit: vnet.use_hub_gateway,
            use_remote_gateways: false,
            subscription_key: vnet.subscription_key.clone(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::definitions::load_definitions;
    use crate::processing::flatten::flatten;
    use crate::processing::hub::ExplicitHub;

    const HUB_ID: &str =
        "/subscriptions/x/resourceGroups/hub-rg/providers/Microsoft.Network/virtualNetworks/hub-vnet";

    fn spoke_topology(hub_peering: bool, use_gateway: bool) -> Topology {
        let yaml = format!(
            concat!(
                "display_name: S\n",
                "management_group_id: mg-1\n",
                "resource_groups:\n",
                "  net: {{ name: rg-net }}\n",
                "virtual_network:\n",
                "  name: spoke1\n",
                "  resource_group_name: rg-net\n",
                "  address_space: [\"10.1.0.0/16\"]\n",
                "  hub_peering_enabled: {hub_peering}\n",
                "  use_hub_gateway: {use_gateway}\n",
            ),
            hub_peering = hub_peering,
            use_gateway = use_gateway,
        );
        let defs = load_definitions(&[("sub1".to_string(), yaml)]).expect("Error loading");
        flatten(&defs).expect("Error flattening")
    }

    fn explicit_hub() -> HubInput {
        HubInput {
            explicit: Some(ExplicitHub {
                id: HUB_ID.to_string(),
                name: "hub-vnet".to_string(),
                resource_group_name: Some("hub-rg".to_string()),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_pair_is_emitted_with_complementary_gateway_flags() {
        let topology = spoke_topology(true, true);
        let peerings = plan_peerings(&topology, &explicit_hub()).expect("Error planning");
        assert_eq!(peerings.len(), 2, "Expected exactly one pair");

        let spoke_side = &peerings["sub1-spoke1-to-hub"];
        assert_eq!(spoke_side.direction, PeeringDirection::SpokeToHub);
        assert_eq!(spoke_side.name, "spoke1-to-hub");
        assert_eq!(spoke_side.source.name, "spoke1");
        assert_eq!(spoke_side.remote.name, "hub-vnet");
        assert_eq!(spoke_side.remote.resource_group_name, "hub-rg");
        assert!(!spoke_side.allow_gateway_transit);
        assert!(spoke_side.use_remote_gateways);

        let hub_side = &peerings["sub1-hub-to-spoke1"];
        assert_eq!(hub_side.direction, PeeringDirection::HubToSpoke);
        assert_eq!(hub_side.name, "hub-to-spoke1");
        assert_eq!(hub_side.source.name, "hub-vnet");
        assert_eq!(hub_side.remote.name, "spoke1");
        assert!(hub_side.allow_gateway_transit);
        assert!(!hub_side.use_remote_gateways);

        for peering in peerings.values() {
            assert!(peering.allow_network_access);
            assert!(peering.allow_forwarded_traffic);
        }
    }

    #[test]
    fn test_hub_resource_id_reaches_the_peering() {
        // The hub is external to the plan; its resource id is the executor's
        // only handle on it.
        let topology = spoke_topology(true, false);
        let peerings = plan_peerings(&topology, &explicit_hub()).expect("Error planning");

        let spoke_side = &peerings["sub1-spoke1-to-hub"];
        assert_eq!(
            spoke_side.remote.id.as_deref(),
            Some(HUB_ID),
            "Spoke-side remote must carry the hub resource id"
        );

        let hub_side = &peerings["sub1-hub-to-spoke1"];
        assert_eq!(hub_side.source.id.as_deref(), Some(HUB_ID));
        assert_eq!(
            hub_side.remote.id, None,
            "The spoke's id is assigned by the executor, not known here"
        );
    }

    #[test]
    fn test_no_gateway_use_leaves_both_transit_flags_off() {
        let topology = spoke_topology(true, false);
        let peerings = plan_peerings(&topology, &explicit_hub()).expect("Error planning");
        assert!(!peerings["sub1-spoke1-to-hub"].use_remote_gateways);
        assert!(!peerings["sub1-hub-to-spoke1"].allow_gateway_transit);
    }

    #[test]
    fn test_disabled_peering_emits_nothing() {
        let topology = spoke_topology(false, false);
        let peerings = plan_peerings(&topology, &explicit_hub()).expect("Error planning");
        assert!(peerings.is_empty(), "No peerings expected");
    }

    #[test]
    fn test_unresolvable_hub_fails_with_zero_peerings() {
        let topology = spoke_topology(true, false);
        let err =
            plan_peerings(&topology, &HubInput::default()).expect_err("Expected HubUnresolved");
        match err {
            ResolveError::HubUnresolved { key } => assert_eq!(key, "sub1"),
            other => panic!("Unexpected error: {other}"),
        }
    }
}
