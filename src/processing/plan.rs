//! Dependency-ordered plan emission.
//!
//! Orders all derived entities along their natural dependency chain and tags
//! each step with its predecessors, so an external topological scheduler can
//! parallelize independent branches safely. Nothing is provisioned here.

use crate::models::{Peering, PlanEntity, PlanStep, ProvisioningPlan};
use crate::processing::flatten::Topology;
use std::collections::BTreeMap;

/// Build a plan-wide step key.
///
/// Entity keys are only unique within their own collection (a subscription and
/// its virtual network share a key), so plan steps are namespaced by kind to
/// keep `depends_on` references unambiguous.
fn step_key(kind: &str, entity_key: &str) -> String {
    format!("{kind}:{entity_key}")
}

/// Emit the ordered provisioning plan for a resolved topology.
///
/// Step order: subscriptions, management-group associations, resource groups,
/// virtual networks, subnets, peerings; sorted by key within each phase.
/// Every `depends_on` entry names an earlier step.
pub fn emit_plan(topology: &Topology, peerings: &BTreeMap<String, Peering>) -> ProvisioningPlan {
    let mut steps = Vec::new();

    for (key, subscription) in &topology.subscriptions {
        steps.push(PlanStep {
            key: step_key("subscription", key),
            depends_on: vec![],
            // Subscriptions are permanent once created; the executor must
            // never destroy one.
            prevent_deletion: true,
            entity: PlanEntity::Subscription(subscription.clone()),
        });
    }

    for (sub_key, subscription) in &topology.subscriptions {
        steps.push(PlanStep {
            key: step_key("management_group_association", sub_key),
            depends_on: vec![step_key("subscription", sub_key)],
            prevent_deletion: false,
            entity: PlanEntity::ManagementGroupAssociation {
                subscription_key: sub_key.clone(),
                management_group_id: subscription.management_group_id.clone(),
            },
        });
    }

    for (key, rg) in &topology.resource_groups {
        steps.push(PlanStep {
            key: step_key("resource_group", key),
            depends_on: vec![step_key("subscription", &rg.subscription_key)],
            prevent_deletion: false,
            entity: PlanEntity::ResourceGroup(rg.clone()),
        });
    }

    for (key, vnet) in &topology.virtual_networks {
        // The owning resource group is validated to exist during flattening.
        let rg_key = topology
            .resource_groups
            .values()
            .find(|rg| {
                rg.subscription_key == vnet.subscription_key && rg.name == vnet.resource_group_name
            })
            .map(|rg| step_key("resource_group", &rg.key));

        steps.push(PlanStep {
            key: step_key("virtual_network", key),
            depends_on: rg_key.into_iter().collect(),
            prevent_deletion: false,
            entity: PlanEntity::VirtualNetwork(vnet.clone()),
        });
    }

    for (key, subnet) in &topology.subnets {
        steps.push(PlanStep {
            key: step_key("subnet", key),
            depends_on: vec![step_key("virtual_network", &subnet.subscription_key)],
            prevent_deletion: false,
            entity: PlanEntity::Subnet(subnet.clone()),
        });
    }

    for (key, peering) in peerings {
        steps.push(PlanStep {
            key: step_key("peering", key),
            // Both halves wait for the spoke network; the hub network itself
            // is external to this plan.
            depends_on: vec![step_key("virtual_network", &peering.subscription_key)],
            prevent_deletion: false,
            entity: PlanEntity::Peering(peering.clone()),
        });
    }

    log::info!("emitted provisioning plan with {} steps", steps.len());
    ProvisioningPlan { steps }
}
