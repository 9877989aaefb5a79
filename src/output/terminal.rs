//! Terminal output for the resolved plan.

use crate::models::{PlanEntity, ProvisioningPlan};
use colored::Colorize;

/// Print a human-readable plan summary to stdout.
///
/// # Arguments
/// * `plan` - The ordered provisioning plan
pub fn print_plan(plan: &ProvisioningPlan) {
    log::info!("PLAN: {} steps", plan.steps.len());

    for step in &plan.steps {
        let kind = step.entity.kind();
        let detail = match &step.entity {
            PlanEntity::Subscription(sub) => {
                format!("'{}' ({}, {})", sub.display_name, sub.workload_type, sub.location)
            }
            PlanEntity::ManagementGroupAssociation {
                management_group_id,
                subscription_key,
            } => format!("'{subscription_key}' -> '{management_group_id}'"),
            PlanEntity::ResourceGroup(rg) => format!("'{}' ({})", rg.name, rg.location),
            PlanEntity::VirtualNetwork(vnet) => format!("{vnet}"),
            PlanEntity::Subnet(subnet) => {
                format!("'{}' [{}] in '{}'", subnet.name, subnet.address_prefix, subnet.vnet_name)
            }
            PlanEntity::Peering(peering) => format!("{peering}"),
        };

        println!(
            "STEP: {kind:<28} {key} {detail}{deps}",
            kind = kind.green(),
            key = step.key.bold(),
            deps = if step.depends_on.is_empty() {
                String::new()
            } else {
                format!(" <- [{}]", step.depends_on.join(", ")).dimmed().to_string()
            }
        );
    }
}
