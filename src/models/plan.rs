//! Provisioning plan hand-off types.
//!
//! The ordered step list is the only output of a resolution run; the external
//! provisioning executor consumes it and materializes the entities.

use super::{Peering, ResourceGroup, Subnet, Subscription, VirtualNetwork};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One entity to be provisioned, tagged with its concrete record.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PlanEntity {
    /// Create the subscription itself.
    Subscription(Subscription),
    /// Associate an existing subscription into its management group.
    ManagementGroupAssociation {
        /// Key of the subscription being associated.
        subscription_key: String,
        /// Target management group.
        management_group_id: String,
    },
    /// Create a resource group.
    ResourceGroup(ResourceGroup),
    /// Create a virtual network.
    VirtualNetwork(VirtualNetwork),
    /// Create a subnet.
    Subnet(Subnet),
    /// Create one half of a peering pair.
    Peering(Peering),
}

impl PlanEntity {
    /// Short kind label for logs and terminal output.
    pub fn kind(&self) -> &'static str {
        match self {
            PlanEntity::Subscription(_) => "subscription",
            PlanEntity::ManagementGroupAssociation { .. } => "management_group_association",
            PlanEntity::ResourceGroup(_) => "resource_group",
            PlanEntity::VirtualNetwork(_) => "virtual_network",
            PlanEntity::Subnet(_) => "subnet",
            PlanEntity::Peering(_) => "peering",
        }
    }
}

/// A single ordered step of the provisioning plan.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct PlanStep {
    /// Unique key of the entity within the plan.
    pub key: String,
    /// Keys of steps that must complete before this one.
    pub depends_on: Vec<String>,
    /// The executor must never destroy this entity once created.
    #[serde(default)]
    pub prevent_deletion: bool,
    /// The entity to provision.
    pub entity: PlanEntity,
}

/// The full, dependency-ordered provisioning plan.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ProvisioningPlan {
    /// Ordered steps; every `depends_on` reference points at an earlier step.
    pub steps: Vec<PlanStep>,
}

impl fmt::Display for ProvisioningPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "ProvisioningPlan ({} steps):", self.steps.len())?;
        for step in &self.steps {
            writeln!(f, "  - {} '{}'", step.entity.kind(), step.key)?;
        }
        Ok(())
    }
}
