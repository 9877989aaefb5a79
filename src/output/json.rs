//! JSON serialization of the plan for the provisioning executor.

use crate::models::ProvisioningPlan;
use std::error::Error;

/// Serialize the plan to pretty-printed JSON.
///
/// The serialization is deterministic: step order and all map fields are
/// stable, so identical input yields byte-identical output.
pub fn plan_to_json(plan: &ProvisioningPlan) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(plan).map_err(|e| format!("Error serializing plan: {e}").into())
}

/// Write the serialized plan to a file.
///
/// # Arguments
/// * `plan` - The ordered provisioning plan
/// * `path` - Destination file path
pub fn write_plan_file(plan: &ProvisioningPlan, path: &str) -> Result<(), Box<dyn Error>> {
    let json = plan_to_json(plan)?;
    log::info!("writing plan to {path}");
    std::fs::write(path, json).map_err(|e| format!("Error writing plan file {path}: {e}").into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PlanEntity, PlanStep, Subscription};
    use std::collections::BTreeMap;

    #[test]
    fn test_plan_round_trips_through_json() {
        let plan = ProvisioningPlan {
            steps: vec![PlanStep {
                key: "sub1".to_string(),
                depends_on: vec![],
                prevent_deletion: true,
                entity: PlanEntity::Subscription(Subscription {
                    key: "sub1".to_string(),
                    display_name: "Sub One".to_string(),
                    management_group_id: "mg-1".to_string(),
                    workload_type: "Production".to_string(),
                    location: "japaneast".to_string(),
                    tags: BTreeMap::new(),
                }),
            }],
        };

        let json = plan_to_json(&plan).expect("Error serializing plan");
        let parsed: ProvisioningPlan =
            serde_json::from_str(&json).expect("Error parsing serialized plan");
        assert_eq!(parsed.steps.len(), 1);
        assert_eq!(parsed.steps[0].key, "sub1");
        assert!(parsed.steps[0].prevent_deletion);
    }
}
