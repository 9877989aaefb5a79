pub mod config;
pub mod definitions;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use models::ProvisioningPlan;
use processing::hub::HubInput;
use std::collections::HashSet;

pub use error::ResolveError;

/// Run the full resolution pipeline over raw definition documents.
///
/// Load, flatten, plan peerings and emit the ordered plan. Any resolution
/// error aborts before a plan exists; no partial entity set is handed out.
pub fn resolve_topology(
    docs: &[(String, String)],
    hub_input: &HubInput,
) -> Result<ProvisioningPlan, ResolveError> {
    let defs = definitions::load_definitions(docs)?;
    let topology = processing::flatten(&defs)?;
    let peerings = processing::plan_peerings(&topology, hub_input)?;
    let plan = processing::emit_plan(&topology, &peerings);

    check_unique_step_keys(&plan)?;
    Ok(plan)
}

// return error if duplicate step keys made it into the plan
pub fn check_unique_step_keys(plan: &ProvisioningPlan) -> Result<(), ResolveError> {
    let mut seen = HashSet::new();

    for step in plan.steps.iter() {
        if !seen.insert(step.key.as_str()) {
            return Err(ResolveError::DuplicateKey {
                collection: "plan",
                key: step.key.clone(),
            });
        }
    }
    Ok(())
}
