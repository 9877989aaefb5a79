use azure_topology_plan::definitions::read_definition_dir;
use azure_topology_plan::output::{print_plan, write_plan_file};
use azure_topology_plan::processing::HubInput;
use azure_topology_plan::resolve_topology;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    dotenv::dotenv().ok();
    //
    log::info!("#Start main()");

    let definition_dir = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "definitions".to_string());

    let docs = read_definition_dir(&definition_dir)?;
    let hub_input = HubInput::from_env();

    let plan = resolve_topology(&docs, &hub_input).map_err(|e| {
        log::error!("resolution failed: {e}");
        e
    })?;

    print_plan(&plan);

    if let Ok(plan_file) = std::env::var("PLAN_FILE") {
        write_plan_file(&plan, &plan_file)?;
    }

    Ok(())
}
