//! Definition document parsing.
//!
//! Turns raw `(identifier, yaml)` pairs into typed subscription definitions.

use crate::config;
use crate::error::ResolveError;
use crate::models::SubscriptionDef;
use std::collections::BTreeMap;

/// Parse raw definition documents into a map keyed by identifier.
///
/// The identifier is the source name with its extension stripped. The reserved
/// documentation identifier ([`config::DOCS_DEFINITION_KEY`]) is skipped. A
/// document that does not parse into the expected shape fails the whole run.
///
/// # Arguments
/// * `docs` - `(identifier, contents)` pairs, already deduplicated by source name
///
/// # Returns
/// * `Ok(BTreeMap)` - Parsed definitions keyed by identifier
/// * `Err(ResolveError::DefinitionParse)` - Naming the offending identifier
pub fn load_definitions(
    docs: &[(String, String)],
) -> Result<BTreeMap<String, SubscriptionDef>, ResolveError> {
    let mut defs = BTreeMap::new();

    for (key, contents) in docs {
        if key == config::DOCS_DEFINITION_KEY {
            log::debug!("skipping reserved documentation entry '{key}'");
            continue;
        }

        let deserializer = serde_yaml::Deserializer::from_str(contents);
        let def: SubscriptionDef =
            serde_path_to_error::deserialize(deserializer).map_err(|e| {
                log::error!("definition '{key}' failed to parse: {e}");
                ResolveError::DefinitionParse {
                    key: key.clone(),
                    path: e.path().to_string(),
                    message: e.inner().to_string(),
                }
            })?;

        // Source collections are deduplicated by file name; a repeated key from
        // another caller deterministically keeps the last document.
        defs.insert(key.clone(), def);
    }

    log::info!("loaded {} subscription definitions", defs.len());
    Ok(defs)
}
