//! Hub network reference resolution.
//!
//! A single hub identity is resolved per run, first from an upstream
//! hub-and-spoke topology provider, then from explicit operator-supplied
//! values. Unresolved-but-needed is a hard error, never a silent default.

use crate::config;
use crate::error::ResolveError;
use crate::models::HubReference;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A network exposed by the upstream hub-and-spoke topology provider.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProviderNetwork {
    /// Full resource id of the network.
    pub id: String,
    /// Name of the network.
    pub name: String,
}

/// Explicit operator-supplied hub values, used when no provider output exists.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct ExplicitHub {
    /// Full resource id of the hub network.
    pub id: String,
    /// Name of the hub network.
    pub name: String,
    /// Resource group of the hub network; derived from the id if omitted.
    pub resource_group_name: Option<String>,
}

/// Both possible sources of the hub identity for one resolution run.
#[derive(Debug, Clone, Default)]
pub struct HubInput {
    /// Networks exposed by the upstream provider, keyed arbitrarily.
    pub provider_networks: BTreeMap<String, ProviderNetwork>,
    /// Explicit fallback values.
    pub explicit: Option<ExplicitHub>,
}

impl HubInput {
    /// Build the explicit fallback from environment variables. Provider output
    /// is only available when an upstream topology run feeds this process.
    ///
    /// Both id and name are required; a half-set pair is ignored with a
    /// warning so the operator is not left guessing at a later resolution
    /// failure.
    pub fn from_env() -> HubInput {
        let id = std::env::var(config::ENV_HUB_VNET_ID).ok();
        let name = std::env::var(config::ENV_HUB_VNET_NAME).ok();

        let explicit = match (id, name) {
            (Some(id), Some(name)) => Some(ExplicitHub {
                id,
                name,
                resource_group_name: std::env::var(config::ENV_HUB_RESOURCE_GROUP).ok(),
            }),
            (Some(_), None) => {
                log::warn!(
                    "{id_var} is set but {name_var} is not; explicit hub values ignored",
                    id_var = config::ENV_HUB_VNET_ID,
                    name_var = config::ENV_HUB_VNET_NAME,
                );
                None
            }
            (None, Some(_)) => {
                log::warn!(
                    "{name_var} is set but {id_var} is not; explicit hub values ignored",
                    id_var = config::ENV_HUB_VNET_ID,
                    name_var = config::ENV_HUB_VNET_NAME,
                );
                None
            }
            (None, None) => None,
        };

        HubInput {
            provider_networks: BTreeMap::new(),
            explicit,
        }
    }
}

/// Extract the resource group segment from a hierarchical resource id.
///
/// Resource ids follow `/subscriptions/{id}/resourceGroups/{name}/providers/...`;
/// the segment after `resourceGroups` (case-insensitive) is the group name.
pub fn resource_group_from_id(id: &str) -> Option<String> {
    let mut segments = id.split('/');
    segments
        .find(|s| s.eq_ignore_ascii_case("resourcegroups"))
        .and_then(|_| segments.next())
        .filter(|name| !name.is_empty())
        .map(|name| name.to_string())
}

/// Resolve the hub identity, first source wins.
///
/// Provider networks are consulted first; with more than one exposed network
/// the lexicographically smallest key is taken, so the choice is stable across
/// runs. Explicit values are the fallback. `None` means no source resolved.
pub fn resolve_hub(input: &HubInput) -> Option<HubReference> {
    // BTreeMap iteration yields keys in lexicographic order.
    if let Some((key, network)) = input.provider_networks.iter().next() {
        match resource_group_from_id(&network.id) {
            Some(resource_group_name) => {
                log::debug!("hub resolved from provider network '{key}'");
                return Some(HubReference {
                    id: network.id.clone(),
                    name: network.name.clone(),
                    resource_group_name,
                });
            }
            None => {
                log::warn!(
                    "provider network '{key}' has no resource group segment in id '{id}', \
                     falling back to explicit hub values",
                    id = network.id
                );
            }
        }
    }

    let explicit = input.explicit.as_ref()?;
    let resource_group_name = explicit
        .resource_group_name
        .clone()
        .or_else(|| resource_group_from_id(&explicit.id))?;

    log::debug!("hub resolved from explicit values");
    Some(HubReference {
        id: explicit.id.clone(),
        name: explicit.name.clone(),
        resource_group_name,
    })
}

/// Resolve the hub identity or fail the run.
///
/// # Arguments
/// * `input` - Both hub sources
/// * `vnet_key` - Key of the virtual network requesting the peering, for the error
pub fn require_hub(input: &HubInput, vnet_key: &str) -> Result<HubReference, ResolveError> {
    resolve_hub(input).ok_or_else(|| ResolveError::HubUnresolved {
        key: vnet_key.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const HUB_ID: &str =
        "/subscriptions/x/resourceGroups/hub-rg/providers/Microsoft.Network/virtualNetworks/hub-vnet";

    #[test]
    fn test_resource_group_from_id() {
        assert_eq!(resource_group_from_id(HUB_ID), Some("hub-rg".to_string()));
    }

    #[test]
    fn test_resource_group_from_id_case_insensitive() {
        let id = "/subscriptions/x/resourcegroups/Hub-RG/providers/a/b/c";
        assert_eq!(resource_group_from_id(id), Some("Hub-RG".to_string()));
    }

    #[test]
    fn test_resource_group_from_id_missing_segment() {
        assert_eq!(resource_group_from_id("/subscriptions/x"), None);
        assert_eq!(resource_group_from_id(""), None);
    }

    #[test]
    fn test_provider_wins_over_explicit() {
        let mut input = HubInput {
            explicit: Some(ExplicitHub {
                id: "/subscriptions/y/resourceGroups/other-rg/providers/n/v/other".to_string(),
                name: "other".to_string(),
                resource_group_name: None,
            }),
            ..Default::default()
        };
        input.provider_networks.insert(
            "hub".to_string(),
            ProviderNetwork {
                id: HUB_ID.to_string(),
                name: "hub-vnet".to_string(),
            },
        );

        let hub = resolve_hub(&input).expect("Hub should resolve");
        assert_eq!(hub.name, "hub-vnet");
        assert_eq!(hub.resource_group_name, "hub-rg");
    }

    #[test]
    fn test_multiple_provider_networks_take_lexicographic_first() {
        let mut input = HubInput::default();
        input.provider_networks.insert(
            "b-secondary".to_string(),
            ProviderNetwork {
                id: "/subscriptions/x/resourceGroups/rg-b/providers/n/v/hub-b".to_string(),
                name: "hub-b".to_string(),
            },
        );
        input.provider_networks.insert(
            "a-primary".to_string(),
            ProviderNetwork {
                id: "/subscriptions/x/resourceGroups/rg-a/providers/n/v/hub-a".to_string(),
                name: "hub-a".to_string(),
            },
        );

        let hub = resolve_hub(&input).expect("Hub should resolve");
        assert_eq!(hub.name, "hub-a", "Lexicographically first key must win");
    }

    #[test]
    fn test_explicit_fallback_derives_resource_group() {
        let input = HubInput {
            explicit: Some(ExplicitHub {
                id: HUB_ID.to_string(),
                name: "hub-vnet".to_string(),
                resource_group_name: None,
            }),
            ..Default::default()
        };

        let hub = resolve_hub(&input).expect("Hub should resolve");
        assert_eq!(hub.resource_group_name, "hub-rg");
    }

    #[test]
    fn test_from_env_ignores_half_set_explicit_values() {
        // One test mutates these variables so parallel tests cannot race.
        std::env::set_var(config::ENV_HUB_VNET_ID, HUB_ID);
        std::env::remove_var(config::ENV_HUB_VNET_NAME);
        std::env::remove_var(config::ENV_HUB_RESOURCE_GROUP);
        assert!(
            HubInput::from_env().explicit.is_none(),
            "Id without name must not count as explicit hub values"
        );

        std::env::set_var(config::ENV_HUB_VNET_NAME, "hub-vnet");
        let input = HubInput::from_env();
        let explicit = input.explicit.expect("Both variables set");
        assert_eq!(explicit.id, HUB_ID);
        assert_eq!(explicit.name, "hub-vnet");
        assert_eq!(explicit.resource_group_name, None);

        std::env::remove_var(config::ENV_HUB_VNET_ID);
        std::env::remove_var(config::ENV_HUB_VNET_NAME);
    }

    #[test]
    fn test_unresolvable_hub_is_hard_error() {
        let input = HubInput::default();
        assert!(resolve_hub(&input).is_none());
        let err = require_hub(&input, "sub1").expect_err("Expected HubUnresolved");
        match err {
            ResolveError::HubUnresolved { key } => assert_eq!(key, "sub1"),
            other => panic!("Unexpected error: {other}"),
        }
    }
}
