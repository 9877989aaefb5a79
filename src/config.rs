//! System-wide defaults and constants.

/// Location applied when neither a subscription nor a nested entity sets one.
pub const DEFAULT_LOCATION: &str = "japaneast";

/// Workload type applied when a definition omits `workload_type`.
pub const DEFAULT_WORKLOAD_TYPE: &str = "Production";

/// Separator used when deriving entity keys from `{subscription}-{nested}` pairs.
pub const KEY_SEPARATOR: &str = "-";

/// Reserved document identifier for human-readable notes kept next to the
/// definitions. Never parsed as a subscription.
pub const DOCS_DEFINITION_KEY: &str = "README";

/// Environment variable holding the explicit hub virtual network resource id.
pub const ENV_HUB_VNET_ID: &str = "HUB_VNET_ID";
/// Environment variable holding the explicit hub virtual network name.
pub const ENV_HUB_VNET_NAME: &str = "HUB_VNET_NAME";
/// Environment variable holding the explicit hub resource group name.
pub const ENV_HUB_RESOURCE_GROUP: &str = "HUB_RESOURCE_GROUP";
