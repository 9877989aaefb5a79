//! Default and inheritance resolution.
//!
//! Precedence is always explicit value > parent (subscription) value > system
//! default. All functions here are pure; re-running them on the same
//! definition yields the same output.

use crate::config;
use crate::models::SubscriptionDef;
use std::collections::BTreeMap;

/// Resolve the workload type of a subscription.
pub fn effective_workload_type(def: &SubscriptionDef) -> String {
    def.workload_type
        .clone()
        .unwrap_or_else(|| config::DEFAULT_WORKLOAD_TYPE.to_string())
}

/// Resolve the location of a subscription.
pub fn effective_location(def: &SubscriptionDef) -> String {
    def.location
        .clone()
        .unwrap_or_else(|| config::DEFAULT_LOCATION.to_string())
}

/// Resolve the tags of a subscription.
pub fn effective_tags(def: &SubscriptionDef) -> BTreeMap<String, String> {
    def.tags.clone()
}

/// Resolve a nested entity's location against its parent subscription.
pub fn inherit_location(child: Option<&str>, parent: &str) -> String {
    match child {
        Some(location) => location.to_string(),
        None => parent.to_string(),
    }
}
