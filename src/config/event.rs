//! Event catalog configuration structures

use crate::entity::Stat;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Top-level catalog document
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CatalogConfig {
    pub events: Vec<EventConfig>,
}

/// Event configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventConfig {
    pub id: String,
    /// Description template; `{child}` and `{parent}` are replaced by names
    pub description: String,
    pub choices: Vec<ChoiceConfig>,
}

/// One answer to an event
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChoiceConfig {
    /// What the player types to pick this choice
    pub label: String,
    pub action: String,
    /// Stat deltas; missing stats are zero
    #[serde(default)]
    pub effect: BTreeMap<Stat, i32>,
}
