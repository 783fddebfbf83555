//! Configuration module for game data structures
//!
//! The event catalog is authored as JSON and compiled into the binary. This
//! module only deserializes it; validation happens when it is turned into an
//! [`EventCatalog`](crate::event::EventCatalog).

mod event;
mod settings;

pub use event::*;
pub use settings::*;

use crate::error::Result;

/// The catalog shipped with the game
pub const BUILTIN_CATALOG: &str = include_str!("../../data/events.json");

/// Deserialize a catalog document
/// Expected format: {"events": [{"id", "description", "choices": [...]}, ...]}
pub fn deserialize_catalog(json: &str) -> Result<CatalogConfig> {
    let catalog: CatalogConfig = serde_json::from_str(json)?;
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::Stat;
    use crate::error::RaiseKidsError;

    #[test]
    fn test_builtin_catalog_parses() {
        let catalog = deserialize_catalog(BUILTIN_CATALOG).unwrap();
        let ids: Vec<&str> = catalog.events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["tantrum", "sick", "big_question", "school_project"]);

        let tantrum = &catalog.events[0];
        assert_eq!(tantrum.choices[0].effect[&Stat::ChildHappiness], 20);
        assert_eq!(tantrum.choices[0].effect[&Stat::ParentMoney], -10);
    }

    #[test]
    fn test_unknown_stat_rejected() {
        let json = r#"{"events": [{"id": "x", "description": "d", "choices": [
            {"label": "1", "action": "a", "effect": {"child_wisdom": 5}}
        ]}]}"#;
        let err = deserialize_catalog(json).unwrap_err();
        assert!(matches!(err, RaiseKidsError::Json(_)));
    }

    #[test]
    fn test_missing_effect_defaults_to_empty() {
        let json = r#"{"events": [{"id": "x", "description": "d", "choices": [
            {"label": "1", "action": "a"}
        ]}]}"#;
        let catalog = deserialize_catalog(json).unwrap();
        assert!(catalog.events[0].choices[0].effect.is_empty());
    }
}
