//! The read-only event catalog

use crate::config::{deserialize_catalog, CatalogConfig, ChoiceConfig, EventConfig, BUILTIN_CATALOG};
use crate::effect::Effect;
use crate::entity::{Child, Parent};
use crate::error::{RaiseKidsError, Result};
use ahash::AHashMap;
use once_cell::sync::{Lazy, OnceCell};
use regex::{Captures, Regex};

/// Number of choices every event offers
pub const CHOICES_PER_EVENT: usize = 3;

/// Placeholder syntax in description templates: `{name}`
static PLACEHOLDER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\{([a-z_]+)\}").expect("placeholder pattern is valid")
});

/// Placeholders a description may use
const KNOWN_PLACEHOLDERS: [&str; 2] = ["child", "parent"];

/// Built-in catalog, validated on first use
static BUILTIN: OnceCell<EventCatalog> = OnceCell::new();

/// One answer to an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub label: String,
    pub action: String,
    pub effect: Effect,
}

/// A scripted scenario with exactly three choices
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: String,
    pub description_template: String,
    pub choices: [Choice; CHOICES_PER_EVENT],
}

impl Event {
    /// Render the description for the current family
    pub fn describe(&self, child: &Child, parent: &Parent) -> String {
        PLACEHOLDER
            .replace_all(&self.description_template, |caps: &Captures<'_>| {
                match &caps[1] {
                    "child" => child.name.clone(),
                    "parent" => parent.name.clone(),
                    _ => caps[0].to_string(),
                }
            })
            .into_owned()
    }

    /// Find the choice whose label matches the player's input
    pub fn choice(&self, input: &str) -> Option<&Choice> {
        let input = input.trim();
        self.choices.iter().find(|c| c.label == input)
    }
}

/// Immutable collection of events, enumerable and indexed by id.
///
/// Construction validates every event, so a catalog in hand is never empty
/// and every event has three distinct choice labels.
#[derive(Debug, Clone)]
pub struct EventCatalog {
    events: Vec<Event>,
    index: AHashMap<String, usize>,
}

impl EventCatalog {
    /// The catalog compiled into the game
    pub fn builtin() -> Result<&'static EventCatalog> {
        BUILTIN.get_or_try_init(|| {
            let catalog = Self::from_json(BUILTIN_CATALOG)?;
            tracing::debug!(events = catalog.len(), "event catalog loaded");
            Ok(catalog)
        })
    }

    /// Parse and validate a catalog document
    pub fn from_json(json: &str) -> Result<Self> {
        Self::from_config(deserialize_catalog(json)?)
    }

    /// Validate a deserialized catalog and build the runtime form
    pub fn from_config(config: CatalogConfig) -> Result<Self> {
        if config.events.is_empty() {
            return Err(invalid("catalog has no events".to_string()));
        }

        let mut events = Vec::with_capacity(config.events.len());
        let mut index = AHashMap::with_capacity(config.events.len());

        for event_config in config.events {
            let event = build_event(event_config)?;
            if index.insert(event.id.clone(), events.len()).is_some() {
                return Err(invalid(format!("duplicate event id: {}", event.id)));
            }
            events.push(event);
        }

        Ok(Self { events, index })
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.index.get(id).map(|&i| &self.events[i])
    }

    /// All events in catalog order
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Always false for a constructed catalog
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

fn invalid(msg: String) -> RaiseKidsError {
    RaiseKidsError::InvalidCatalog(msg)
}

fn build_event(config: EventConfig) -> Result<Event> {
    let EventConfig {
        id,
        description,
        choices,
    } = config;

    if id.trim().is_empty() {
        return Err(invalid("event id is empty".to_string()));
    }

    for caps in PLACEHOLDER.captures_iter(&description) {
        if !KNOWN_PLACEHOLDERS.contains(&&caps[1]) {
            return Err(invalid(format!(
                "event {} uses unknown placeholder {}",
                id, &caps[0]
            )));
        }
    }

    if choices.len() != CHOICES_PER_EVENT {
        return Err(invalid(format!(
            "event {} has {} choices, expected {}",
            id,
            choices.len(),
            CHOICES_PER_EVENT
        )));
    }

    let choices: Vec<Choice> = choices.into_iter().map(build_choice).collect();
    for (i, choice) in choices.iter().enumerate() {
        if choice.label.trim().is_empty() || choice.label.trim() != choice.label {
            return Err(invalid(format!(
                "event {} has a blank or padded choice label",
                id
            )));
        }
        if choices[..i].iter().any(|c| c.label == choice.label) {
            return Err(invalid(format!(
                "event {} repeats choice label {}",
                id, choice.label
            )));
        }
    }

    let choices: [Choice; CHOICES_PER_EVENT] = choices
        .try_into()
        .map_err(|_| invalid(format!("event {} has the wrong number of choices", id)))?;

    Ok(Event {
        id,
        description_template: description,
        choices,
    })
}

fn build_choice(config: ChoiceConfig) -> Choice {
    Choice {
        label: config.label,
        action: config.action,
        effect: config.effect.into_iter().collect(),
    }
}
