//! Raising Kids - a turn-based parenting simulator
//!
//! The parent manages patience, energy and money while the child's needs
//! drift day by day and random family events demand a decision. The game
//! ends when the parent runs out of patience or money, the child stops
//! trusting them, or the child turns 18.
//!
//! All state lives in an explicit [`GameState`] and all randomness comes from
//! an injected [`rand::Rng`], so a single day can be resolved and tested with
//! [`advance_day`] without standing up the interactive loop.

pub mod config;
pub mod effect;
pub mod entity;
pub mod error;
pub mod event;
pub mod simulator;

pub use crate::config::EngineSettings;
pub use crate::error::{RaiseKidsError, Result};
pub use crate::event::EventCatalog;
pub use crate::simulator::{advance_day, Engine, GameState, GameSummary};
