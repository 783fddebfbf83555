//! Simulation engine module

mod decider;
mod ending;
mod engine;
mod session;
mod setup;
mod state;


pub use decider::*;
pub use ending::*;
pub use engine::*;
pub use session::*;
pub use setup::*;
pub use state::*;
