//! Child and parent attributes

mod child;
mod parent;
mod stat;


pub use child::*;
pub use parent::{Parent, DAILY_FATIGUE, START_MONEY, START_PATIENCE};
pub use stat::*;
