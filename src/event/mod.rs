//! Event catalog, selection and choice processing

mod catalog;
mod processor;
pub mod selector;


pub use catalog::*;
pub use processor::*;
pub use selector::*;
