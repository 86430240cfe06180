//! Column filtering: predicate compilation and the active filter set

mod active;
mod predicate;

pub use active::*;
pub use predicate::*;
