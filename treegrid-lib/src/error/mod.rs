//! Error types

mod schema;
mod source;

pub use schema::*;
pub use source::*;
