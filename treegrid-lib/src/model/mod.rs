//! Row tree model

mod record;
mod row_id;
mod value;

pub use record::*;
pub use row_id::*;
pub use value::*;
