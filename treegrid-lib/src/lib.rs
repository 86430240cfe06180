//! Tree-aware table state engine
//!
//! Shapes a forest of dynamic records into a visible row list under
//! column-scoped filtering, sorting, row expansion, selection and
//! pagination, keeping the features consistent with each other: filters
//! search whole subtrees, and pagination never splits a top-level row from
//! its expanded descendants. Rendering is a collaborator's concern; the
//! engine's output carries everything a renderer needs.

pub mod bar;
pub mod columns;
pub mod engine;
pub mod error;
pub mod expand;
pub mod filter;
pub mod model;
pub mod schema;
pub mod source;

pub use engine::Table;
pub use engine::TableOptions;
pub use engine::TableView;
