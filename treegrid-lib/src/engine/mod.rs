//! Table engine: view state composition and the visible-row pipeline

mod hooks;
mod page;
mod selection;
mod sort;
mod table;
mod view;

pub use hooks::*;
pub use page::*;
pub use selection::*;
pub use sort::*;
pub use table::*;
pub use view::*;
