//! Visible-row projection consumed by the rendering layer

use crate::columns::ColumnDef;
use crate::model::RowId;

use super::SortState;

/// Rendered content of a single cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellContent {
    /// Nothing to draw; the expander column's cells, whose toggle/spacer is
    /// derived from the row's flags.
    Empty,
    /// Plain text.
    Text(String),
    /// A resolved image reference.
    Image {
        /// Resolved source URL, falling back to the placeholder when the
        /// record's reference was absent or malformed.
        src: String,
    },
}

/// A rendered cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    /// The owning column's id.
    pub column_id: String,
    /// Rendered content.
    pub content: CellContent,
}

/// A visible row with everything the renderer needs: indentation depth,
/// toggle and checkbox state, and rendered cells. The renderer never has to
/// re-derive tree structure.
#[derive(Debug, Clone, PartialEq)]
pub struct BodyRow {
    /// Hierarchical row identifier.
    pub id: RowId,
    /// Tree depth; zero for top-level rows.
    pub depth: usize,
    /// Whether the row has children and expansion is enabled.
    pub expandable: bool,
    /// Whether the row is currently expanded.
    pub expanded: bool,
    /// Whether the row is currently selected.
    pub selected: bool,
    /// Rendered cells, one per column definition.
    pub cells: Vec<Cell>,
}

/// The composed view: header columns, visible body rows, and derived
/// footer/header state.
#[derive(Debug, Clone, PartialEq)]
pub struct TableView {
    /// Renderable column definitions, expander column included when
    /// expansion is enabled.
    pub columns: Vec<ColumnDef>,
    /// Visible rows for the current page, parents followed by their
    /// expanded descendants.
    pub body_rows: Vec<BodyRow>,
    /// Top-level rows surviving the filter stage, across all pages.
    pub top_level_count: usize,
    /// Number of pages; zero when the filtered result is empty and
    /// pagination is enabled.
    pub page_count: usize,
    /// The active sort, when sorting is enabled.
    pub sort: Option<SortState>,
    /// `true` iff every row in the post-filter view is selected.
    pub is_all_selected: bool,
    /// `true` iff at least one but not all rows are selected
    /// (indeterminate checkbox).
    pub is_some_selected: bool,
}

impl TableView {
    /// Looks up a body row by id.
    pub fn row(&self, id: &RowId) -> Option<&BodyRow> {
        self.body_rows.iter().find(|r| &r.id == id)
    }

    /// Convenience accessor for a row's rendered text cell.
    pub fn cell_text(&self, id: &RowId, column_id: &str) -> Option<&str> {
        let row = self.row(id)?;
        let cell = row.cells.iter().find(|c| c.column_id == column_id)?;
        match &cell.content {
            CellContent::Text(text) => Some(text),
            _ => None,
        }
    }
}
