//! Column generation: renderable column definitions from a schema

use crate::filter::Predicate;
use crate::model::Value;
use crate::schema::FilterType;
use crate::schema::Schema;
use crate::schema::SemanticType;

/// The id of the synthetic expander control column.
pub const EXPANDER_COLUMN_ID: &str = "expander";

/// Placeholder image used when a custom cell's reference is absent or
/// malformed.
pub const FALLBACK_IMAGE: &str =
    "https://images.unsplash.com/photo-1541976076758-347942db1970?q=80&w=600&auto=format&fit=crop";

/// Indentation of the expander spacer, per tree level.
pub const EXPANDER_INDENT_STEP: u16 = 12;
/// Base left padding of the first data cell.
pub const CELL_BASE_INDENT: u16 = 16;
/// Extra left padding of the first data cell, per tree level.
pub const CELL_INDENT_STEP: u16 = 20;

/// How a column's cells are rendered, resolved once at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellRender {
    /// Plain text.
    Text,
    /// Numeric value, displayed as text.
    Number,
    /// Date value, displayed in ISO form.
    Date,
    /// One of a fixed option set.
    Enum,
    /// Custom rendering: an image reference resolved through
    /// [`resolve_image`].
    Custom,
}

impl From<SemanticType> for CellRender {
    fn from(semantic: SemanticType) -> Self {
        match semantic {
            SemanticType::Text => CellRender::Text,
            SemanticType::Number => CellRender::Number,
            SemanticType::Date => CellRender::Date,
            SemanticType::Select => CellRender::Enum,
            SemanticType::Custom => CellRender::Custom,
        }
    }
}

/// What a generated column is.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnKind {
    /// The synthetic expand/collapse control column. Its header hosts the
    /// toggle-all control; its cells host per-row toggles or
    /// indentation-preserving spacers.
    Expander,
    /// A data column backed by a schema entry.
    Data {
        /// Record field the column reads.
        accessor_key: String,
        /// Sort semantics for the column's values.
        semantic_type: SemanticType,
        /// Reified render variant.
        render: CellRender,
        /// Filter input shape.
        filter_type: FilterType,
        /// Option values for enumerated columns.
        options: Vec<String>,
    },
}

/// A renderable column definition produced from the schema.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnDef {
    /// Column identifier; `expander` for the synthetic control column.
    pub id: String,
    /// Display header.
    pub header: String,
    /// Data column or expander control.
    pub kind: ColumnKind,
}

impl ColumnDef {
    /// Returns `true` for columns that take part in sorting.
    pub fn sortable(&self) -> bool {
        matches!(self.kind, ColumnKind::Data { .. })
    }

    /// Returns `true` for columns that accept a filter.
    pub fn filterable(&self) -> bool {
        matches!(self.kind, ColumnKind::Data { .. })
    }

    /// Compiles this column's filter predicate for a raw filter value.
    ///
    /// Returns `None` for the expander column.
    pub fn predicate(&self, filter_value: &Value) -> Option<Predicate> {
        match &self.kind {
            ColumnKind::Expander => None,
            ColumnKind::Data { filter_type, .. } => {
                Some(crate::filter::compile(*filter_type, filter_value))
            }
        }
    }
}

/// Generates one column definition per schema entry.
///
/// When `expansion_enabled`, a synthetic expander column is prepended; it
/// never sorts or filters.
pub fn generate(schema: &Schema, expansion_enabled: bool) -> Vec<ColumnDef> {
    let mut columns = Vec::with_capacity(schema.columns().len() + 1);

    if expansion_enabled {
        columns.push(ColumnDef {
            id: EXPANDER_COLUMN_ID.to_string(),
            header: String::new(),
            kind: ColumnKind::Expander,
        });
    }

    for col in schema.columns() {
        columns.push(ColumnDef {
            id: col.id.clone(),
            header: col.header.clone(),
            kind: ColumnKind::Data {
                accessor_key: col.accessor_key().to_string(),
                semantic_type: col.semantic_type,
                render: CellRender::from(col.semantic_type),
                filter_type: col.filter_type,
                options: col.options.clone(),
            },
        });
    }

    columns
}

/// Resolves a custom cell's image reference.
///
/// Values that don't look like an URL fall back to [`FALLBACK_IMAGE`].
pub fn resolve_image(value: &Value) -> String {
    let raw = value.normalize();
    if raw.starts_with("http") {
        raw
    } else {
        FALLBACK_IMAGE.to_string()
    }
}

/// Width of the expander spacer at a given depth.
pub fn expander_indent(depth: usize) -> u16 {
    depth as u16 * EXPANDER_INDENT_STEP
}

/// Left padding of the first data cell at a given depth.
pub fn cell_indent(depth: usize) -> u16 {
    CELL_BASE_INDENT + depth as u16 * CELL_INDENT_STEP
}
