//! Column schema entries

use serde::Deserialize;
use serde::Serialize;

/// The semantic type of a column's values, driving cell rendering and sort
/// order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SemanticType {
    /// Free text.
    #[default]
    Text,
    /// Numeric values.
    Number,
    /// Date/time values.
    Date,
    /// One of a fixed set of string options.
    Select,
    /// Custom-rendered values, e.g. image references.
    Custom,
}

/// The filter input shape accepted for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    /// Case-insensitive substring match.
    #[default]
    Text,
    /// Numeric equality after coercion.
    Number,
    /// ISO-8601 prefix match ("filter by day").
    Date,
    /// Exact match against one of the column's options.
    Select,
}

/// Declarative description of a single table column.
///
/// Constructor shortcuts cover the common shapes; `accessor_key` defaults to
/// the column id when not set.
///
/// # Example
///
/// ```
/// use treegrid_lib::schema::ColumnSchema;
///
/// let price = ColumnSchema::number("price", "Price");
/// let category = ColumnSchema::select("category", "Category", ["Drinks", "Food"]);
/// assert_eq!(price.accessor_key(), "price");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnSchema {
    /// Unique column identifier.
    pub id: String,
    /// Display label for the header.
    pub header: String,
    /// Record field to read; defaults to `id` when `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessor_key: Option<String>,
    /// Semantic type driving rendering and sort order.
    #[serde(default)]
    pub semantic_type: SemanticType,
    /// Filter input shape.
    #[serde(default)]
    pub filter_type: FilterType,
    /// Allowed values; required and non-empty when `filter_type` is
    /// `Select`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
}

impl ColumnSchema {
    /// Creates a column with explicit semantic and filter types.
    pub fn new(
        id: impl Into<String>,
        header: impl Into<String>,
        semantic_type: SemanticType,
        filter_type: FilterType,
    ) -> Self {
        Self {
            id: id.into(),
            header: header.into(),
            accessor_key: None,
            semantic_type,
            filter_type,
            options: Vec::new(),
        }
    }

    /// Creates a free-text column.
    pub fn text(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self::new(id, header, SemanticType::Text, FilterType::Text)
    }

    /// Creates a numeric column.
    pub fn number(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self::new(id, header, SemanticType::Number, FilterType::Number)
    }

    /// Creates a date column.
    pub fn date(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self::new(id, header, SemanticType::Date, FilterType::Date)
    }

    /// Creates an enumerated column with its allowed option values.
    pub fn select<I, S>(id: impl Into<String>, header: impl Into<String>, options: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut col = Self::new(id, header, SemanticType::Select, FilterType::Select);
        col.options = options.into_iter().map(Into::into).collect();
        col
    }

    /// Creates a custom-rendered column (text-filtered).
    pub fn custom(id: impl Into<String>, header: impl Into<String>) -> Self {
        Self::new(id, header, SemanticType::Custom, FilterType::Text)
    }

    /// Overrides the record field this column reads (builder pattern).
    pub fn with_accessor(mut self, key: impl Into<String>) -> Self {
        self.accessor_key = Some(key.into());
        self
    }

    /// Returns the record field this column reads.
    pub fn accessor_key(&self) -> &str {
        self.accessor_key.as_deref().unwrap_or(&self.id)
    }
}
