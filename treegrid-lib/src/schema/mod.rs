//! Column schema and structural validation

mod column;

pub use column::*;

use std::collections::HashSet;

use crate::error::SchemaError;

/// A validated, ordered collection of column schemas.
///
/// Construction checks the structural invariants once so the view pipeline
/// never has to: ids are non-empty and unique, headers are non-empty, and a
/// select-filtered column carries at least one option.
///
/// # Example
///
/// ```
/// use treegrid_lib::schema::ColumnSchema;
/// use treegrid_lib::schema::Schema;
///
/// let schema = Schema::new(vec![
///     ColumnSchema::text("name", "Name"),
///     ColumnSchema::number("price", "Price"),
/// ])
/// .unwrap();
/// assert_eq!(schema.columns().len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Schema {
    columns: Vec<ColumnSchema>,
}

impl Schema {
    /// Validates the given columns and wraps them into a schema.
    pub fn new(columns: Vec<ColumnSchema>) -> Result<Self, SchemaError> {
        let mut seen = HashSet::new();

        for col in &columns {
            if col.id.is_empty() {
                return Err(SchemaError::EmptyColumnId);
            }
            if col.header.is_empty() {
                return Err(SchemaError::EmptyHeader { id: col.id.clone() });
            }
            if !seen.insert(col.id.as_str()) {
                return Err(SchemaError::DuplicateColumn { id: col.id.clone() });
            }
            if col.filter_type == FilterType::Select && col.options.is_empty() {
                return Err(SchemaError::MissingOptions { id: col.id.clone() });
            }
        }

        Ok(Self { columns })
    }

    /// Returns the ordered column schemas.
    pub fn columns(&self) -> &[ColumnSchema] {
        &self.columns
    }

    /// Looks up a column by id.
    pub fn get(&self, id: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_schema() {
        let schema = Schema::new(vec![
            ColumnSchema::text("name", "Name"),
            ColumnSchema::select("category", "Category", ["Drinks"]),
        ]);
        assert!(schema.is_ok());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = Schema::new(vec![
            ColumnSchema::text("name", "Name"),
            ColumnSchema::number("name", "Name Again"),
        ])
        .unwrap_err();
        assert_eq!(
            err,
            SchemaError::DuplicateColumn {
                id: "name".to_string()
            }
        );
    }

    #[test]
    fn test_select_without_options_rejected() {
        let col = ColumnSchema::new(
            "category",
            "Category",
            SemanticType::Select,
            FilterType::Select,
        );
        let err = Schema::new(vec![col]).unwrap_err();
        assert_eq!(
            err,
            SchemaError::MissingOptions {
                id: "category".to_string()
            }
        );
    }

    #[test]
    fn test_empty_id_rejected() {
        let err = Schema::new(vec![ColumnSchema::text("", "Name")]).unwrap_err();
        assert_eq!(err, SchemaError::EmptyColumnId);
    }

    #[test]
    fn test_lookup_by_id() {
        let schema = Schema::new(vec![ColumnSchema::text("name", "Name")]).unwrap();
        assert!(schema.get("name").is_some());
        assert!(schema.get("price").is_none());
    }
}
