//! Schema construction errors

/// Error type for malformed column schemas.
///
/// Schema problems are rejected when the schema is constructed, never
/// deferred into a failure during view computation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    /// A column id appears more than once in the schema.
    #[error("duplicate column id '{id}'")]
    DuplicateColumn { id: String },

    /// A column was declared with an empty id.
    #[error("column id must not be empty")]
    EmptyColumnId,

    /// A column was declared with an empty display header.
    #[error("column '{id}' has an empty header")]
    EmptyHeader { id: String },

    /// A select-filtered column is missing its option values.
    #[error("select column '{id}' requires at least one option")]
    MissingOptions { id: String },
}
