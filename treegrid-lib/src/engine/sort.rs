//! Sort state and value ordering

use std::cmp::Ordering;

use crate::model::Value;
use crate::schema::SemanticType;

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9).
    Asc,
    /// Descending order (Z-A, 9-0).
    Desc,
}

/// The active sort: one column and a direction.
///
/// Sorting applies to top-level records only; child ordering is always
/// preserved as authored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortState {
    /// The sorted column's id.
    pub column_id: String,
    /// Sort direction.
    pub direction: Direction,
}

impl SortState {
    /// Creates an ascending sort on a column.
    pub fn asc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: Direction::Asc,
        }
    }

    /// Creates a descending sort on a column.
    pub fn desc(column_id: impl Into<String>) -> Self {
        Self {
            column_id: column_id.into(),
            direction: Direction::Desc,
        }
    }
}

/// Orders two cell values consistently with a column's semantic type.
///
/// Numbers compare numerically with non-coercible values first, dates
/// chronologically, everything else lexicographically on the normalized
/// string form. ISO-normalized date strings compare chronologically by
/// construction.
pub fn compare_values(semantic: SemanticType, a: &Value, b: &Value) -> Ordering {
    match semantic {
        SemanticType::Number => a
            .as_number()
            .partial_cmp(&b.as_number())
            .unwrap_or(Ordering::Equal),
        SemanticType::Date => match (a, b) {
            (Value::DateTime(x), Value::DateTime(y)) => x.cmp(y),
            _ => a.normalize().cmp(&b.normalize()),
        },
        _ => a.normalize().cmp(&b.normalize()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_compare_coerces_strings() {
        assert_eq!(
            compare_values(SemanticType::Number, &Value::from("9"), &Value::from("10")),
            Ordering::Less
        );
        // lexicographic would say otherwise
        assert_eq!(
            compare_values(SemanticType::Text, &Value::from("9"), &Value::from("10")),
            Ordering::Greater
        );
    }

    #[test]
    fn test_non_numeric_sorts_first() {
        assert_eq!(
            compare_values(SemanticType::Number, &Value::Null, &Value::Int(0)),
            Ordering::Less
        );
    }

    #[test]
    fn test_date_compare_is_chronological() {
        let early: chrono::DateTime<chrono::Utc> = "2024-01-02T00:00:00Z".parse().unwrap();
        let late: chrono::DateTime<chrono::Utc> = "2024-01-10T00:00:00Z".parse().unwrap();
        assert_eq!(
            compare_values(
                SemanticType::Date,
                &Value::DateTime(early),
                &Value::DateTime(late)
            ),
            Ordering::Less
        );
    }
}
