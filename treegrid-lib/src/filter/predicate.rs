//! Filter predicate compiler and recursive subtree matcher

use crate::model::Record;
use crate::model::Value;
use crate::schema::ColumnSchema;
use crate::schema::FilterType;

/// A compiled predicate over a single cell value.
pub type Predicate = Box<dyn Fn(&Value) -> bool + Send + Sync>;

/// Compiles a filter value into a predicate for the given filter type.
///
/// Coercion failures never error: a number filter whose side cannot be
/// coerced simply never matches.
///
/// - `Number`: both sides coerced to a number, matched on equality.
/// - `Date`: the cell's ISO-normalized string must start with the literal
///   filter string, giving "filter by day" semantics against timestamps.
/// - `Select`: exact string equality after coercing both sides.
/// - `Text`: case-insensitive substring containment.
pub fn compile(filter_type: FilterType, filter_value: &Value) -> Predicate {
    match filter_type {
        FilterType::Number => {
            let wanted = filter_value.as_number();
            Box::new(move |v| match (wanted, v.as_number()) {
                (Some(w), Some(n)) => w == n,
                _ => false,
            })
        }
        FilterType::Date => {
            let prefix = filter_value.normalize();
            Box::new(move |v| v.normalize().starts_with(&prefix))
        }
        FilterType::Select => {
            let wanted = filter_value.normalize();
            Box::new(move |v| v.normalize() == wanted)
        }
        FilterType::Text => {
            let needle = filter_value.normalize().to_lowercase();
            Box::new(move |v| v.normalize().to_lowercase().contains(&needle))
        }
    }
}

/// Compiles a predicate appropriate for the given column.
pub fn predicate_for_column(column: &ColumnSchema, filter_value: &Value) -> Predicate {
    compile(column.filter_type, filter_value)
}

/// Tests a record's subtree against a compiled predicate.
///
/// The predicate runs against the record's own accessor value first, then
/// depth-first over every descendant. A match anywhere keeps the whole
/// record; callers never prune non-matching children out of a retained
/// subtree.
pub fn recursive_match(record: &Record, accessor_key: &str, predicate: &Predicate) -> bool {
    if predicate(record.accessor(accessor_key)) {
        return true;
    }
    record
        .children()
        .iter()
        .any(|child| recursive_match(child, accessor_key, predicate))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_predicate_coerces_strings() {
        let pred = compile(FilterType::Number, &Value::from(10i64));
        assert!(pred(&Value::from("10")));
        assert!(pred(&Value::Int(10)));
        assert!(!pred(&Value::from("20")));
        assert!(!pred(&Value::from("ten")));
        assert!(!pred(&Value::Null));
    }

    #[test]
    fn test_number_predicate_with_bad_filter_never_matches() {
        let pred = compile(FilterType::Number, &Value::from("not a number"));
        assert!(!pred(&Value::Int(0)));
        assert!(!pred(&Value::from("not a number")));
    }

    #[test]
    fn test_date_predicate_is_prefix_match() {
        let dt: chrono::DateTime<chrono::Utc> = "2024-03-01T12:30:00Z".parse().unwrap();
        let pred = compile(FilterType::Date, &Value::from("2024-03-01"));
        assert!(pred(&Value::DateTime(dt)));
        assert!(pred(&Value::from("2024-03-01T09:00:00.000Z")));
        assert!(!pred(&Value::from("2024-03-02T00:00:00.000Z")));
    }

    #[test]
    fn test_select_predicate_is_exact() {
        let pred = compile(FilterType::Select, &Value::from("Drinks"));
        assert!(pred(&Value::from("Drinks")));
        assert!(!pred(&Value::from("drinks")));
        assert!(!pred(&Value::from("Drinks and more")));
    }

    #[test]
    fn test_text_predicate_is_case_insensitive_substring() {
        let pred = compile(FilterType::Text, &Value::from("RUM"));
        assert!(pred(&Value::from("Premium Rum")));
        assert!(!pred(&Value::from("Whisky")));
    }

    #[test]
    fn test_recursive_match_finds_leaf() {
        let forest = Record::new().set("name", "Drinks").child(
            Record::new()
                .set("name", "Spirits")
                .child(Record::new().set("name", "Rum")),
        );

        let pred = compile(FilterType::Text, &Value::from("rum"));
        assert!(recursive_match(&forest, "name", &pred));

        let pred = compile(FilterType::Text, &Value::from("wine"));
        assert!(!recursive_match(&forest, "name", &pred));
    }
}
