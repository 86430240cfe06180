//! Active filter set

use crate::model::Value;

/// An installed column filter.
#[derive(Debug, Clone, PartialEq)]
pub struct ActiveFilter {
    /// The filtered column's id.
    pub column_id: String,
    /// The raw filter value.
    pub value: Value,
}

/// The set of active filters, at most one per column.
///
/// Setting a value for a column replaces any previous filter on that column.
/// A blank value is never installed; setting one clears the column's filter
/// instead.
///
/// # Example
///
/// ```
/// use treegrid_lib::filter::ActiveFilterSet;
/// use treegrid_lib::model::Value;
///
/// let mut filters = ActiveFilterSet::new();
/// filters.set("price", Value::from("10"));
/// filters.set("price", Value::from("20"));
/// assert_eq!(filters.len(), 1);
///
/// filters.set("price", Value::Null);
/// assert!(filters.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ActiveFilterSet {
    filters: Vec<ActiveFilter>,
}

impl ActiveFilterSet {
    /// Creates an empty filter set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Installs or replaces the filter for a column.
    ///
    /// Returns `true` if a filter is active for the column afterwards. Blank
    /// values clear the column's filter.
    pub fn set(&mut self, column_id: impl Into<String>, value: Value) -> bool {
        let column_id = column_id.into();
        self.filters.retain(|f| f.column_id != column_id);

        if is_blank(&value) {
            return false;
        }

        self.filters.push(ActiveFilter { column_id, value });
        true
    }

    /// Drops the filter for a column, if any.
    pub fn remove(&mut self, column_id: &str) {
        self.filters.retain(|f| f.column_id != column_id);
    }

    /// Returns the filter installed for a column, if any.
    pub fn get(&self, column_id: &str) -> Option<&ActiveFilter> {
        self.filters.iter().find(|f| f.column_id == column_id)
    }

    /// Iterates over the active filters in installation order.
    pub fn iter(&self) -> impl Iterator<Item = &ActiveFilter> {
        self.filters.iter()
    }

    /// Removes all filters.
    pub fn clear(&mut self) {
        self.filters.clear();
    }

    /// Returns the number of active filters.
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    /// Returns `true` if no filters are active.
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }
}

fn is_blank(value: &Value) -> bool {
    value.is_null() || value.normalize().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_replaces_per_column() {
        let mut filters = ActiveFilterSet::new();
        assert!(filters.set("name", Value::from("rum")));
        assert!(filters.set("price", Value::from("10")));
        assert!(filters.set("name", Value::from("beer")));

        assert_eq!(filters.len(), 2);
        assert_eq!(filters.get("name").unwrap().value, Value::from("beer"));
    }

    #[test]
    fn test_blank_value_clears() {
        let mut filters = ActiveFilterSet::new();
        filters.set("name", Value::from("rum"));
        assert!(!filters.set("name", Value::from("")));
        assert!(filters.is_empty());
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut filters = ActiveFilterSet::new();
        filters.set("name", Value::from("rum"));
        filters.remove("price");
        assert_eq!(filters.len(), 1);
    }
}
