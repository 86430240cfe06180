//! Filter bar controller

use crate::filter::ActiveFilterSet;
use crate::model::Value;
use crate::schema::FilterType;
use crate::schema::Schema;

/// UI-facing controller for building one filter at a time: pick a column,
/// enter a value shaped by that column's filter type, apply.
///
/// The pending value is cleared whenever a different column is selected;
/// apply is disabled until both a column and a non-blank value are present.
///
/// # Example
///
/// ```
/// use treegrid_lib::bar::FilterBar;
/// use treegrid_lib::filter::ActiveFilterSet;
/// use treegrid_lib::model::Value;
/// use treegrid_lib::schema::ColumnSchema;
/// use treegrid_lib::schema::Schema;
///
/// let schema = Schema::new(vec![ColumnSchema::number("price", "Price")]).unwrap();
/// let mut filters = ActiveFilterSet::new();
/// let mut bar = FilterBar::new();
///
/// assert!(!bar.can_apply());
/// bar.select_column("price");
/// bar.set_value(Value::from("10"));
/// assert!(bar.apply(&mut filters));
/// assert!(filters.get("price").is_some());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FilterBar {
    selected: Option<String>,
    pending: Value,
}

impl FilterBar {
    /// Creates a bar with no column selected.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the column the next filter applies to, clearing any pending
    /// value.
    pub fn select_column(&mut self, id: impl Into<String>) {
        let id = id.into();
        if self.selected.as_deref() != Some(id.as_str()) {
            self.pending = Value::Null;
        }
        self.selected = Some(id);
    }

    /// Deselects the column and clears the pending value.
    pub fn clear_column(&mut self) {
        self.selected = None;
        self.pending = Value::Null;
    }

    /// Returns the selected column id.
    pub fn selected_column(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Sets the pending filter value.
    pub fn set_value(&mut self, value: Value) {
        self.pending = value;
    }

    /// Returns the pending filter value.
    pub fn value(&self) -> &Value {
        &self.pending
    }

    /// The input shape the value control should accept, dictated solely by
    /// the selected column's filter type. `None` while no column is
    /// selected.
    pub fn input_kind(&self, schema: &Schema) -> Option<FilterType> {
        let id = self.selected.as_deref()?;
        Some(schema.get(id)?.filter_type)
    }

    /// Returns `true` when both a column and a non-blank value are pending.
    pub fn can_apply(&self) -> bool {
        self.selected.is_some() && !self.pending.is_null() && !self.pending.normalize().is_empty()
    }

    /// Installs the pending filter, replacing any existing filter on the
    /// selected column, and clears the pending value.
    ///
    /// Returns `false` (and installs nothing) when apply is disabled.
    pub fn apply(&mut self, filters: &mut ActiveFilterSet) -> bool {
        if !self.can_apply() {
            return false;
        }
        let column_id = self.selected.clone().unwrap_or_default();
        let value = std::mem::take(&mut self.pending);
        filters.set(column_id, value)
    }

    /// Drops a column's active filter.
    pub fn remove(&self, filters: &mut ActiveFilterSet, column_id: &str) {
        filters.remove(column_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ColumnSchema;

    fn schema() -> Schema {
        Schema::new(vec![
            ColumnSchema::text("name", "Name"),
            ColumnSchema::number("price", "Price"),
        ])
        .unwrap()
    }

    #[test]
    fn test_apply_disabled_without_column_or_value() {
        let mut bar = FilterBar::new();
        let mut filters = ActiveFilterSet::new();

        assert!(!bar.apply(&mut filters));

        bar.select_column("name");
        assert!(!bar.can_apply());

        bar.set_value(Value::from(""));
        assert!(!bar.apply(&mut filters));
        assert!(filters.is_empty());
    }

    #[test]
    fn test_apply_replaces_and_clears_pending() {
        let mut bar = FilterBar::new();
        let mut filters = ActiveFilterSet::new();

        bar.select_column("price");
        bar.set_value(Value::from("10"));
        assert!(bar.apply(&mut filters));
        // value consumed, column still selected
        assert!(!bar.can_apply());
        assert_eq!(bar.selected_column(), Some("price"));

        bar.set_value(Value::from("20"));
        assert!(bar.apply(&mut filters));
        assert_eq!(filters.len(), 1);
        assert_eq!(filters.get("price").unwrap().value, Value::from("20"));
    }

    #[test]
    fn test_selecting_new_column_clears_pending() {
        let mut bar = FilterBar::new();
        bar.select_column("name");
        bar.set_value(Value::from("rum"));

        bar.select_column("price");
        assert!(bar.value().is_null());

        // re-selecting the same column keeps the pending value
        bar.set_value(Value::from("10"));
        bar.select_column("price");
        assert_eq!(bar.value(), &Value::from("10"));
    }

    #[test]
    fn test_input_kind_follows_selected_column() {
        let schema = schema();
        let mut bar = FilterBar::new();
        assert_eq!(bar.input_kind(&schema), None);

        bar.select_column("price");
        assert_eq!(bar.input_kind(&schema), Some(FilterType::Number));

        bar.select_column("name");
        assert_eq!(bar.input_kind(&schema), Some(FilterType::Text));
    }
}
