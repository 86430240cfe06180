//! Row selection state

use std::collections::HashSet;

use crate::model::RowId;

/// The set of selected row identifiers.
///
/// The "all selected" and "some selected" summaries are derived by the view
/// pipeline from the rows currently in view; they are never stored here.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SelectionState {
    selected: HashSet<RowId>,
}

impl SelectionState {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the row is selected.
    pub fn is_selected(&self, id: &RowId) -> bool {
        self.selected.contains(id)
    }

    /// Marks a row selected.
    pub fn select(&mut self, id: RowId) {
        self.selected.insert(id);
    }

    /// Unmarks a row.
    pub fn deselect(&mut self, id: &RowId) {
        self.selected.remove(id);
    }

    /// Toggles a row's selection.
    pub fn toggle(&mut self, id: &RowId) {
        if !self.selected.remove(id) {
            self.selected.insert(id.clone());
        }
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.selected.clear();
    }

    /// Returns the number of selected rows.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_round_trip() {
        let mut selection = SelectionState::new();
        let id = RowId::root(1);
        selection.toggle(&id);
        assert!(selection.is_selected(&id));
        selection.toggle(&id);
        assert!(!selection.is_selected(&id));
    }
}
