//! Expansion state tracking

use std::collections::HashSet;

use crate::model::Record;
use crate::model::RowId;

/// Tracks which rows are expanded; an absent id means collapsed.
///
/// The state is transient and owned by one table instance per rendering
/// session. It is not reset when records are replaced; callers reset it on
/// data reload.
///
/// # Example
///
/// ```
/// use treegrid_lib::expand::ExpansionState;
/// use treegrid_lib::model::RowId;
///
/// let mut expansion = ExpansionState::new();
/// let parent = RowId::root(0);
/// expansion.expand(parent.clone());
/// expansion.expand(parent.child(1));
///
/// expansion.collapse(&parent);
/// assert!(expansion.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpansionState {
    open: HashSet<RowId>,
}

impl ExpansionState {
    /// Creates a fully-collapsed state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the row is expanded.
    pub fn is_expanded(&self, id: &RowId) -> bool {
        self.open.contains(id)
    }

    /// Expands a single row, leaving sibling branches untouched.
    pub fn expand(&mut self, id: RowId) {
        self.open.insert(id);
    }

    /// Collapses a row together with its entire recorded subtree.
    ///
    /// Every entry whose id is `id` or extends `id` with a dot is removed,
    /// so previously-expanded grandchildren don't spring back open when the
    /// branch is re-expanded.
    pub fn collapse(&mut self, id: &RowId) {
        self.open.retain(|k| k != id && !k.is_descendant_of(id));
    }

    /// Toggles a single row.
    pub fn toggle(&mut self, id: &RowId) {
        if self.is_expanded(id) {
            self.collapse(id);
        } else {
            self.expand(id.clone());
        }
    }

    /// Toggles every row in the given top-level row list.
    ///
    /// The list is the view's current top-level rows (the current page when
    /// paginated). State is "all open" iff every listed row with children is
    /// expanded. When not all open, every expandable row is expanded
    /// together with all of its expandable descendants; when all open, each
    /// listed expandable row collapses along with its recorded subtree.
    pub fn toggle_all(&mut self, rows: &[(RowId, &Record)]) {
        if self.all_open(rows) {
            for (id, record) in rows {
                if record.has_children() {
                    self.collapse(id);
                }
            }
        } else {
            for (id, record) in rows {
                self.expand_recursive(id, record);
            }
        }
    }

    /// Returns `true` iff every expandable row in the list is expanded.
    ///
    /// An empty or toggle-free list is never "all open".
    pub fn all_open(&self, rows: &[(RowId, &Record)]) -> bool {
        let mut expandable = rows.iter().filter(|(_, r)| r.has_children()).peekable();
        expandable.peek().is_some() && expandable.all(|(id, _)| self.is_expanded(id))
    }

    fn expand_recursive(&mut self, id: &RowId, record: &Record) {
        if !record.has_children() {
            return;
        }
        self.open.insert(id.clone());
        for (index, child) in record.children().iter().enumerate() {
            self.expand_recursive(&id.child(index), child);
        }
    }

    /// Collapses everything.
    pub fn clear(&mut self) {
        self.open.clear();
    }

    /// Returns the number of expanded rows.
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Returns `true` if nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_removes_whole_branch() {
        let mut state = ExpansionState::new();
        state.expand(RowId::from("0"));
        state.expand(RowId::from("0.1"));
        state.expand(RowId::from("0.1.2"));
        state.expand(RowId::from("1"));

        state.collapse(&RowId::from("0"));

        assert!(!state.is_expanded(&RowId::from("0")));
        assert!(!state.is_expanded(&RowId::from("0.1")));
        assert!(!state.is_expanded(&RowId::from("0.1.2")));
        assert!(state.is_expanded(&RowId::from("1")));
    }

    #[test]
    fn test_collapse_respects_dot_boundary() {
        let mut state = ExpansionState::new();
        state.expand(RowId::from("1"));
        state.expand(RowId::from("10"));

        state.collapse(&RowId::from("1"));
        assert!(state.is_expanded(&RowId::from("10")));
    }

    #[test]
    fn test_expand_leaves_siblings_untouched() {
        let mut state = ExpansionState::new();
        state.expand(RowId::from("0.0"));
        state.expand(RowId::from("0.1"));

        state.toggle(&RowId::from("2"));

        assert!(state.is_expanded(&RowId::from("0.0")));
        assert!(state.is_expanded(&RowId::from("0.1")));
        assert!(state.is_expanded(&RowId::from("2")));
    }

    #[test]
    fn test_toggle_all_expands_then_collapses() {
        let parent = Record::new()
            .set("name", "Drinks")
            .child(Record::new().set("name", "Beer").child(Record::new()));
        let leaf = Record::new().set("name", "Bread");

        let rows = vec![(RowId::root(0), &parent), (RowId::root(1), &leaf)];

        let mut state = ExpansionState::new();
        state.toggle_all(&rows);
        // parent and its expandable child opened, leaf untouched
        assert!(state.is_expanded(&RowId::from("0")));
        assert!(state.is_expanded(&RowId::from("0.0")));
        assert!(!state.is_expanded(&RowId::from("1")));

        state.toggle_all(&rows);
        assert!(state.is_empty());
    }

    #[test]
    fn test_toggle_all_completes_partial_expansion() {
        let a = Record::new().child(Record::new());
        let b = Record::new().child(Record::new());
        let c = Record::new().child(Record::new());
        let rows = vec![
            (RowId::root(0), &a),
            (RowId::root(1), &b),
            (RowId::root(2), &c),
        ];

        let mut state = ExpansionState::new();
        state.expand(RowId::root(0));
        state.expand(RowId::root(1));

        // two of three open: one toggle opens the third instead of collapsing
        state.toggle_all(&rows);
        assert!(state.all_open(&rows));
    }
}
