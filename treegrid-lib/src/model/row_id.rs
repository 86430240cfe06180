//! Hierarchical row identifiers

use std::fmt;

/// A dot-separated path identifying a row's position in the view tree.
///
/// Top-level rows are numbered `0, 1, 2, …`; child `k` under parent `p` is
/// `p.k`. A row's identifier always extends its parent's identifier with a
/// dot, which is what makes bulk collapse a simple prefix test.
///
/// Identifiers are assigned by the view pipeline after filtering and
/// sorting, so they describe positions in the current view, not in the raw
/// input forest.
///
/// # Example
///
/// ```
/// use treegrid_lib::model::RowId;
///
/// let parent = RowId::root(0);
/// let child = parent.child(1);
/// assert_eq!(child.as_str(), "0.1");
/// assert!(child.is_descendant_of(&parent));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(String);

impl RowId {
    /// Creates the identifier of the top-level row at `index`.
    pub fn root(index: usize) -> Self {
        RowId(index.to_string())
    }

    /// Creates the identifier of this row's child at `index`.
    pub fn child(&self, index: usize) -> Self {
        RowId(format!("{}.{}", self.0, index))
    }

    /// Returns the identifier as a string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the tree depth: `0` for top-level rows.
    pub fn depth(&self) -> usize {
        self.0.matches('.').count()
    }

    /// Returns `true` if this row lies strictly below `other` in the tree.
    pub fn is_descendant_of(&self, other: &RowId) -> bool {
        self.0.len() > other.0.len()
            && self.0.starts_with(other.0.as_str())
            && self.0.as_bytes()[other.0.len()] == b'.'
    }

    /// Splits the identifier into its per-level indices.
    ///
    /// Returns `None` if any segment is not a number.
    pub fn segments(&self) -> Option<Vec<usize>> {
        self.0.split('.').map(|s| s.parse().ok()).collect()
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RowId {
    fn from(s: &str) -> Self {
        RowId(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_child_extends_parent() {
        let id = RowId::root(2).child(0).child(3);
        assert_eq!(id.as_str(), "2.0.3");
        assert_eq!(id.depth(), 2);
    }

    #[test]
    fn test_descendant_requires_dot_boundary() {
        let parent = RowId::from("1");
        assert!(RowId::from("1.0").is_descendant_of(&parent));
        assert!(RowId::from("1.0.2").is_descendant_of(&parent));
        // "10" shares the prefix characters but is a sibling, not a child
        assert!(!RowId::from("10").is_descendant_of(&parent));
        assert!(!RowId::from("1").is_descendant_of(&parent));
    }

    #[test]
    fn test_segments() {
        assert_eq!(RowId::from("0.1.2").segments(), Some(vec![0, 1, 2]));
        assert_eq!(RowId::from("0.x").segments(), None);
    }
}
