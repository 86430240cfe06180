//! Record acquisition errors

/// Error type for record source fetches.
///
/// The engine itself performs no I/O; this error only surfaces through the
/// source collaborator's terminal `Failed` state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// The fetch failed.
    #[error("record fetch failed: {reason}")]
    Fetch { reason: String },
}

impl SourceError {
    /// Creates a new fetch error.
    pub fn fetch(reason: impl Into<String>) -> Self {
        Self::Fetch {
            reason: reason.into(),
        }
    }
}
