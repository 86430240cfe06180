//! Record acquisition collaborator
//!
//! The engine performs no I/O; it receives a completed record forest and is
//! blind to how it was obtained. This module is the async boundary in front
//! of it: a fetch trait, the loading/loaded/failed projection a host tracks,
//! and a mock source for demos and tests.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::SourceError;
use crate::model::Record;

/// Loading lifecycle of an asynchronously fetched record forest.
///
/// `Failed` is terminal and distinct from `Loading`; the table engine is
/// simply not invoked until a `Loaded` state exists.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<T> {
    /// The fetch is in flight.
    Loading,
    /// The fetch completed.
    Loaded(T),
    /// The fetch failed.
    Failed(SourceError),
}

impl<T> LoadState<T> {
    /// Returns `true` while the fetch is in flight.
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }

    /// Returns the loaded value, if any.
    pub fn loaded(&self) -> Option<&T> {
        match self {
            LoadState::Loaded(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the failure, if any.
    pub fn failure(&self) -> Option<&SourceError> {
        match self {
            LoadState::Failed(err) => Some(err),
            _ => None,
        }
    }
}

impl<T> From<Result<T, SourceError>> for LoadState<T> {
    fn from(result: Result<T, SourceError>) -> Self {
        match result {
            Ok(value) => LoadState::Loaded(value),
            Err(err) => LoadState::Failed(err),
        }
    }
}

/// An asynchronous provider of record forests.
///
/// No cancellation semantics exist here; a host that unmounts mid-fetch
/// simply drops the future and discards the result.
#[async_trait]
pub trait RecordSource {
    /// Fetches the complete record forest.
    async fn fetch(&self) -> Result<Vec<Record>, SourceError>;
}

/// A source that resolves canned records after a fixed delay.
///
/// Mirrors a slow backend for demos and loading-state tests.
#[derive(Debug, Clone)]
pub struct MockSource {
    records: Vec<Record>,
    delay: Duration,
}

impl MockSource {
    /// Creates a mock source with the default one-second delay.
    pub fn new(records: Vec<Record>) -> Self {
        Self {
            records,
            delay: Duration::from_millis(1000),
        }
    }

    /// Overrides the artificial delay (builder pattern).
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl RecordSource for MockSource {
    async fn fetch(&self) -> Result<Vec<Record>, SourceError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.records.clone())
    }
}
