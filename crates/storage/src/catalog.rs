//! The catalog store contract and its tagged listing outcome.

use async_trait::async_trait;
use peak_catalog_core::{Mountain, NewMountain};

use crate::error::StorageError;

/// Why a listing came back incomplete.
///
/// Each cause maps to its own response status; the payload stays whatever
/// rows were accumulated before the failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradedCause {
    /// Query submission failed; no rows were obtainable. The driver cannot
    /// distinguish submission failure from a stream error on the first
    /// poll, so any error arriving before a row has been decoded lands
    /// here.
    Query,
    /// A row failed to decode partway through; the payload is a strict
    /// prefix of the true result set.
    RowDecode,
    /// Iteration ended with an error after rows were already collected.
    Iteration,
}

/// Result of listing the whole catalog.
///
/// Listing never fails outright: the rows collected so far are always
/// returned, and `degraded` signals incompleteness to exactly one
/// response-writing step. An empty catalog is `ListOutcome::complete(vec![])`.
#[derive(Debug)]
pub struct ListOutcome {
    pub mountains: Vec<Mountain>,
    pub degraded: Option<DegradedCause>,
}

impl ListOutcome {
    pub fn complete(mountains: Vec<Mountain>) -> Self {
        Self { mountains, degraded: None }
    }

    pub fn degraded(mountains: Vec<Mountain>, cause: DegradedCause) -> Self {
        Self { mountains, degraded: Some(cause) }
    }
}

/// Catalog operations backed by the shared storage gateway.
///
/// Identifier and height parameters arrive as raw path text; malformed
/// values match zero rows rather than raising a parse error.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Read every row, in whatever order storage returns them.
    async fn list_all(&self) -> ListOutcome;

    /// Fetch the one row whose id equals the given path text.
    async fn get_by_id(&self, id: &str) -> Result<Option<Mountain>, StorageError>;

    /// Fetch all rows whose height equals the given path text.
    async fn filter_by_height(&self, height: &str) -> Result<Vec<Mountain>, StorageError>;

    /// Insert one row and return it with its newly assigned id.
    async fn insert(&self, input: NewMountain) -> Result<Mountain, StorageError>;
}
