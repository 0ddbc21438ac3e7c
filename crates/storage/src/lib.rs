//! Storage layer for peak-catalog
//!
//! PostgreSQL-backed catalog store plus the one-time bootstrap procedure
//! that provisions the schema and seed rows.

mod bootstrap;
mod catalog;
mod error;
mod pg;

pub use bootstrap::SEED_MOUNTAINS;
pub use catalog::{CatalogStore, DegradedCause, ListOutcome};
pub use error::StorageError;
pub use pg::PgCatalog;
