//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (table missing, plain database
//! failure) instead of downcasting opaque boxes.

use thiserror::Error;

/// Storage-layer error covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// The catalog table does not exist yet. Bootstrap treats this as the
    /// one condition under which provisioning runs.
    #[error("catalog table missing")]
    TableMissing,

    /// SQL / connection / timeout / row-decode failure.
    #[error("database error: {0}")]
    Database(#[source] sqlx::Error),
}

/// Custom `From<sqlx::Error>` — NOT blanket `#[from]`.
///
/// SQLSTATE 42P01 (undefined_table) → `TableMissing`; everything else →
/// `Database`.
impl From<sqlx::Error> for StorageError {
    fn from(err: sqlx::Error) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.code().is_some_and(|c| c == "42P01") => {
                Self::TableMissing
            },
            _ => Self::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::borrow::Cow;

    /// Driver error carrying a fixed SQLSTATE.
    #[derive(Debug)]
    struct StubDbError(&'static str);

    impl std::fmt::Display for StubDbError {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            write!(f, "sqlstate {}", self.0)
        }
    }

    impl std::error::Error for StubDbError {}

    impl sqlx::error::DatabaseError for StubDbError {
        fn message(&self) -> &str {
            "stub database error"
        }

        fn code(&self) -> Option<Cow<'_, str>> {
            Some(self.0.into())
        }

        fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
            self
        }

        fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
            self
        }

        fn kind(&self) -> sqlx::error::ErrorKind {
            sqlx::error::ErrorKind::Other
        }
    }

    fn db_error(sqlstate: &'static str) -> sqlx::Error {
        sqlx::Error::Database(Box::new(StubDbError(sqlstate)))
    }

    #[test]
    fn test_undefined_table_sqlstate_maps_to_table_missing() {
        let err = StorageError::from(db_error("42P01"));
        assert!(matches!(err, StorageError::TableMissing));
    }

    #[test]
    fn test_other_sqlstate_maps_to_database() {
        let err = StorageError::from(db_error("55000"));
        assert!(matches!(err, StorageError::Database(_)));
    }

    #[test]
    fn test_non_database_error_maps_to_database() {
        let err = StorageError::from(sqlx::Error::PoolClosed);
        assert!(matches!(err, StorageError::Database(_)));
    }
}
