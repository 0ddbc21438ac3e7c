//! One-time schema provisioning and seed data.
//!
//! Seeding is gated strictly on "table absent" (SQLSTATE 42P01): a trial
//! read that fails for any other reason aborts startup instead of risking
//! duplicate seed rows. Schema creation and the seed inserts run in one
//! transaction, so a racing second instance either sees the table or
//! conflicts on commit.

use crate::error::StorageError;
use crate::pg::PgCatalog;

/// Fixed seed dataset: (name, height, local_name). Heights are in feet.
pub const SEED_MOUNTAINS: &[(&str, i32, &str)] = &[
    ("Mt. Everest", 29032, "Sagarmatha || Qomolangma"),
    ("Annapurna", 26545, ""),
    ("Gasherbrum III", 26089, ""),
    ("Gyachung Kang", 26089, ""),
    ("Fishtail", 22943, "Machapuchare"),
    ("Mt. McKinley", 20310, "Denali"),
    ("Mt. Rainier", 14410, "Tahoma"),
];

const CREATE_MOUNTAIN_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS mountain (
        id BIGSERIAL PRIMARY KEY,
        name TEXT NOT NULL,
        height INTEGER NOT NULL,
        local_name TEXT NOT NULL DEFAULT ''
    )
"#;

/// What the trial read tells bootstrap to do next.
#[derive(Debug, PartialEq, Eq)]
enum SeedGate {
    /// Table is usable; write nothing.
    Skip,
    /// Table does not exist; create schema and seed.
    Provision,
}

/// The seeding gate: a passing trial read skips, a missing table
/// provisions, and any other trial-read error aborts bootstrap.
fn seed_gate(trial: Result<(), StorageError>) -> Result<SeedGate, StorageError> {
    match trial {
        Ok(()) => Ok(SeedGate::Skip),
        Err(StorageError::TableMissing) => Ok(SeedGate::Provision),
        Err(other) => Err(other),
    }
}

impl PgCatalog {
    /// Run the bootstrap procedure: trial-read the catalog table and
    /// provision schema plus seed rows when it does not exist yet.
    /// Idempotent: a usable table passes the trial read and nothing is
    /// written. Single attempt, no retry.
    pub async fn bootstrap(&self) -> Result<(), StorageError> {
        let trial = sqlx::query("SELECT id FROM mountain LIMIT 1")
            .fetch_optional(self.pool())
            .await
            .map(|_| ())
            .map_err(StorageError::from);
        match seed_gate(trial)? {
            SeedGate::Skip => {
                tracing::info!("catalog table present, skipping seed");
                Ok(())
            },
            SeedGate::Provision => self.provision().await,
        }
    }

    async fn provision(&self) -> Result<(), StorageError> {
        tracing::info!("catalog table missing, creating schema and seeding");
        let mut tx = self.pool().begin().await?;
        sqlx::query(CREATE_MOUNTAIN_TABLE).execute(&mut *tx).await?;
        for &(name, height, local_name) in SEED_MOUNTAINS {
            sqlx::query("INSERT INTO mountain (name, height, local_name) VALUES ($1, $2, $3)")
                .bind(name)
                .bind(height)
                .bind(local_name)
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        tracing::info!(rows = SEED_MOUNTAINS.len(), "catalog seeded");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_skips_seeding_when_trial_read_passes() {
        assert_eq!(seed_gate(Ok(())).unwrap(), SeedGate::Skip);
    }

    #[test]
    fn test_gate_provisions_only_when_table_is_missing() {
        let gate = seed_gate(Err(StorageError::TableMissing)).unwrap();
        assert_eq!(gate, SeedGate::Provision);
    }

    #[test]
    fn test_gate_aborts_on_any_other_trial_read_error() {
        let trial = Err(StorageError::Database(sqlx::Error::PoolClosed));
        let result = seed_gate(trial);
        assert!(matches!(result, Err(StorageError::Database(_))));
    }

    #[test]
    fn test_seed_has_seven_rows() {
        assert_eq!(SEED_MOUNTAINS.len(), 7);
    }

    #[test]
    fn test_seed_heights_share_26089_twice() {
        let names: Vec<&str> = SEED_MOUNTAINS
            .iter()
            .filter(|(_, height, _)| *height == 26089)
            .map(|(name, _, _)| *name)
            .collect();
        assert_eq!(names, vec!["Gasherbrum III", "Gyachung Kang"]);
    }

    #[test]
    fn test_seed_names_are_non_empty() {
        assert!(SEED_MOUNTAINS.iter().all(|(name, _, _)| !name.trim().is_empty()));
    }

    #[test]
    fn test_schema_allows_absent_local_name() {
        assert!(CREATE_MOUNTAIN_TABLE.contains("local_name TEXT NOT NULL DEFAULT ''"));
    }
}
