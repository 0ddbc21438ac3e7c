//! PostgreSQL catalog store using sqlx.

use async_trait::async_trait;
use futures_util::TryStreamExt;
use peak_catalog_core::{Mountain, NewMountain};
use sqlx::postgres::{PgPoolOptions, PgRow};
use sqlx::{PgPool, Row};

use crate::catalog::{CatalogStore, DegradedCause, ListOutcome};
use crate::error::StorageError;

const SELECT_MOUNTAINS: &str = "SELECT id, name, height, local_name FROM mountain";

#[derive(Clone, Debug)]
pub struct PgCatalog {
    pool: PgPool,
}

impl PgCatalog {
    /// Open the shared connection pool. Called once at startup; the pool is
    /// closed at shutdown and never reopened per request.
    pub async fn connect(database_url: &str) -> Result<Self, StorageError> {
        let pool = PgPoolOptions::new().max_connections(8).connect(database_url).await?;
        tracing::info!("catalog store connected");
        Ok(Self { pool })
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Liveness check against the database, run before bootstrap.
    pub async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

fn row_to_mountain(row: &PgRow) -> Result<Mountain, sqlx::Error> {
    Ok(Mountain {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        height: row.try_get("height")?,
        local_name: row.try_get("local_name")?,
    })
}

#[async_trait]
impl CatalogStore for PgCatalog {
    async fn list_all(&self) -> ListOutcome {
        let mut mountains = Vec::new();
        let mut rows = sqlx::query(SELECT_MOUNTAINS).fetch(&self.pool);
        loop {
            match rows.try_next().await {
                Ok(Some(row)) => match row_to_mountain(&row) {
                    Ok(mountain) => mountains.push(mountain),
                    Err(err) => {
                        tracing::error!(error = %err, "row decode failed while listing catalog");
                        return ListOutcome::degraded(mountains, DegradedCause::RowDecode);
                    },
                },
                Ok(None) => return ListOutcome::complete(mountains),
                // Errors before the first decoded row count as submission
                // failure; the stream gives no finer signal.
                Err(err) if mountains.is_empty() => {
                    tracing::error!(error = %err, "catalog listing query failed");
                    return ListOutcome::degraded(mountains, DegradedCause::Query);
                },
                Err(err) => {
                    tracing::error!(error = %err, "catalog listing aborted mid-iteration");
                    return ListOutcome::degraded(mountains, DegradedCause::Iteration);
                },
            }
        }
    }

    async fn get_by_id(&self, id: &str) -> Result<Option<Mountain>, StorageError> {
        // Malformed identifiers match zero rows, same as an absent id.
        let Ok(id) = id.parse::<i64>() else {
            return Ok(None);
        };
        let row = sqlx::query(&format!("{SELECT_MOUNTAINS} WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        match row {
            Some(ref row) => Ok(Some(row_to_mountain(row).map_err(StorageError::from)?)),
            None => Ok(None),
        }
    }

    async fn filter_by_height(&self, height: &str) -> Result<Vec<Mountain>, StorageError> {
        let Ok(height) = height.parse::<i32>() else {
            return Ok(Vec::new());
        };
        let rows = sqlx::query(&format!("{SELECT_MOUNTAINS} WHERE height = $1"))
            .bind(height)
            .fetch_all(&self.pool)
            .await?;
        rows.iter()
            .map(|row| row_to_mountain(row).map_err(StorageError::from))
            .collect()
    }

    async fn insert(&self, input: NewMountain) -> Result<Mountain, StorageError> {
        let row = sqlx::query(
            "INSERT INTO mountain (name, height, local_name) VALUES ($1, $2, $3) RETURNING id",
        )
        .bind(&input.name)
        .bind(input.height)
        .bind(&input.local_name)
        .fetch_one(&self.pool)
        .await?;
        let id: i64 = row.try_get("id")?;
        tracing::debug!(id, name = %input.name, "mountain inserted");
        Ok(input.into_mountain(id))
    }
}
