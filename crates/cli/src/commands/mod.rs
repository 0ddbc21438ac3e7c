pub(crate) mod bootstrap;
pub(crate) mod serve;

use anyhow::Result;
use peak_catalog_core::database_url_from_env;
use peak_catalog_storage::PgCatalog;

/// Open the pool, verify liveness, and run the bootstrap procedure.
/// Shared by `serve` startup and the standalone `bootstrap` command.
pub(crate) async fn connect_and_bootstrap() -> Result<PgCatalog> {
    let catalog = PgCatalog::connect(&database_url_from_env()).await?;
    catalog.ping().await?;
    tracing::info!("database reachable");
    catalog.bootstrap().await?;
    Ok(catalog)
}
