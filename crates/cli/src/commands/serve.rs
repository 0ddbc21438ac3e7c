use std::sync::Arc;

use anyhow::Result;
use peak_catalog_http::{AppState, create_router};

pub(crate) async fn run(port: u16, host: String) -> Result<()> {
    let catalog = super::connect_and_bootstrap().await?;
    let state = Arc::new(AppState { catalog: Arc::new(catalog) });

    let router = create_router(state);
    let addr = format!("{host}:{port}");
    tracing::info!("Starting HTTP server on {}", addr);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
