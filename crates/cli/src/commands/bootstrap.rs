use anyhow::Result;

pub(crate) async fn run() -> Result<()> {
    let catalog = super::connect_and_bootstrap().await?;
    catalog.close().await;
    tracing::info!("bootstrap complete");
    Ok(())
}
