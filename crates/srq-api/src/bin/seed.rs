//! Seed the SRQ-20 catalog into the configured store.
//!
//! Safe to run repeatedly; entries that already exist are skipped.

use srq_api::catalog;
use srq_api::config::ApiConfig;
use srq_api::state;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;
    let store = state::connect_store(&config).await;

    let report = catalog::seed(&store).await?;
    tracing::info!(
        bucket = %config.bucket,
        questions_created = report.questions_created,
        activities_created = report.activities_created,
        "seed complete"
    );
    Ok(())
}
