use srq_api::catalog;
use srq_api::config::ApiConfig;
use srq_api::state::{self, AppState};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = ApiConfig::from_env()?;
    let store = state::connect_store(&config).await;

    if config.seed_on_start {
        catalog::seed(&store).await?;
    }

    let app = srq_api::router(AppState::new(store, &config));

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}
