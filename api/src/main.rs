use anyhow::Result;
use shared::Config;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod error;
mod routes;
mod state;

use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .init();

    info!("Starting Nasdaq 100 dashboard...");

    // The dataset and overview figures are built once and shared by every request
    let state = AppState::new(&config)?;
    info!("Loaded {} rows from {}", state.dataset.len(), config.data_path);

    let app = routes::router(state).layer(ServiceBuilder::new().layer(TraceLayer::new_for_http()));

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    info!("Dashboard listening on http://{}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
