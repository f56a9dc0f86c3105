mod config;
mod error;
mod routes;
mod state;

use config::ServerConfig;
use error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    if let Err(e) = dotenvy::dotenv() {
        tracing::debug!(error = %e, "no .env file loaded");
    }

    let config = ServerConfig::from_env()?;
    let state = state::AppState::from_samples();
    tracing::info!(jobs = state.jobs.len(), customers = state.customers.len(), "sample data loaded");

    let app = routes::app(state)?;
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    tracing::info!(%addr, "scooterpro listening");
    axum::serve(listener, app).await.map_err(ServerError::Serve)
}
