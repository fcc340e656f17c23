use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use fleet_tracker::shell::config::ServerConfig;
use fleet_tracker::shell::http::router;
use fleet_tracker::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = ServerConfig::from_env()?;
    let state = AppState::in_memory();

    let app = router(state).layer(TraceLayer::new_for_http());

    let address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    tracing::info!("Fleet API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
