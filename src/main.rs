//! HTTP server: reads settings from the environment, prepares the tables and serves the API.

use pizza_api::{app, connect, ensure_tables, AppConfig, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("pizza_api=info,tower_http=info")),
        )
        .init();

    let config = AppConfig::from_env()?;
    let pool = connect(&config.database).await?;
    ensure_tables(&pool).await?;

    let router = app(AppState::new(pool), &config.server);
    let listener = TcpListener::bind(config.server.bind_addr()).await?;
    tracing::info!("listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router).await?;
    Ok(())
}
