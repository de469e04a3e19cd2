//! Binary entry point.
//!
//! Startup sequence: tracing, configuration from environment, optional
//! database pool + liveness ping, bind, serve. Any startup failure is
//! logged and terminates the process; there is no retry.

use homepage_api::config::AppConfig;
use homepage_api::error::StartupError;
use homepage_api::state::AppState;
use homepage_api::{app, db};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();

    let pool = db::init_pool(config.database_url.as_deref())
        .await
        .map_err(|e| {
            tracing::error!("database pool initialization failed: {e}");
            e
        })?;

    match &pool {
        Some(pool) => {
            db::ping(pool).await.map_err(|e| {
                tracing::error!("database ping failed: {e}");
                e
            })?;
            tracing::info!("database connection verified");
        }
        None => tracing::info!("no DATABASE_URL configured, running without a database"),
    }

    let state = AppState::with_config(config, pool);
    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], state.config.port));
    let app = app(state);
    let listener = tokio::net::TcpListener::bind(addr).await.map_err(|e| {
        tracing::error!("failed to bind {addr}: {e}");
        e
    })?;
    tracing::info!("homepage-api listening on {addr}");

    axum::serve(listener, app).await?;

    Ok(())
}
