mod config;
mod routes;
mod services;
mod state;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::config::{ConfigError, GuestbookConfig};

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("server: {0}")]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    let dotenv = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = dotenv {
        // A missing .env is the normal case outside development.
        debug!(error = %e, "no .env loaded");
    }

    let config = GuestbookConfig::from_env()?;
    let port = config.port;
    info!(
        rows = config.rows,
        columns = config.columns,
        policy = config.policy.as_str(),
        axes = config.axes.as_str(),
        "guestbook configured"
    );

    let state = state::AppState::new(config);

    // Spawn background loader; the page serves a pending grid until it lands.
    let _loader = services::loader::spawn_loader_task(state.clone());

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;

    info!(%port, "guestbook listening");
    axum::serve(listener, app).await?;
    Ok(())
}
