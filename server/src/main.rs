mod config;
mod db;
mod rate_limit;
mod routes;
mod services;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::services::conference::{ConferenceStore, MemoryConferenceStore, PgConferenceStore};
use crate::services::credential::CredentialChecker;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // A missing .env file is fine; the process environment still applies.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env();

    let conferences: Arc<dyn ConferenceStore> = match &config.database_url {
        Some(url) => {
            let pool = db::init_pool(url, config.db_max_connections).await?;
            tracing::info!(max_connections = config.db_max_connections, "postgres conference store ready");
            Arc::new(PgConferenceStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; conferences are kept in memory");
            Arc::new(MemoryConferenceStore::new())
        }
    };

    let state = state::AppState::new(&config, conferences, CredentialChecker::from_env());

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos SSR unavailable; serving API only");
            routes::app(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;

    tracing::info!(port = config.port, "conference server listening");
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>()).await?;
    Ok(())
}
