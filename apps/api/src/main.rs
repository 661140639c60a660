mod auth;
mod config;
mod db;
mod errors;
mod loader;
mod models;
mod recommendation;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::loader::job_catalog::PgJobCatalog;
use crate::loader::profile_client::ProfileApiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting jobseeker API v{}", env!("CARGO_PKG_VERSION"));

    // Job catalog (PostgreSQL)
    let db = create_pool(&config.database_url).await?;
    let jobs = Arc::new(PgJobCatalog::new(db));

    // Profile API client
    let profile = Arc::new(ProfileApiClient::new(
        config.profile_api_url.clone(),
        Duration::from_secs(config.profile_api_timeout_secs),
    )?);
    info!("Profile API client initialized ({})", config.profile_api_url);

    info!(
        "Ranker: threshold {} limit {}",
        config.ranker.threshold, config.ranker.limit
    );

    let state = AppState {
        config: config.clone(),
        profile,
        jobs,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict CORS origins to the web client's domain

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
