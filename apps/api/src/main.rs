mod chat;
mod config;
mod db;
mod errors;
mod llm_client;
mod locales;
mod models;
mod repository;
mod resume;
mod routes;
mod site;
mod state;
mod visits;

use anyhow::{Context, Result};
use axum::http::HeaderValue;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::{create_pool, run_migrations};
use crate::llm_client::GeminiClient;
use crate::locales::{load_site_locales, sync::sync_site_locales};
use crate::repository::{PgRepository, PortfolioRepository};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Portfolio API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL
    let db = create_pool(&config.database_url).await?;
    run_migrations(&db).await?;
    let repo: Arc<dyn PortfolioRepository> = Arc::new(PgRepository::new(db));

    // Populate newly configured site locales before serving
    let site_locales = load_site_locales(repo.as_ref(), &config.default_locale).await;
    match sync_site_locales(repo.as_ref(), &site_locales, &config.canonical_locale).await {
        Ok(synced) => info!("Locale sync complete ({} locale(s) populated)", synced.len()),
        Err(e) => warn!("Locale sync failed, continuing: {e}"),
    }

    // Initialize LLM client
    let llm = GeminiClient::new(config.chat_timeout).context("Failed to build Gemini client")?;
    info!(
        "LLM client initialized (model: {}, timeout: {:?})",
        llm_client::MODEL,
        config.chat_timeout
    );

    let cors = build_cors(&config)?;

    // Build app state
    let state = AppState {
        repo,
        llm: Arc::new(llm),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Allow-list from `CORS_ALLOWED_ORIGINS`, permissive when unset.
fn build_cors(config: &Config) -> Result<CorsLayer> {
    if config.cors_allowed_origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }
    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("Invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(tower_http::cors::Any)
        .allow_headers(tower_http::cors::Any))
}
