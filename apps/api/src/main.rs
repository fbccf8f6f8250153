mod catalog;
mod config;
mod errors;
mod explain;
mod extraction;
mod market;
mod matching;
mod models;
mod profile;
mod recommend;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::catalog::RoleCatalog;
use crate::config::Config;
use crate::extraction::resume::ResumeAnalyzer;
use crate::extraction::vocabulary::default_vocabulary;
use crate::market::{enrich_catalog, HttpMarketDataSource};
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed values)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerMatch API v{}", env!("CARGO_PKG_VERSION"));

    // Load the role catalog; a defective catalog refuses startup
    let catalog = match &config.catalog_path {
        Some(path) => RoleCatalog::from_path(path)
            .with_context(|| format!("Failed to load role catalog from {}", path.display()))?,
        None => {
            let catalog = RoleCatalog::seeded().context("Seed catalog is invalid")?;
            info!("Using seeded catalog with {} roles", catalog.len());
            catalog
        }
    };

    // Optional market-data enrichment, bounded by the configured budget
    let catalog = match &config.market_data_url {
        Some(url) => match HttpMarketDataSource::new(url.clone(), config.market_data_timeout) {
            Ok(source) => enrich_catalog(catalog, &source, config.market_data_timeout).await,
            Err(e) => {
                warn!("Market data client unavailable, skipping enrichment: {e}");
                catalog
            }
        },
        None => catalog,
    };

    // Compile the skill vocabulary once
    let vocabulary = default_vocabulary().context("Failed to compile skill vocabulary")?;
    if vocabulary.is_empty() {
        warn!("Skill vocabulary is empty; résumé uploads will yield no skills");
    } else {
        info!(
            "Skill vocabulary loaded ({} terms in {} categories)",
            vocabulary.len(),
            vocabulary.categories().len()
        );
    }
    let analyzer = ResumeAnalyzer::new(vocabulary).context("Failed to build résumé analyzer")?;

    let state = AppState {
        config: config.clone(),
        catalog: Arc::new(catalog),
        analyzer: Arc::new(analyzer),
    };

    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()), // TODO: restrict allowed origins once the web client's host is fixed
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
