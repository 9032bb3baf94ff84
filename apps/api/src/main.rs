mod builder;
mod config;
mod critique;
mod errors;
mod extract;
mod grammar;
mod models;
mod render;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::critique::rubric::KeywordRubric;
use crate::grammar::GrammarClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitae API v{}", env!("CARGO_PKG_VERSION"));

    // Fixed scoring rubric: built once, shared read-only across requests
    let rubric = Arc::new(KeywordRubric::standard());
    info!("Keyword rubric initialized");

    // Grammar-check collaborator (LanguageTool-compatible endpoint)
    let grammar = GrammarClient::new(config.languagetool_url.clone());
    if config.grammar_enabled {
        info!("Grammar client initialized ({})", config.languagetool_url);
    } else {
        info!("Grammar checking disabled via GRAMMAR_ENABLED");
    }

    let state = AppState {
        config: config.clone(),
        rubric,
        grammar,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
