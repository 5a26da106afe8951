mod config;
mod embeddings;
mod errors;
mod jobs;
mod llm_client;
mod routes;
mod scoring;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::OllamaClient;
use crate::routes::build_router;
use crate::scoring::skills::SynonymTable;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerForge API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize LLM client
    let llm = OllamaClient::new(&config.ollama_base_url, &config.ollama_model)?;
    info!(
        "Ollama client initialized (model: {}, url: {})",
        llm.model(),
        config.ollama_base_url
    );

    // Load skill synonyms (built-in table unless SKILL_SYNONYMS_PATH is set)
    let synonyms = match &config.skill_synonyms_path {
        Some(path) => SynonymTable::from_json_file(path)?,
        None => SynonymTable::default(),
    };
    info!("Skill synonym table loaded ({} entries)", synonyms.len());

    let state = AppState::new(config.clone(), llm, synonyms);
    info!("Embedding policy: {:?}", state.embeddings.policy());

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
