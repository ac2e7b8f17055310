mod catalog;
mod config;
mod errors;
mod explanation;
mod llm_client;
mod matching;
mod routes;
mod state;
mod wizard;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::catalog::Catalog;
use crate::config::Config;
use crate::explanation::{Explainer, LlmTextGenerator, TemplateTextGenerator, TextGenerator};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::wizard::store::SessionStore;

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

    info!("Starting Compass API v{}", env!("CARGO_PKG_VERSION"));

    // Load the reference catalog
    let catalog = match &config.catalog_path {
        Some(path) => Catalog::from_json_file(path)?,
        None => Catalog::builtin()?,
    };
    info!(
        "Catalog {} loaded: {} careers",
        catalog.version,
        catalog.careers.len()
    );

    // Pick the text-generation backend once; the Explainer falls back per call
    let generator = build_text_generator(&config)?;
    info!("Text generation backend: {}", generator.backend());

    let sessions = SessionStore::new();
    let sweep_every =
        (config.session_ttl / 4).clamp(Duration::from_secs(1), Duration::from_secs(60));
    sessions.spawn_expiry(config.session_ttl, sweep_every);
    info!(
        "Idle sessions expire after {}s (sweep every {}s)",
        config.session_ttl.as_secs(),
        sweep_every.as_secs()
    );

    let state = AppState {
        catalog: Arc::new(catalog),
        explainer: Explainer::new(generator),
        sessions,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn build_text_generator(config: &Config) -> Result<Arc<dyn TextGenerator>> {
    let Some(api_key) = &config.openai_api_key else {
        warn!("OPENAI_API_KEY not set; explanations use local templates");
        return Ok(Arc::new(TemplateTextGenerator));
    };

    let client = LlmClient::new(
        api_key.clone(),
        config.openai_base_url.clone(),
        config.openai_model.clone(),
        config.llm_timeout,
    )?;
    info!("LLM client initialized (model: {})", client.model());
    Ok(Arc::new(LlmTextGenerator(client)))
}
