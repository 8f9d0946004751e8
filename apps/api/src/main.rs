use std::net::SocketAddr;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use folio_api::config::Config;
use folio_api::content::PortfolioContent;
use folio_api::llm_client::LlmClient;
use folio_api::routes::build_router;
use folio_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio API v{}", env!("CARGO_PKG_VERSION"));

    let content = PortfolioContent::load(config.content_path.as_deref())?;

    let llm = LlmClient::new(&config.ollama_url, config.ollama_model.clone())?;
    info!("LLM client initialized (model: {}, endpoint: {})", llm.model(), llm.endpoint());

    info!(
        "Simulated delays: semantic {}ms, chat {}ms, insights {}ms",
        config.semantic_delay_ms, config.chat_delay_ms, config.insights_delay_ms
    );

    let state = AppState::new(content, llm, config.clone());

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
