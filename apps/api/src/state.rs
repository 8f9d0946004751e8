use std::sync::Arc;
use std::time::Duration;

use crate::assistant::chat::PersonaChat;
use crate::config::Config;
use crate::content::PortfolioContent;
use crate::filters::engine::FilterEngine;
use crate::latency::{Latency, SleepLatency};
use crate::llm_client::LlmClient;
use crate::models::ProjectRecord;

/// Shared application state injected into all route handlers via Axum extractors.
/// Nothing here changes after startup except the chat fallback rotation.
#[derive(Clone)]
pub struct AppState {
    pub content: Arc<PortfolioContent>,
    /// Shared with every search widget without copying.
    pub projects: Arc<Vec<ProjectRecord>>,
    pub llm: LlmClient,
    pub config: Config,
    pub engine: FilterEngine,
    pub chat: Arc<PersonaChat>,
    pub semantic_latency: Arc<dyn Latency>,
    pub insight_latency: Arc<dyn Latency>,
}

impl AppState {
    /// Wires the state from loaded content, with the delays from `config`.
    pub fn new(content: PortfolioContent, llm: LlmClient, config: Config) -> Self {
        let latency = |ms: u64| -> Arc<dyn Latency> {
            Arc::new(SleepLatency(Duration::from_millis(ms)))
        };
        let chat = PersonaChat::new(content.persona.clone())
            .with_latency(latency(config.chat_delay_ms));

        Self {
            projects: Arc::new(content.projects.clone()),
            content: Arc::new(content),
            llm,
            engine: FilterEngine::default(),
            chat: Arc::new(chat),
            semantic_latency: latency(config.semantic_delay_ms),
            insight_latency: latency(config.insights_delay_ms),
            config,
        }
    }
}
