//! Axum route handlers for the AI widgets.

use axum::{
    body::Body,
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::assistant::blog::BlogAssistantRequest;
use crate::assistant::chat::ChatMode;
use crate::assistant::insights::generate_insight;
use crate::assistant::prompts::quiz_json_prompt;
use crate::assistant::quiz::QuizDeck;
use crate::errors::AppError;
use crate::models::{ProjectInsight, QuizCard};
use crate::state::AppState;

const DEFAULT_QUIZ_CARDS: usize = 3;
const MAX_QUIZ_CARDS: usize = 10;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub input: String,
    #[serde(default)]
    pub mode: ChatMode,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub output: String,
}

#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub greeting: String,
}

#[derive(Debug, Deserialize)]
pub struct QuizRequest {
    pub content: String,
    #[serde(default)]
    pub count: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub cards: Vec<QuizCard>,
    /// Initial flip state, one entry per card.
    pub flipped: Vec<bool>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/ai/chat
pub async fn handle_greeting(State(state): State<AppState>) -> Json<GreetingResponse> {
    Json(GreetingResponse {
        greeting: state.chat.greeting().to_string(),
    })
}

/// POST /api/v1/ai/chat
///
/// Canned persona reply after the simulated typing delay.
pub async fn handle_chat(
    State(state): State<AppState>,
    Json(request): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, AppError> {
    if request.input.trim().is_empty() {
        return Err(AppError::Validation("input cannot be empty".to_string()));
    }
    let output = state.chat.reply(&request.input, request.mode).await;
    Ok(Json(ChatResponse { output }))
}

/// GET /api/v1/projects/:id/insights
pub async fn handle_project_insights(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProjectInsight>, AppError> {
    generate_insight(&state.content, &id, &state.insight_latency)
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))
}

/// POST /api/v1/ai/blog-assistant
///
/// Streams the model's answer back as plain text. Errors after the first
/// chunk can only end the stream early.
pub async fn handle_blog_assistant(
    State(state): State<AppState>,
    Json(request): Json<BlogAssistantRequest>,
) -> Result<Response, AppError> {
    let (tool, input) = request.validate()?;
    info!(feature = %tool, chars = input.len(), "Blog assistant request");

    let system = tool.system_prompt(&input);
    let deltas = state.llm.stream_chat(&system, &input).await?;
    let body = Body::from_stream(deltas.map(move |item| {
        item.inspect_err(|e| error!(feature = %tool, "Blog assistant stream failed: {e}"))
    }));

    Ok((
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        body,
    )
        .into_response())
}

/// POST /api/v1/ai/quiz
///
/// Structured quiz cards for a post, for the flip-card widget.
pub async fn handle_quiz(
    State(state): State<AppState>,
    Json(request): Json<QuizRequest>,
) -> Result<Json<QuizResponse>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }
    let count = request
        .count
        .unwrap_or(DEFAULT_QUIZ_CARDS)
        .clamp(1, MAX_QUIZ_CARDS);

    let cards: Vec<QuizCard> = state
        .llm
        .complete_json(&quiz_json_prompt(count), &request.content)
        .await?;
    let generated = cards.len();
    let deck = QuizDeck::from_generated(cards, count);

    if deck.is_empty() {
        return Err(AppError::Internal(anyhow::anyhow!(
            "model returned no usable quiz cards"
        )));
    }
    info!(generated, kept = deck.len(), "Quiz cards generated");
    Ok(Json(QuizResponse {
        flipped: deck.flipped().to_vec(),
        cards: deck.cards().to_vec(),
    }))
}
