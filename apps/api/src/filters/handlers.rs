//! Axum route handlers for the project list and its filter panel.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::filters::criteria::FilterCriteria;
use crate::filters::engine::FilterOptions;
use crate::filters::widget::{ProjectFilter, RecomputeOutcome};
use crate::models::ProjectRecord;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub projects: Vec<ProjectRecord>,
    pub count: usize,
    pub criteria: FilterCriteria,
    pub scorer_backend: &'static str,
}

/// GET /api/v1/projects
pub async fn handle_list_projects(State(state): State<AppState>) -> Json<Vec<ProjectRecord>> {
    Json(state.projects.as_ref().clone())
}

/// GET /api/v1/projects/:id
pub async fn handle_get_project(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProjectRecord>, AppError> {
    state
        .content
        .project(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Project {id} not found")))
}

/// GET /api/v1/projects/options
pub async fn handle_filter_options(State(state): State<AppState>) -> Json<FilterOptions> {
    Json(FilterOptions::from_inputs(&state.projects, &state.content.skills))
}

/// POST /api/v1/projects/search
///
/// Runs one widget recompute for the posted criteria. Semantic queries wait
/// out the configured search delay first.
pub async fn handle_search(
    State(state): State<AppState>,
    Json(criteria): Json<FilterCriteria>,
) -> Result<Json<SearchResponse>, AppError> {
    let delivered: Arc<Mutex<Option<Vec<ProjectRecord>>>> = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&delivered);

    let mut filter = ProjectFilter::new(
        Arc::clone(&state.projects),
        &state.content.skills,
        move |results: Vec<ProjectRecord>| {
            if let Ok(mut guard) = slot.lock() {
                *guard = Some(results);
            }
        },
    )
    .with_engine(state.engine.clone())
    .with_latency(Arc::clone(&state.semantic_latency));

    let outcome = filter.set_criteria(criteria.clone()).await;
    if let RecomputeOutcome::Superseded { request_id } = outcome {
        // Nothing else drives this widget, so this cannot happen.
        warn!(request_id, "Search recompute superseded");
    }

    let projects = delivered
        .lock()
        .map_err(|_| AppError::Internal(anyhow::anyhow!("search result lock poisoned")))?
        .take()
        .unwrap_or_default();

    info!(
        count = projects.len(),
        semantic = criteria.semantic,
        "Project search"
    );

    Ok(Json(SearchResponse {
        count: projects.len(),
        projects,
        criteria,
        scorer_backend: state.engine.scorer_backend(),
    }))
}
