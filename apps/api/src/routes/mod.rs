pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::assistant::handlers as assistant;
use crate::content::handlers as content;
use crate::filters::handlers as filters;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Portfolio content
        .route("/api/v1/profile", get(content::handle_profile))
        .route("/api/v1/experience", get(content::handle_experience))
        .route("/api/v1/publications", get(content::handle_publications))
        .route("/api/v1/skills", get(content::handle_skills))
        .route("/api/v1/testimonials", get(content::handle_testimonials))
        .route("/api/v1/books", get(content::handle_books))
        .route("/api/v1/books/updates", get(content::handle_book_updates))
        .route("/api/v1/blog", get(content::handle_blog_posts))
        .route("/api/v1/blog/categories", get(content::handle_blog_categories))
        .route("/api/v1/blog/:slug", get(content::handle_blog_post))
        // Projects and the filter panel
        .route("/api/v1/projects", get(filters::handle_list_projects))
        .route("/api/v1/projects/options", get(filters::handle_filter_options))
        .route("/api/v1/projects/search", post(filters::handle_search))
        .route("/api/v1/projects/:id", get(filters::handle_get_project))
        .route(
            "/api/v1/projects/:id/insights",
            get(assistant::handle_project_insights),
        )
        // AI widgets
        .route(
            "/api/v1/ai/chat",
            get(assistant::handle_greeting).post(assistant::handle_chat),
        )
        .route(
            "/api/v1/ai/blog-assistant",
            post(assistant::handle_blog_assistant),
        )
        .route("/api/v1/ai/quiz", post(assistant::handle_quiz))
        .with_state(state)
}
