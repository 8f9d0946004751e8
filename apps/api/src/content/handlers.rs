//! Axum route handlers for the static portfolio sections.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::filters::criteria::Selection;
use crate::models::{
    BlogPost, BookProject, BookUpdate, Experience, Profile, Publication, Skill, Testimonial,
};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct BlogQuery {
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BookUpdatesQuery {
    #[serde(default)]
    pub book: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct BookWithProgress {
    #[serde(flatten)]
    pub book: BookProject,
    pub progress_percent: u32,
}

fn selection(value: Option<&str>) -> Selection {
    value.map(Selection::parse).unwrap_or_default()
}

/// GET /api/v1/profile
pub async fn handle_profile(State(state): State<AppState>) -> Json<Profile> {
    Json(state.content.profile.clone())
}

/// GET /api/v1/experience
pub async fn handle_experience(State(state): State<AppState>) -> Json<Vec<Experience>> {
    Json(state.content.experience.clone())
}

/// GET /api/v1/publications
pub async fn handle_publications(State(state): State<AppState>) -> Json<Vec<Publication>> {
    Json(state.content.publications.clone())
}

/// GET /api/v1/skills
pub async fn handle_skills(State(state): State<AppState>) -> Json<Vec<Skill>> {
    Json(state.content.skills.clone())
}

/// GET /api/v1/testimonials
pub async fn handle_testimonials(State(state): State<AppState>) -> Json<Vec<Testimonial>> {
    Json(state.content.testimonials.clone())
}

/// GET /api/v1/books
pub async fn handle_books(State(state): State<AppState>) -> Json<Vec<BookWithProgress>> {
    let books = state
        .content
        .books
        .iter()
        .map(|b| BookWithProgress {
            progress_percent: b.progress_percent(),
            book: b.clone(),
        })
        .collect();
    Json(books)
}

/// GET /api/v1/books/updates?book=<id|all>
pub async fn handle_book_updates(
    State(state): State<AppState>,
    Query(query): Query<BookUpdatesQuery>,
) -> Json<Vec<BookUpdate>> {
    let book = selection(query.book.as_deref());
    Json(
        state
            .content
            .book_updates_for(&book)
            .into_iter()
            .cloned()
            .collect(),
    )
}

/// GET /api/v1/blog?category=<name|all>
pub async fn handle_blog_posts(
    State(state): State<AppState>,
    Query(query): Query<BlogQuery>,
) -> Json<Vec<BlogPost>> {
    let category = selection(query.category.as_deref());
    Json(
        state
            .content
            .blog_posts_in(&category)
            .into_iter()
            .cloned()
            .collect(),
    )
}

/// GET /api/v1/blog/categories
pub async fn handle_blog_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.content.blog_categories())
}

/// GET /api/v1/blog/:slug
pub async fn handle_blog_post(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<BlogPost>, AppError> {
    state
        .content
        .blog_post(&slug)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Blog post {slug} not found")))
}
