//! Converts a GitHub user's public repositories into project records.
//!
//! Used by the `sync-repos` binary to refresh the projects section of the
//! content file. Only the selection and mapping live here; fetching is the
//! binary's job.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::models::ProjectRecord;

pub const API_BASE: &str = "https://api.github.com";
/// Repositories kept after filtering.
pub const MAX_REPOS: usize = 6;
const MAX_TOPIC_TAGS: usize = 4;
const CATEGORY: &str = "Open Source";
const EFFORT_LEVEL: &str = "Medium";

/// The subset of the GitHub repository payload we use.
#[derive(Debug, Clone, Deserialize)]
pub struct GitHubRepo {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub fork: bool,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub html_url: String,
    #[serde(default)]
    pub homepage: Option<String>,
    #[serde(default)]
    pub stargazers_count: u32,
    #[serde(default)]
    pub forks_count: u32,
    pub updated_at: DateTime<Utc>,
}

pub fn repos_url(username: &str) -> String {
    format!("{API_BASE}/users/{username}/repos")
}

/// Drops forks and undescribed repos, newest first, capped at `MAX_REPOS`.
pub fn select_repos(mut repos: Vec<GitHubRepo>) -> Vec<GitHubRepo> {
    repos.retain(|r| !r.fork && description(r).is_some());
    repos.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    repos.truncate(MAX_REPOS);
    repos
}

/// "memory-retrieval-cue" -> "Memory Retrieval Cue"
pub fn title_case(name: &str) -> String {
    name.split('-')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

fn description(repo: &GitHubRepo) -> Option<&str> {
    repo.description.as_deref().filter(|d| !d.trim().is_empty())
}

impl From<GitHubRepo> for ProjectRecord {
    fn from(repo: GitHubRepo) -> Self {
        let description = description(&repo).unwrap_or_default().to_string();
        let tags = repo
            .language
            .iter()
            .cloned()
            .chain(repo.topics.iter().take(MAX_TOPIC_TAGS).cloned())
            .collect();

        ProjectRecord {
            id: repo.name.to_lowercase(),
            title: title_case(&repo.name),
            description_short: description.clone(),
            description_long: description,
            category: CATEGORY.to_string(),
            effort_level: EFFORT_LEVEL.to_string(),
            tags,
            cover_image_url: None,
            project_url: repo.homepage.filter(|h| !h.trim().is_empty()),
            repo_url: Some(repo.html_url),
            created_at: Some(repo.updated_at.date_naive()),
            model_card: None,
            ai_insights: None,
        }
    }
}
