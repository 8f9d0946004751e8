//! Portfolio content: every section the site renders, authored as one JSON
//! document and loaded once at start-up.
//!
//! The bundled `content/portfolio.json` is compiled in as the default; a
//! different file can be supplied through `CONTENT_PATH`. Content is never
//! mutated after loading and is shared behind an `Arc` in `AppState`.

pub mod handlers;

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::filters::criteria::Selection;
use crate::models::{
    BlogPost, BookProject, BookUpdate, Experience, InsightTemplate, Persona, ProjectInsight,
    ProjectRecord, Profile, Publication, Skill, Testimonial,
};

const BUNDLED_CONTENT: &str = include_str!("../../content/portfolio.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read content file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid content JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate {kind} id '{id}'")]
    Duplicate { kind: &'static str, id: String },

    #[error("skill '{skill}' has proficiency {value}, expected 0-100")]
    Proficiency { skill: String, value: u8 },

    #[error("testimonial '{id}' has rating {rating}, expected 1-5")]
    Rating { id: String, rating: u8 },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PortfolioContent {
    pub profile: Profile,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub projects: Vec<ProjectRecord>,
    #[serde(default)]
    pub publications: Vec<Publication>,
    #[serde(default)]
    pub blog_posts: Vec<BlogPost>,
    #[serde(default)]
    pub skills: Vec<Skill>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub books: Vec<BookProject>,
    #[serde(default)]
    pub book_updates: Vec<BookUpdate>,
    pub persona: Persona,
    pub default_insight: InsightTemplate,
}

impl PortfolioContent {
    /// Loads content from `path`, or the bundled document when `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ContentError> {
        let content = match path {
            Some(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                info!("Loading portfolio content from {}", path.display());
                Self::from_json(&raw)?
            }
            None => {
                info!("Loading bundled portfolio content");
                Self::from_json(BUNDLED_CONTENT)?
            }
        };

        info!(
            projects = content.projects.len(),
            posts = content.blog_posts.len(),
            skills = content.skills.len(),
            "Portfolio content loaded"
        );
        Ok(content)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let content: PortfolioContent = serde_json::from_str(raw)?;
        content.validate()?;
        Ok(content)
    }

    fn validate(&self) -> Result<(), ContentError> {
        unique("project", self.projects.iter().map(|p| p.id.as_str()))?;
        unique("blog post", self.blog_posts.iter().map(|p| p.slug.as_str()))?;
        unique("experience", self.experience.iter().map(|e| e.id.as_str()))?;
        unique("publication", self.publications.iter().map(|p| p.id.as_str()))?;
        unique("skill", self.skills.iter().map(|s| s.id.as_str()))?;
        unique("book", self.books.iter().map(|b| b.id.as_str()))?;

        if let Some(skill) = self.skills.iter().find(|s| s.proficiency > 100) {
            return Err(ContentError::Proficiency {
                skill: skill.name.clone(),
                value: skill.proficiency,
            });
        }
        if let Some(t) = self
            .testimonials
            .iter()
            .find(|t| !(1..=5).contains(&t.rating))
        {
            return Err(ContentError::Rating {
                id: t.id.clone(),
                rating: t.rating,
            });
        }
        Ok(())
    }

    pub fn project(&self, id: &str) -> Option<&ProjectRecord> {
        self.projects.iter().find(|p| p.id == id)
    }

    /// The project's own insights, or the default template bound to its id.
    pub fn insight_for(&self, project: &ProjectRecord) -> ProjectInsight {
        project.ai_insights.clone().unwrap_or_else(|| ProjectInsight {
            project_id: project.id.clone(),
            summary: self.default_insight.summary.clone(),
            improvements: self.default_insight.improvements.clone(),
            comparison: self.default_insight.comparison.clone(),
        })
    }

    pub fn blog_post(&self, slug: &str) -> Option<&BlogPost> {
        self.blog_posts.iter().find(|p| p.slug == slug)
    }

    /// `"all"` followed by each post category in first-seen order.
    pub fn blog_categories(&self) -> Vec<String> {
        let mut categories = vec![crate::filters::criteria::ALL.to_string()];
        for post in &self.blog_posts {
            if !categories.contains(&post.category) {
                categories.push(post.category.clone());
            }
        }
        categories
    }

    /// Posts whose category matches exactly; `All` returns every post.
    pub fn blog_posts_in(&self, category: &Selection) -> Vec<&BlogPost> {
        self.blog_posts
            .iter()
            .filter(|p| match category {
                Selection::All => true,
                Selection::Only(c) => &p.category == c,
            })
            .collect()
    }

    /// Updates for one book; `All` returns every update.
    pub fn book_updates_for(&self, book: &Selection) -> Vec<&BookUpdate> {
        self.book_updates
            .iter()
            .filter(|u| match book {
                Selection::All => true,
                Selection::Only(id) => &u.book_id == id,
            })
            .collect()
    }
}

fn unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> Result<(), ContentError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(ContentError::Duplicate {
                kind,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn bundled() -> PortfolioContent {
        PortfolioContent::from_json(BUNDLED_CONTENT).unwrap()
    }

    #[test]
    fn test_bundled_content_is_valid() {
        let content = bundled();
        assert!(!content.projects.is_empty());
        assert!(!content.skills.is_empty());
        assert!(content.skills.iter().all(|s| s.proficiency <= 100));
    }

    #[test]
    fn test_load_without_path_uses_bundled() {
        let content = PortfolioContent::load(None).unwrap();
        assert_eq!(content.projects.len(), bundled().projects.len());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(BUNDLED_CONTENT.as_bytes()).unwrap();
        let content = PortfolioContent::load(Some(file.path())).unwrap();
        assert_eq!(content.profile.username, bundled().profile.username);
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = PortfolioContent::load(Some(Path::new("/nonexistent/portfolio.json")))
            .unwrap_err();
        assert!(matches!(err, ContentError::Io { .. }));
    }

    #[test]
    fn test_duplicate_project_id_rejected() {
        let mut content = bundled();
        let dup = content.projects[0].clone();
        content.projects.push(dup);
        let raw = serde_json::to_string(&content).unwrap();
        let err = PortfolioContent::from_json(&raw).unwrap_err();
        assert!(matches!(err, ContentError::Duplicate { kind: "project", .. }));
    }

    #[test]
    fn test_proficiency_over_100_rejected() {
        let mut content = bundled();
        content.skills[0].proficiency = 101;
        let raw = serde_json::to_string(&content).unwrap();
        assert!(matches!(
            PortfolioContent::from_json(&raw).unwrap_err(),
            ContentError::Proficiency { value: 101, .. }
        ));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            PortfolioContent::from_json("{").unwrap_err(),
            ContentError::Parse(_)
        ));
    }

    #[test]
    fn test_blog_categories_start_with_all() {
        let content = bundled();
        let categories = content.blog_categories();
        assert_eq!(categories[0], "all");
        let distinct: HashSet<&String> = categories.iter().collect();
        assert_eq!(distinct.len(), categories.len());
    }

    #[test]
    fn test_blog_posts_in_category() {
        let content = bundled();
        assert_eq!(
            content.blog_posts_in(&Selection::All).len(),
            content.blog_posts.len()
        );
        let research = content.blog_posts_in(&Selection::Only("Research".to_string()));
        assert!(!research.is_empty());
        assert!(research.iter().all(|p| p.category == "Research"));
    }

    #[test]
    fn test_book_updates_for_book() {
        let content = bundled();
        let book_id = content.books[0].id.clone();
        let updates = content.book_updates_for(&Selection::Only(book_id.clone()));
        assert!(updates.iter().all(|u| u.book_id == book_id));
        assert_eq!(
            content.book_updates_for(&Selection::All).len(),
            content.book_updates.len()
        );
    }

    #[test]
    fn test_insight_falls_back_to_template() {
        let content = bundled();
        let project = content
            .projects
            .iter()
            .find(|p| p.ai_insights.is_none())
            .unwrap();
        let insight = content.insight_for(project);
        assert_eq!(insight.project_id, project.id);
        assert_eq!(insight.summary, content.default_insight.summary);
    }

    #[test]
    fn test_lookup_by_id_and_slug() {
        let content = bundled();
        let first = &content.projects[0];
        assert_eq!(content.project(&first.id), Some(first));
        assert!(content.project("nope").is_none());
        let slug = content.blog_posts[0].slug.clone();
        assert_eq!(content.blog_post(&slug).unwrap().slug, slug);
    }
}
