use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    pub full_name: String,
    pub headline: String,
    pub bio_short: String,
    pub bio_long: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: String,
    pub role: String,
    pub company: String,
    pub start_date: NaiveDate,
    /// `None` for a current position.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Publication {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub venue: String,
    pub publication_date: NaiveDate,
    #[serde(default)]
    pub pdf_url: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: String,
    pub slug: String,
    pub title: String,
    pub excerpt: String,
    pub category: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub published_at: NaiveDate,
    pub read_time_minutes: u32,
    pub content_markdown: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub company: String,
    pub content: String,
    pub rating: u8,
    #[serde(default)]
    pub project: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookStatus {
    Planning,
    Writing,
    Editing,
    Review,
    Published,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookProject {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub status: BookStatus,
    pub current_pages: u32,
    pub target_pages: u32,
    pub chapters_completed: u32,
    pub total_chapters: u32,
    pub genre: String,
    pub target_audience: String,
    pub recent_milestone: String,
}

impl BookProject {
    /// Whole-number completion percentage by page count, capped at 100.
    pub fn progress_percent(&self) -> u32 {
        if self.target_pages == 0 {
            return 0;
        }
        ((self.current_pages as f64 / self.target_pages as f64) * 100.0)
            .round()
            .min(100.0) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookUpdateKind {
    Milestone,
    Progress,
    Insight,
    Challenge,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookUpdate {
    pub id: String,
    pub book_id: String,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
    pub kind: BookUpdateKind,
    #[serde(default)]
    pub pages_added: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizCard {
    pub question: String,
    #[serde(default)]
    pub options: Vec<String>,
    pub answer: String,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// One canned line per chat mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModeLines {
    pub calm: String,
    pub brutal: String,
}

/// Several canned lines per chat mode, rotated through in order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModePool {
    pub calm: Vec<String>,
    pub brutal: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicReplies {
    pub research: ModeLines,
    pub projects: ModeLines,
    pub ai: ModeLines,
    pub quantum: ModeLines,
}

/// Script for the "AI twin" chat simulator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Persona {
    pub greeting: String,
    /// Opening lines put in front of every reply.
    #[serde(default)]
    pub prefixes: ModePool,
    pub topics: TopicReplies,
    pub fallbacks: ModePool,
}

/// Insight text used for projects that carry none of their own.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InsightTemplate {
    pub summary: String,
    pub improvements: String,
    pub comparison: String,
}
