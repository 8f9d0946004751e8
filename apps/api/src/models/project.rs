use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A developer-authored portfolio project. Read-only once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    pub description_short: String,
    pub description_long: String,
    /// Display label such as "Research" or "Production".
    pub category: String,
    pub effort_level: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_card: Option<ModelCard>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ai_insights: Option<ProjectInsight>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelCard {
    pub architecture: String,
    pub dataset: String,
    pub prompt_methods: String,
    #[serde(default)]
    pub evaluation_metrics: Vec<EvaluationMetric>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationMetric {
    pub metric: String,
    pub value: String,
}

/// Canned "how an AI sees this project" text shown in the insights panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectInsight {
    pub project_id: String,
    pub summary: String,
    pub improvements: String,
    pub comparison: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub id: String,
    pub name: String,
    pub category: String,
    /// Fixed 0–100 value for the skill bar.
    pub proficiency: u8,
}

#[cfg(test)]
pub(crate) fn sample_project(
    title: &str,
    category: &str,
    effort: &str,
    long: &str,
) -> ProjectRecord {
    ProjectRecord {
        id: title.to_lowercase().replace(' ', "-"),
        title: title.to_string(),
        description_short: String::new(),
        description_long: long.to_string(),
        category: category.to_string(),
        effort_level: effort.to_string(),
        tags: vec![],
        cover_image_url: None,
        project_url: None,
        repo_url: None,
        created_at: None,
        model_card: None,
        ai_insights: None,
    }
}
