//! Project filtering and ranking.
//!
//! `FilterEngine::apply` is a pure function of (projects, criteria). It never
//! mutates the input and never fails: an empty list yields an empty list and
//! default criteria yield the input unchanged, in order.
//!
//! Order of passes:
//! 1. category (exact, case-insensitive)
//! 2. effort level (exact, case-insensitive)
//! 3. selected skills (any skill as substring of title or long description)
//! 4. query: literal substring match, or semantic match + stable rank

use std::sync::Arc;

use serde::Serialize;

use crate::filters::criteria::FilterCriteria;
use crate::filters::relevance::{KeywordRelevanceScorer, RelevanceScorer};
use crate::filters::synonyms::SynonymTable;
use crate::models::{ProjectRecord, Skill};

/// Number of skills offered as toggles in the filter panel.
pub const SKILL_TOGGLE_LIMIT: usize = 10;

#[derive(Clone)]
pub struct FilterEngine {
    synonyms: Arc<SynonymTable>,
    scorer: Arc<dyn RelevanceScorer>,
}

impl Default for FilterEngine {
    fn default() -> Self {
        Self::new(SynonymTable::default(), Arc::new(KeywordRelevanceScorer))
    }
}

impl FilterEngine {
    pub fn new(synonyms: SynonymTable, scorer: Arc<dyn RelevanceScorer>) -> Self {
        Self {
            synonyms: Arc::new(synonyms),
            scorer,
        }
    }

    pub fn scorer_backend(&self) -> &'static str {
        self.scorer.backend()
    }

    pub fn apply(
        &self,
        projects: &[ProjectRecord],
        criteria: &FilterCriteria,
    ) -> Vec<ProjectRecord> {
        let skills: Vec<String> = criteria
            .selected_skills
            .iter()
            .map(|s| s.to_lowercase())
            .collect();

        let filtered = projects.iter().filter(|p| {
            criteria.category.matches(&p.category)
                && criteria.effort_level.matches(&p.effort_level)
                && (skills.is_empty() || matches_any_skill(p, &skills))
        });

        let Some(query) = criteria.active_query() else {
            return filtered.cloned().collect();
        };
        let query = query.to_lowercase();

        if !criteria.semantic {
            return filtered
                .filter(|p| literal_match(p, &query))
                .cloned()
                .collect();
        }

        let tokens: Vec<&str> = query.split_whitespace().collect();
        let mut ranked: Vec<(f64, &ProjectRecord)> = filtered
            .filter(|p| self.semantic_match(p, &tokens))
            .map(|p| (self.scorer.score(&tokens, p), p))
            .collect();

        // sort_by is stable: ties keep input order
        ranked.sort_by(|a, b| b.0.total_cmp(&a.0));
        ranked.into_iter().map(|(_, p)| p.clone()).collect()
    }

    /// Relevance of one record for an already-lowercased query.
    pub fn score(&self, query: &str, record: &ProjectRecord) -> f64 {
        let tokens: Vec<&str> = query.split_whitespace().collect();
        self.scorer.score(&tokens, record)
    }

    fn semantic_match(&self, project: &ProjectRecord, tokens: &[&str]) -> bool {
        let fields = [
            project.title.to_lowercase(),
            project.description_short.to_lowercase(),
            project.description_long.to_lowercase(),
        ];
        tokens.iter().any(|token| {
            self.synonyms
                .expand(token)
                .into_iter()
                .any(|term| fields.iter().any(|f| f.contains(term)))
        })
    }
}

fn matches_any_skill(project: &ProjectRecord, skills: &[String]) -> bool {
    let title = project.title.to_lowercase();
    let long = project.description_long.to_lowercase();
    skills
        .iter()
        .any(|skill| title.contains(skill.as_str()) || long.contains(skill.as_str()))
}

fn literal_match(project: &ProjectRecord, query: &str) -> bool {
    [
        &project.title,
        &project.description_short,
        &project.description_long,
        &project.category,
        &project.effort_level,
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query))
}

/// Values offered by the filter panel's selectors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FilterOptions {
    /// Distinct categories in first-seen order.
    pub categories: Vec<String>,
    /// Distinct effort levels in first-seen order.
    pub effort_levels: Vec<String>,
    pub skills: Vec<String>,
}

impl FilterOptions {
    pub fn from_inputs(projects: &[ProjectRecord], skills: &[Skill]) -> Self {
        Self {
            categories: distinct(projects.iter().map(|p| p.category.as_str())),
            effort_levels: distinct(projects.iter().map(|p| p.effort_level.as_str())),
            skills: skills
                .iter()
                .take(SKILL_TOGGLE_LIMIT)
                .map(|s| s.name.clone())
                .collect(),
        }
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for v in values {
        if !seen.iter().any(|s| s == v) {
            seen.push(v.to_string());
        }
    }
    seen
}
