//! Relevance scoring for semantic-mode ranking.
//!
//! Pluggable via `RelevanceScorer`; `KeywordRelevanceScorer` is the default.
//! An embedding-backed scorer can replace it as long as higher means more
//! relevant. The engine owns the sort, so the ordering contract stays the same.

use crate::models::ProjectRecord;

pub trait RelevanceScorer: Send + Sync {
    /// `tokens` are the lowercased, whitespace-split query tokens.
    fn score(&self, tokens: &[&str], record: &ProjectRecord) -> f64;

    /// Short label reported alongside results.
    fn backend(&self) -> &'static str;
}

/// Weight added when a token occurs in `title + " " + description_long`.
pub const BODY_HIT: f64 = 1.0;
/// Extra weight when the token also occurs in the title.
pub const TITLE_BONUS: f64 = 0.5;

/// Counts substring hits per query token. Not normalised by query or
/// record length.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordRelevanceScorer;

impl RelevanceScorer for KeywordRelevanceScorer {
    fn score(&self, tokens: &[&str], record: &ProjectRecord) -> f64 {
        let title = record.title.to_lowercase();
        let body = format!("{} {}", title, record.description_long.to_lowercase());

        tokens.iter().fold(0.0, |score, token| {
            let mut score = score;
            if body.contains(token) {
                score += BODY_HIT;
            }
            if title.contains(token) {
                score += TITLE_BONUS;
            }
            score
        })
    }

    fn backend(&self) -> &'static str {
        "keyword"
    }
}
