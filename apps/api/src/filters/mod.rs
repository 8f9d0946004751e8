// Project filter/rank: criteria, synonym expansion, relevance scoring, the
// pure filtering engine, the stateful widget and its HTTP handlers.

pub mod criteria;
pub mod engine;
pub mod handlers;
pub mod relevance;
pub mod synonyms;
pub mod widget;

pub use criteria::{FilterCriteria, Selection};
pub use engine::{FilterEngine, FilterOptions};
pub use relevance::{KeywordRelevanceScorer, RelevanceScorer};
pub use synonyms::SynonymTable;
pub use widget::{ProjectFilter, RecomputeOutcome, ResultSink};
