use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The "all" sentinel used by the category and effort selectors.
pub const ALL: &str = "all";

/// A selector value: either everything, or one label.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    All,
    Only(String),
}

impl Selection {
    /// Parses selector input. `"all"` (any case) and blank input mean `All`.
    pub fn parse(value: &str) -> Self {
        let trimmed = value.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(ALL) {
            Selection::All
        } else {
            Selection::Only(trimmed.to_string())
        }
    }

    /// Case-insensitive exact match; `All` matches every label.
    pub fn matches(&self, label: &str) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(wanted) => wanted.to_lowercase() == label.to_lowercase(),
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, Selection::All)
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selection::All => f.write_str(ALL),
            Selection::Only(label) => f.write_str(label),
        }
    }
}

impl Serialize for Selection {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Selection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Selection::parse(&raw))
    }
}

/// The user's current filter state. `Default` is the cleared state.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterCriteria {
    pub query: String,
    pub category: Selection,
    pub effort_level: Selection,
    /// Insertion-ordered, no duplicates.
    pub selected_skills: Vec<String>,
    pub semantic: bool,
}

impl FilterCriteria {
    /// Adds the skill if absent, removes it if present. Returns whether it is now selected.
    pub fn toggle_skill(&mut self, skill: &str) -> bool {
        if let Some(pos) = self.selected_skills.iter().position(|s| s == skill) {
            self.selected_skills.remove(pos);
            false
        } else {
            self.selected_skills.push(skill.to_string());
            true
        }
    }

    /// The trimmed query, or `None` when there is nothing to search for.
    pub fn active_query(&self) -> Option<&str> {
        let trimmed = self.query.trim();
        (!trimmed.is_empty()).then_some(trimmed)
    }

    /// Whether a recompute will go through the simulated semantic delay.
    pub fn needs_semantic_pass(&self) -> bool {
        self.semantic && self.active_query().is_some()
    }

    pub fn is_default(&self) -> bool {
        *self == FilterCriteria::default()
    }
}
