use std::collections::HashMap;

/// Fixed concept map used by semantic mode to widen a query token.
#[derive(Debug, Clone)]
pub struct SynonymTable {
    entries: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    pub fn new<K, V, I>(entries: I) -> Self
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, Vec<V>)>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, vs)| {
                    (
                        k.into().to_lowercase(),
                        vs.into_iter().map(|v| v.into().to_lowercase()).collect(),
                    )
                })
                .collect(),
        }
    }

    pub fn empty() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Expands one lowercased token. The token itself always comes first, so
    /// expansion can only widen a match, never narrow it.
    pub fn expand<'a>(&'a self, token: &'a str) -> Vec<&'a str> {
        let mut terms = vec![token];
        if let Some(concepts) = self.entries.get(token) {
            terms.extend(concepts.iter().map(String::as_str));
        }
        terms
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SynonymTable {
    fn default() -> Self {
        Self::new([
            (
                "ai",
                vec![
                    "artificial",
                    "intelligence",
                    "machine",
                    "learning",
                    "neural",
                    "model",
                    "ml",
                ],
            ),
            (
                "web",
                vec![
                    "frontend",
                    "backend",
                    "react",
                    "next",
                    "javascript",
                    "typescript",
                ],
            ),
            (
                "research",
                vec!["paper", "publication", "study", "analysis", "experiment"],
            ),
            (
                "experimental",
                vec!["prototype", "proof", "concept", "novel", "innovative"],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_token_includes_itself_and_concepts() {
        let table = SynonymTable::default();
        let terms = table.expand("ai");
        assert_eq!(terms[0], "ai");
        assert!(terms.contains(&"neural"));
        assert!(terms.contains(&"artificial"));
    }

    #[test]
    fn test_unmapped_token_is_singleton() {
        let table = SynonymTable::default();
        assert_eq!(table.expand("quantum"), vec!["quantum"]);
    }

    #[test]
    fn test_custom_table_lowercases_keys() {
        let table = SynonymTable::new([("Rust", vec!["Cargo"])]);
        assert_eq!(table.expand("rust"), vec!["rust", "cargo"]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_empty_table() {
        let table = SynonymTable::empty();
        assert!(table.is_empty());
        assert_eq!(table.expand("ai"), vec!["ai"]);
    }
}
