use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Every variable has a default; malformed values fail startup.
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub rust_log: String,
    pub ollama_url: String,
    pub ollama_model: String,
    /// Content JSON to serve instead of the bundled file.
    pub content_path: Option<PathBuf>,
    pub semantic_delay_ms: u64,
    pub chat_delay_ms: u64,
    pub insights_delay_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            rust_log: "info".to_string(),
            ollama_url: "http://localhost:11434".to_string(),
            ollama_model: "llama3".to_string(),
            content_path: None,
            semantic_delay_ms: 1000,
            chat_delay_ms: 800,
            insights_delay_ms: 3000,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Config::default();
        Ok(Config {
            port: parse_or(&lookup, "PORT", defaults.port)?,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
            ollama_url: lookup("OLLAMA_URL").unwrap_or(defaults.ollama_url),
            ollama_model: lookup("OLLAMA_MODEL").unwrap_or(defaults.ollama_model),
            content_path: lookup("CONTENT_PATH")
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
            semantic_delay_ms: parse_or(&lookup, "SEMANTIC_DELAY_MS", defaults.semantic_delay_ms)?,
            chat_delay_ms: parse_or(&lookup, "CHAT_DELAY_MS", defaults.chat_delay_ms)?,
            insights_delay_ms: parse_or(&lookup, "INSIGHTS_DELAY_MS", defaults.insights_delay_ms)?,
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .with_context(|| format!("Environment variable '{key}' has invalid value '{raw}'")),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<Config> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.ollama_url, "http://localhost:11434");
        assert_eq!(config.semantic_delay_ms, 1000);
        assert_eq!(config.chat_delay_ms, 800);
        assert_eq!(config.insights_delay_ms, 3000);
        assert!(config.content_path.is_none());
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("PORT", "3000"),
            ("OLLAMA_MODEL", "mistral"),
            ("SEMANTIC_DELAY_MS", "0"),
            ("CONTENT_PATH", "/srv/content.json"),
        ])
        .unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.ollama_model, "mistral");
        assert_eq!(config.semantic_delay_ms, 0);
        assert_eq!(config.content_path, Some(PathBuf::from("/srv/content.json")));
    }

    #[test]
    fn test_invalid_number_is_error() {
        let err = config_from(&[("CHAT_DELAY_MS", "soon")]).unwrap_err();
        assert!(err.to_string().contains("CHAT_DELAY_MS"));
    }
}
