//! Persona chat simulator.
//!
//! Replies are canned: the message is classified into a topic by keyword and
//! answered with that topic's line for the chosen mode. Anything unrecognised
//! gets the next fallback line from a rotating pool. Every reply opens with a
//! prefix from the mode's prefix pool, rotated on the same turn counter.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::latency::{Latency, NoLatency};
use crate::models::{ModeLines, ModePool, Persona};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatMode {
    #[default]
    Calm,
    Brutal,
}

impl ChatMode {
    fn pick<'a>(&self, lines: &'a ModeLines) -> &'a str {
        match self {
            ChatMode::Calm => &lines.calm,
            ChatMode::Brutal => &lines.brutal,
        }
    }

    fn pool<'a>(&self, pool: &'a ModePool) -> &'a [String] {
        match self {
            ChatMode::Calm => &pool.calm,
            ChatMode::Brutal => &pool.brutal,
        }
    }
}

/// Line `turn` of a rotating pool, or `None` for an empty pool.
fn rotate(pool: &[String], turn: usize) -> Option<&str> {
    if pool.is_empty() {
        return None;
    }
    Some(pool[turn % pool.len()].as_str())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Research,
    Projects,
    Ai,
    Quantum,
    General,
}

/// Keyword triggers, checked in order. First match wins.
const TRIGGERS: &[(Topic, &[&str])] = &[
    (Topic::Research, &["research", "publication", "paper"]),
    (Topic::Projects, &["project", "code", "github"]),
    (Topic::Ai, &["ai", "machine learning", "neural"]),
    (Topic::Quantum, &["quantum"]),
];

impl Topic {
    /// Case-insensitive substring match against the trigger list.
    pub fn classify(message: &str) -> Topic {
        let lower = message.to_lowercase();
        TRIGGERS
            .iter()
            .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
            .map(|(topic, _)| *topic)
            .unwrap_or(Topic::General)
    }
}

pub struct PersonaChat {
    persona: Persona,
    rotation: AtomicUsize,
    latency: Arc<dyn Latency>,
}

impl PersonaChat {
    pub fn new(persona: Persona) -> Self {
        Self {
            persona,
            rotation: AtomicUsize::new(0),
            latency: Arc::new(NoLatency),
        }
    }

    /// Simulated typing delay applied before every reply.
    pub fn with_latency(mut self, latency: Arc<dyn Latency>) -> Self {
        self.latency = latency;
        self
    }

    pub fn greeting(&self) -> &str {
        &self.persona.greeting
    }

    /// Answers `message` in `mode` after the typing delay.
    pub async fn reply(&self, message: &str, mode: ChatMode) -> String {
        self.latency.wait().await;
        let topic = Topic::classify(message);
        let turn = self.rotation.fetch_add(1, Ordering::Relaxed);
        debug!(?topic, ?mode, turn, "Persona chat reply");

        let body = self.line_for(topic, mode, turn);
        match rotate(mode.pool(&self.persona.prefixes), turn) {
            Some(prefix) => format!("{prefix} {body}"),
            None => body.to_string(),
        }
    }

    fn line_for(&self, topic: Topic, mode: ChatMode, turn: usize) -> &str {
        let topics = &self.persona.topics;
        let lines = match topic {
            Topic::Research => &topics.research,
            Topic::Projects => &topics.projects,
            Topic::Ai => &topics.ai,
            Topic::Quantum => &topics.quantum,
            Topic::General => {
                return rotate(mode.pool(&self.persona.fallbacks), turn)
                    .unwrap_or(&self.persona.greeting)
            }
        };
        mode.pick(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::latency::SleepLatency;
    use crate::models::TopicReplies;
    use tokio::time::{Duration, Instant};

    fn lines(tag: &str) -> ModeLines {
        ModeLines {
            calm: format!("calm {tag}"),
            brutal: format!("brutal {tag}"),
        }
    }

    fn persona() -> Persona {
        Persona {
            greeting: "hello".to_string(),
            topics: TopicReplies {
                research: lines("research"),
                projects: lines("projects"),
                ai: lines("ai"),
                quantum: lines("quantum"),
            },
            prefixes: ModePool::default(),
            fallbacks: ModePool {
                calm: vec!["c1".to_string(), "c2".to_string()],
                brutal: vec!["b1".to_string()],
            },
        }
    }

    #[test]
    fn test_classify_topics() {
        assert_eq!(Topic::classify("Tell me about your PAPERS"), Topic::Research);
        assert_eq!(Topic::classify("show me the github"), Topic::Projects);
        assert_eq!(Topic::classify("neural nets?"), Topic::Ai);
        assert_eq!(Topic::classify("Quantum computing"), Topic::Quantum);
        assert_eq!(Topic::classify("what's your favourite food"), Topic::General);
    }

    #[test]
    fn test_classify_first_match_wins() {
        // Matches both research and quantum triggers.
        assert_eq!(Topic::classify("quantum research"), Topic::Research);
        assert_eq!(Topic::classify("code for the quantum solver"), Topic::Projects);
    }

    #[test]
    fn test_classify_ai_is_plain_substring() {
        // "ai" inside "explain" counts.
        assert_eq!(Topic::classify("explain yourself"), Topic::Ai);
    }

    #[tokio::test]
    async fn test_reply_uses_mode() {
        let chat = PersonaChat::new(persona());
        assert_eq!(chat.reply("research", ChatMode::Calm).await, "calm research");
        assert_eq!(chat.reply("research", ChatMode::Brutal).await, "brutal research");
    }

    #[tokio::test]
    async fn test_fallbacks_rotate() {
        let chat = PersonaChat::new(persona());
        let first = chat.reply("hello?", ChatMode::Calm).await;
        let second = chat.reply("hello?", ChatMode::Calm).await;
        let third = chat.reply("hello?", ChatMode::Calm).await;
        assert_eq!((first.as_str(), second.as_str()), ("c1", "c2"));
        assert_eq!(third, "c1");
    }

    #[tokio::test]
    async fn test_empty_fallback_pool_returns_greeting() {
        let mut p = persona();
        p.fallbacks.brutal.clear();
        let chat = PersonaChat::new(p);
        assert_eq!(chat.reply("weather", ChatMode::Brutal).await, "hello");
    }

    #[tokio::test]
    async fn test_prefix_opens_every_reply() {
        let mut p = persona();
        p.prefixes = ModePool {
            calm: vec!["Hmm.".to_string()],
            brutal: vec!["Listen.".to_string(), "Look.".to_string()],
        };
        let chat = PersonaChat::new(p);
        assert_eq!(chat.reply("research", ChatMode::Calm).await, "Hmm. calm research");
        assert_eq!(chat.reply("quantum", ChatMode::Brutal).await, "Look. brutal quantum");
        assert_eq!(chat.reply("github", ChatMode::Brutal).await, "Listen. brutal projects");
        assert_eq!(chat.reply("weather", ChatMode::Calm).await, "Hmm. c2");
    }

    #[tokio::test]
    async fn test_bundled_persona_prefixes_topic_line() {
        let persona = crate::content::PortfolioContent::load(None).unwrap().persona;
        let line = persona.topics.quantum.brutal.clone();
        let prefix = persona.prefixes.brutal[0].clone();
        let chat = PersonaChat::new(persona);
        assert_eq!(
            chat.reply("quantum", ChatMode::Brutal).await,
            format!("{prefix} {line}")
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_reply_waits_for_latency() {
        let chat = PersonaChat::new(persona())
            .with_latency(Arc::new(SleepLatency::from_millis(800)));
        let start = Instant::now();
        chat.reply("quantum", ChatMode::Calm).await;
        assert!(start.elapsed() >= Duration::from_millis(800));
    }

    #[test]
    fn test_mode_deserializes_lowercase() {
        let mode: ChatMode = serde_json::from_str("\"brutal\"").unwrap();
        assert_eq!(mode, ChatMode::Brutal);
        assert_eq!(ChatMode::default(), ChatMode::Calm);
    }
}
