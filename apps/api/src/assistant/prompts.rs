use crate::llm_client::prompts::{GROUNDING_INSTRUCTION, JSON_ONLY_SYSTEM};

pub fn summary_prompt(post: &str) -> String {
    format!(
        "You are a technical editor. Write a concise TL;DR of the blog post below in \
         three to five sentences. Lead with the main finding.\n\n{GROUNDING_INSTRUCTION}\n\n\
         Post length: {} characters.",
        post.chars().count()
    )
}

pub fn eli5_prompt(post: &str) -> String {
    format!(
        "You explain research to a curious ten-year-old. Rewrite the key idea of the \
         blog post below using one everyday analogy and short sentences. No jargon.\n\n\
         {GROUNDING_INSTRUCTION}\n\nPost length: {} characters.",
        post.chars().count()
    )
}

pub fn quiz_prompt(post: &str) -> String {
    format!(
        "You write study flashcards. Produce three question/answer cards that test \
         understanding of the blog post below. Number them and put each answer on the \
         line after its question.\n\n{GROUNDING_INSTRUCTION}\n\nPost length: {} characters.",
        post.chars().count()
    )
}

/// System prompt for structured quiz generation.
pub fn quiz_json_prompt(card_count: usize) -> String {
    format!(
        "{JSON_ONLY_SYSTEM}\n\nWrite exactly {card_count} quiz cards about the blog post the \
         user sends. Respond with a JSON array where each element has the shape \
         {{\"question\": string, \"options\": [string], \"answer\": string, \
         \"explanation\": string}}. `answer` must be one of `options`.\n\n\
         {GROUNDING_INSTRUCTION}"
    )
}
