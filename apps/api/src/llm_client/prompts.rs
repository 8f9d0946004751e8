// Shared prompt fragments. Feature-specific prompts live next to the feature
// (see assistant/prompts.rs).

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You are a precise, structured assistant. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON value. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Keeps generated text grounded in the post the reader is looking at.
pub const GROUNDING_INSTRUCTION: &str = "\
    Use only the blog post supplied by the user. \
    Do NOT invent results, numbers, or citations that the post does not contain. \
    If the post does not cover something, leave it out.";
