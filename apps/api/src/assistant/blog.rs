//! Blog assistant: summary, ELI5 and quiz generation for a blog post,
//! proxied to the local model server.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::assistant::prompts;
use crate::errors::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlogTool {
    Summary,
    Eli5,
    Quiz,
}

impl BlogTool {
    pub const ALL: [BlogTool; 3] = [BlogTool::Summary, BlogTool::Eli5, BlogTool::Quiz];

    pub fn as_str(&self) -> &'static str {
        match self {
            BlogTool::Summary => "summary",
            BlogTool::Eli5 => "eli5",
            BlogTool::Quiz => "quiz",
        }
    }

    /// System prompt for this tool, built from the post the user supplied.
    pub fn system_prompt(&self, post: &str) -> String {
        match self {
            BlogTool::Summary => prompts::summary_prompt(post),
            BlogTool::Eli5 => prompts::eli5_prompt(post),
            BlogTool::Quiz => prompts::quiz_prompt(post),
        }
    }
}

impl fmt::Display for BlogTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, PartialEq, Eq)]
pub struct UnknownTool(pub String);

impl FromStr for BlogTool {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BlogTool::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

/// Request body for `POST /api/v1/ai/blog-assistant`.
#[derive(Debug, Deserialize)]
pub struct BlogAssistantRequest {
    pub feature: Option<String>,
    #[serde(rename = "userInput")]
    pub user_input: Option<String>,
}

impl BlogAssistantRequest {
    /// Validates the body into a tool and the post text.
    pub fn validate(self) -> Result<(BlogTool, String), AppError> {
        let feature = self.feature.filter(|f| !f.trim().is_empty());
        let input = self.user_input.filter(|i| !i.trim().is_empty());
        let (Some(feature), Some(input)) = (feature, input) else {
            return Err(AppError::Validation("Missing feature or input.".to_string()));
        };
        let tool = feature
            .parse::<BlogTool>()
            .map_err(|UnknownTool(f)| AppError::Validation(format!("Unknown feature: {f}")))?;
        Ok((tool, input))
    }
}
