pub mod blog;
pub mod chat;
pub mod handlers;
pub mod insights;
pub mod prompts;
pub mod quiz;

pub use blog::{BlogAssistantRequest, BlogTool};
pub use chat::{ChatMode, PersonaChat, Topic};
pub use quiz::QuizDeck;
