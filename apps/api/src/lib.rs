pub mod assistant;
pub mod config;
pub mod content;
pub mod errors;
pub mod filters;
pub mod github;
pub mod latency;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod state;
