pub mod content;
pub mod project;

pub use content::*;
pub use project::*;
