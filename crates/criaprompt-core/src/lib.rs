// Core modules
pub mod config;
pub mod error;
pub mod library;
pub mod prompt;
pub mod template;

// Re-export commonly used types
pub use error::{CriapromptError, Result};
pub use template::{Bindings, Dialect, Placeholder, TemplateEngine};
