//! Template error types

use std::fmt;

/// Errors raised while building template inputs
///
/// Extraction and rendering themselves are total; these only come from
/// parsing user-facing values such as dialect names and `name=value` pairs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// Dialect name is not one of the supported dialects
    UnknownDialect {
        /// The name that was given
        name: String,
    },

    /// A binding assignment could not be parsed
    MalformedBinding {
        /// The raw assignment text
        input: String,
        /// Why it was rejected
        reason: String,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateError::UnknownDialect { name } => {
                write!(
                    f,
                    "Unknown dialect '{}'. Expected 'hash' (#name) or 'bracket' ((name) / {{name}})",
                    name
                )
            }
            TemplateError::MalformedBinding { input, reason } => {
                write!(f, "Malformed binding '{}': {}", input, reason)
            }
        }
    }
}

impl std::error::Error for TemplateError {}
