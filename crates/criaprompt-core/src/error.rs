use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CriapromptError {
    // Config errors
    #[error("CONFIG_PARSE_ERROR: {0}")]
    ConfigParseError(String),

    #[error("CONFIG_INVALID: failed to parse criaprompt.toml: {0}")]
    ConfigInvalid(String),

    // Library errors
    #[error("LIBRARY_NOT_FOUND: no prompt library at '{path}'")]
    LibraryNotFound { path: PathBuf },

    #[error("LIBRARY_NOT_CONFIGURED: set [library] path in criaprompt.toml")]
    LibraryNotConfigured,

    #[error("LIBRARY_PARSE_ERROR: failed to parse '{path}': {reason}")]
    LibraryParseError { path: PathBuf, reason: String },

    #[error("LIBRARY_DUPLICATE_ID: prompt id '{0}' appears more than once")]
    LibraryDuplicateId(String),

    #[error("LIBRARY_WRITE_ERROR: {0}")]
    LibraryWriteError(String),

    // Prompt errors
    #[error("PROMPT_NOT_FOUND: prompt '{0}' not found")]
    PromptNotFound(String),

    #[error("RECORD_INVALID: prompt '{id}': {field}: {reason}")]
    RecordInvalid {
        id: String,
        field: String,
        reason: String,
    },

    // Binding errors
    #[error("BINDINGS_INVALID: {0}")]
    BindingsInvalid(String),

    // IO errors
    #[error("IO_ERROR: {0}")]
    IoError(#[from] std::io::Error),

    // Generic errors
    #[error("{0}")]
    Generic(String),
}

impl From<serde_json::Error> for CriapromptError {
    fn from(err: serde_json::Error) -> Self {
        CriapromptError::Generic(format!("JSON error: {}", err))
    }
}

impl From<crate::template::error::TemplateError> for CriapromptError {
    fn from(err: crate::template::error::TemplateError) -> Self {
        use crate::template::error::TemplateError;
        match err {
            TemplateError::UnknownDialect { .. } => CriapromptError::ConfigInvalid(err.to_string()),
            TemplateError::MalformedBinding { .. } => {
                CriapromptError::BindingsInvalid(err.to_string())
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CriapromptError>;
