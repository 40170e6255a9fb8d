//! Global context for CLI commands

use crate::cli::SourceArgs;
use anyhow::{Context as _, Result};
use criaprompt_core::config::Config;
use criaprompt_core::library::PromptLibrary;
use criaprompt_core::prompt::PromptRecord;
use criaprompt_core::template::{Dialect, Placeholder, TemplateEngine};
use criaprompt_core::CriapromptError;
use std::env;
use std::io::Read;
use std::path::{Path, PathBuf};

/// Global context containing the loaded configuration
pub struct Context {
    pub config: Config,
    pub verbose: bool,
}

/// A template ready to extract from or render
pub struct TemplateSource {
    pub text: String,
    pub dialect: Dialect,
    /// Set when the template came from the library
    pub record: Option<PromptRecord>,
}

impl TemplateSource {
    pub fn engine(&self) -> TemplateEngine {
        TemplateEngine::new(self.dialect)
    }

    /// Placeholders of the template, with saved metadata when from the library
    pub fn fields(&self) -> Vec<Placeholder> {
        match &self.record {
            Some(record) => record.fields(self.dialect),
            None => self.engine().extract(&self.text),
        }
    }
}

impl Context {
    /// Create a new context by locating and loading criaprompt.toml
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit config path does not exist or the
    /// config file cannot be parsed
    pub fn new(config_path: Option<&Path>, verbose: bool) -> Result<Self> {
        let current_dir = env::current_dir()?;
        let config = Config::load(config_path, &current_dir)?;
        Ok(Self { config, verbose })
    }

    /// Path of the configured prompt library
    pub fn library_path(&self) -> Result<PathBuf> {
        self.config
            .library
            .path
            .clone()
            .ok_or_else(|| CriapromptError::LibraryNotConfigured.into())
    }

    /// Load the configured prompt library
    pub fn library(&self) -> Result<PromptLibrary> {
        let path = self.library_path()?;
        Ok(PromptLibrary::load(path)?)
    }

    /// Resolve the template named by `--prompt`, a file, or stdin
    ///
    /// Dialect precedence: `--dialect`, then the prompt's own, then config.
    pub fn template_source(&self, args: &SourceArgs) -> Result<TemplateSource> {
        let default = self.config.template.dialect;

        if let Some(id) = &args.prompt {
            let record = self.library()?.require(id)?.clone();
            let dialect = args.dialect.unwrap_or(record.dialect_or(default));
            return Ok(TemplateSource {
                text: record.content.clone(),
                dialect,
                record: Some(record),
            });
        }

        let text = match &args.file {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read template '{}'", path.display()))?,
            None => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .context("Failed to read template from stdin")?;
                text
            }
        };

        Ok(TemplateSource {
            text,
            dialect: args.dialect.unwrap_or(default),
            record: None,
        })
    }
}
