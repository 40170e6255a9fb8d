use crate::error::{CriapromptError, Result};
use crate::template::Dialect;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// criaprompt.toml schema
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    #[serde(default)]
    pub template: TemplateConfig,
    #[serde(default)]
    pub library: LibraryConfig,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct TemplateConfig {
    /// Marker syntax for templates that do not declare their own
    #[serde(default)]
    pub dialect: Dialect,
}

#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct LibraryConfig {
    /// JSON file or directory of JSON files
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl Config {
    /// Read criaprompt.toml
    ///
    /// A relative `[library] path` is resolved against the config file's directory.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CriapromptError::ConfigParseError(format!("{}: {}", path.display(), e))
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|e| CriapromptError::ConfigInvalid(e.to_string()))?;

        if let (Some(library), Some(base)) = (config.library.path.as_mut(), path.parent()) {
            if library.is_relative() {
                *library = base.join(&*library);
            }
        }

        tracing::debug!(path = %path.display(), dialect = %config.template.dialect, "loaded config");
        Ok(config)
    }

    /// Locate the config file to use
    ///
    /// An explicit path always wins and must exist. Otherwise the working
    /// directory is checked, then the user config directory.
    pub fn locate(explicit: Option<&Path>, cwd: &Path) -> Result<Option<PathBuf>> {
        use super::consts::files::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(CriapromptError::ConfigParseError(format!(
                    "config file '{}' does not exist",
                    path.display()
                )));
            }
            return Ok(Some(path.to_path_buf()));
        }

        let local = cwd.join(CONFIG_FILE_NAME);
        if local.is_file() {
            return Ok(Some(local));
        }

        let user = dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME));
        Ok(user.filter(|path| path.is_file()))
    }

    /// Load the located config, or defaults when none exists
    pub fn load(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        match Self::locate(explicit, cwd)? {
            Some(path) => Self::from_file(path),
            None => {
                tracing::debug!("no criaprompt.toml found, using defaults");
                Ok(Self::default())
            }
        }
    }
}
