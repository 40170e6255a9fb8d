//! Constants shared across the workspace

/// Config file names and locations
pub mod files {
    /// Name of the config file, looked up in the working directory first
    pub const CONFIG_FILE_NAME: &str = "criaprompt.toml";

    /// Directory under the platform config dir holding the user-level config
    pub const CONFIG_DIR_NAME: &str = "criaprompt";
}

/// Limits for library listings
pub mod listing {
    /// Characters of prompt content shown in one-line listings
    pub const PREVIEW_CHARS: usize = 60;
}
