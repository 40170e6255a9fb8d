//! Environment isolation for CLI tests
//!
//! The CLI falls back to the user config directory when no config file is
//! given. Tests point every platform's config location at a scratch
//! directory so a developer's own criaprompt.toml never leaks in.

use std::path::Path;
use std::process::Command;

/// Point HOME and the platform config dirs of `cmd` at `home`
///
/// Only the child process environment changes; the test process is left
/// alone, so no lock is needed between parallel tests.
pub fn isolate_config_env<'a>(cmd: &'a mut Command, home: &Path) -> &'a mut Command {
    cmd.env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"))
        .env("APPDATA", home.join("AppData"))
        .env_remove("RUST_LOG")
}
