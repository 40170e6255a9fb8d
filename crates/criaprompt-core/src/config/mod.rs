//! Configuration (criaprompt.toml)

pub mod consts;
mod model;

pub use model::{Config, LibraryConfig, TemplateConfig};
