//! CLI command implementations

pub mod defaults;
pub mod fields;
pub mod list;
pub mod render;
pub mod schema;
pub mod show;
pub mod tags;
