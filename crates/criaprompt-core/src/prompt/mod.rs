//! Prompt records
//!
//! Typed replacement for the loosely shaped rows a hosted backend returns.
//! Records are checked once at the boundary (`validate`) and trusted after.

mod model;
mod validate;

pub use model::PromptRecord;

/// JSON Schema describing a prompt record
pub fn record_schema() -> schemars::Schema {
    schemars::schema_for!(PromptRecord)
}
