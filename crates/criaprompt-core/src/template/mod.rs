//! Template module - Placeholder extraction and substitution for prompt text
//!
//! A prompt template is free text with named placeholders. The engine finds the
//! placeholders, renders the text against a binding set, and builds a fresh
//! binding set from declared defaults.
//!
//! ## Philosophy
//!
//! - **Total functions**: extraction and rendering never fail; malformed markers are plain text
//! - **Single pass**: substituted values are never rescanned
//! - **Explicit dialect**: the marker syntax is a value the caller chooses, never guessed
//!
//! ## Syntax
//!
//! - Hash dialect: `#name` (ends at the first non-word character)
//! - Bracket dialect: `(name)` or `{name}` (both forms name the same placeholder)
//! - Names: ASCII letters, digits and `_`, case preserved
//! - Unfilled placeholders render as `[name]`

pub mod bindings;
pub mod dialect;
pub mod engine;
pub mod error;
pub mod placeholder;

pub use bindings::Bindings;
pub use dialect::{Dialect, MarkerForm};
pub use engine::{default_bindings, extract, render, TemplateEngine};
pub use error::TemplateError;
pub use placeholder::{merge_saved, Placeholder};
