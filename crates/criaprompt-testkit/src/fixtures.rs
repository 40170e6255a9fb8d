//! Fixture files for tests
//!
//! A small prompt library covering both dialects, saved field metadata,
//! tags, categories and visibility.

use std::path::{Path, PathBuf};

/// Ids of the records in [`sample_library_json`], in file order
pub const SAMPLE_PROMPT_IDS: [&str; 3] = ["explain-concept", "code-review", "brainstorm"];

/// JSON array of three prompt records
pub fn sample_library_json() -> serde_json::Value {
    serde_json::json!([
        {
            "id": "explain-concept",
            "title": "Explain a concept",
            "content": "Explain #topic to #audience. Use one example about #topic.",
            "category": "learning",
            "tags": ["teaching", "writing"],
            "customFields": [
                { "name": "audience", "description": "Who will read it", "defaultValue": "beginners" }
            ],
            "isPublic": true,
            "views": 42,
            "favorites": 7,
            "createdAt": "2026-01-15T10:00:00Z"
        },
        {
            "id": "code-review",
            "title": "Code review",
            "content": "Review this (language) code focusing on {focus}:\n(code)",
            "category": "engineering",
            "tags": ["code", "review"],
            "dialect": "bracket",
            "views": 100,
            "favorites": 2
        },
        {
            "id": "brainstorm",
            "title": "Brainstorm ideas",
            "content": "List ten ideas about #theme for a #format.",
            "description": "Quick idea generation",
            "tags": ["writing"],
            "views": 3
        }
    ])
}

/// Write the sample library to `dir/prompts.json` and return its path
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_library(dir: &Path) -> PathBuf {
    let path = dir.join("prompts.json");
    let content =
        serde_json::to_string_pretty(&sample_library_json()).expect("Failed to serialize fixture");
    std::fs::write(&path, content).expect("Failed to write prompts.json");
    path
}

/// Write `dir/criaprompt.toml` with the given dialect and optional library path
///
/// # Panics
///
/// Panics if the file cannot be written.
pub fn write_config(dir: &Path, dialect: &str, library: Option<&str>) -> PathBuf {
    let path = dir.join("criaprompt.toml");
    let mut content = format!("[template]\ndialect = \"{}\"\n", dialect);
    if let Some(library) = library {
        content.push_str(&format!("\n[library]\npath = \"{}\"\n", library));
    }
    std::fs::write(&path, content).expect("Failed to write criaprompt.toml");
    path
}
