use crate::template::{merge_saved, Bindings, Dialect, Placeholder, TemplateEngine};
use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A prompt in the library
///
/// `content` is a template; `custom_fields` keeps placeholder metadata saved
/// for reuse across preview sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PromptRecord {
    pub id: String,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    /// Marker syntax of `content`; the configured default applies when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dialect: Option<Dialect>,
    #[serde(default)]
    pub custom_fields: Vec<Placeholder>,
    #[serde(default)]
    pub is_public: bool,
    #[serde(default)]
    pub views: u64,
    #[serde(default)]
    pub favorites: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl PromptRecord {
    /// Minimal record with everything optional left empty
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            content: content.into(),
            description: None,
            category: None,
            tags: Vec::new(),
            dialect: None,
            custom_fields: Vec::new(),
            is_public: false,
            views: 0,
            favorites: 0,
            created_at: None,
            updated_at: None,
        }
    }

    /// The record's own dialect, or `default` when it declares none
    pub fn dialect_or(&self, default: Dialect) -> Dialect {
        self.dialect.unwrap_or(default)
    }

    /// Placeholders of `content`, with saved metadata applied
    pub fn fields(&self, dialect: Dialect) -> Vec<Placeholder> {
        let extracted = TemplateEngine::new(dialect).extract(&self.content);
        merge_saved(extracted, &self.custom_fields)
    }

    /// Render `content` against `bindings`
    pub fn preview(&self, bindings: &Bindings, dialect: Dialect) -> String {
        TemplateEngine::new(dialect).render(&self.content, bindings)
    }

    /// Replace saved field metadata with the current merged list
    ///
    /// Fields are extracted in the record's own dialect; `default` applies
    /// only when it declares none. Returns true if anything changed.
    pub fn sync_fields(&mut self, default: Dialect) -> bool {
        let fields = self.fields(self.dialect_or(default));
        if fields == self.custom_fields {
            return false;
        }
        self.custom_fields = fields;
        self.updated_at = Some(Utc::now());
        true
    }

    /// Whether the record carries `tag`, ignoring case
    pub fn has_tag(&self, tag: &str) -> bool {
        let wanted = tag.to_lowercase();
        self.tags.iter().any(|t| t.to_lowercase() == wanted)
    }
}
