//! Client-side filtering of prompt records

use crate::prompt::PromptRecord;
use std::str::FromStr;

/// Ordering of filtered results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Library order
    #[default]
    Library,
    /// Most viewed first
    Views,
    /// Most favorited first
    Favorites,
    /// Title, case-insensitive
    Title,
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "library" => Ok(SortKey::Library),
            "views" => Ok(SortKey::Views),
            "favorites" => Ok(SortKey::Favorites),
            "title" => Ok(SortKey::Title),
            other => Err(format!(
                "unknown sort '{}', expected library, views, favorites or title",
                other
            )),
        }
    }
}

/// Criteria for listing prompts; empty criteria match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptFilter {
    /// Case-insensitive substring over title, description, content and tags
    pub query: Option<String>,
    /// Exact tag, ignoring case
    pub tag: Option<String>,
    /// Exact category, ignoring case
    pub category: Option<String>,
    /// Only records marked public
    pub public_only: bool,
    pub sort: SortKey,
}

impl PromptFilter {
    pub fn matches(&self, record: &PromptRecord) -> bool {
        if self.public_only && !record.is_public {
            return false;
        }

        if let Some(tag) = non_blank(&self.tag) {
            if !record.has_tag(tag) {
                return false;
            }
        }

        if let Some(category) = non_blank(&self.category) {
            let same = record
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase() == category.to_lowercase());
            if !same {
                return false;
            }
        }

        if let Some(query) = non_blank(&self.query) {
            return matches_query(record, &query.to_lowercase());
        }

        true
    }

    /// Apply the filter and ordering to `records`
    pub fn apply<'a>(&self, records: &'a [PromptRecord]) -> Vec<&'a PromptRecord> {
        let mut matched: Vec<&PromptRecord> = records.iter().filter(|r| self.matches(r)).collect();

        // Stable sorts keep library order between equal keys
        match self.sort {
            SortKey::Library => {}
            SortKey::Views => matched.sort_by(|a, b| b.views.cmp(&a.views)),
            SortKey::Favorites => matched.sort_by(|a, b| b.favorites.cmp(&a.favorites)),
            SortKey::Title => matched.sort_by_key(|r| r.title.to_lowercase()),
        }

        matched
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn matches_query(record: &PromptRecord, needle: &str) -> bool {
    let contains = |text: &str| text.to_lowercase().contains(needle);

    contains(record.title.as_str())
        || record.description.as_deref().is_some_and(contains)
        || contains(record.content.as_str())
        || record.tags.iter().any(|t| contains(t.as_str()))
}
