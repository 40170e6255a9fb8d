//! Boundary validation for prompt records

use super::model::PromptRecord;
use crate::error::{CriapromptError, Result};
use crate::template::dialect::is_valid_name;
use std::collections::HashSet;

impl PromptRecord {
    /// Check the invariants serde cannot express
    ///
    /// - `id` and `title` are not blank
    /// - tags are not blank and unique ignoring case
    /// - saved field names are valid placeholder names and unique
    pub fn validate(&self) -> Result<()> {
        if self.id.trim().is_empty() {
            return Err(self.invalid("id", "must not be blank"));
        }
        if self.title.trim().is_empty() {
            return Err(self.invalid("title", "must not be blank"));
        }

        let mut tags = HashSet::new();
        for tag in &self.tags {
            if tag.trim().is_empty() {
                return Err(self.invalid("tags", "tags must not be blank"));
            }
            if !tags.insert(tag.to_lowercase()) {
                return Err(self.invalid("tags", &format!("duplicate tag '{}'", tag)));
            }
        }

        let mut names = HashSet::new();
        for field in &self.custom_fields {
            if !is_valid_name(&field.name) {
                return Err(self.invalid(
                    "customFields",
                    &format!("'{}' is not a valid placeholder name", field.name),
                ));
            }
            if !names.insert(field.name.as_str()) {
                return Err(self.invalid(
                    "customFields",
                    &format!("duplicate field '{}'", field.name),
                ));
            }
        }

        Ok(())
    }

    fn invalid(&self, field: &str, reason: &str) -> CriapromptError {
        CriapromptError::RecordInvalid {
            id: self.id.clone(),
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }
}
