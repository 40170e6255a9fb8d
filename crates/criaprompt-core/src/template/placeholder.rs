//! Placeholder records and saved-metadata merging

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A named substitution point in a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Placeholder {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub default_value: String,
}

impl Placeholder {
    /// Placeholder with the synthetic description `Field <name>` and an empty default
    pub fn synthetic(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            description: format!("Field {}", name),
            name,
            default_value: String::new(),
        }
    }

    /// Builder-style default value
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = value.into();
        self
    }

    /// Builder-style description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// Overlay previously saved metadata onto freshly extracted placeholders
///
/// Order and membership come from `extracted`. A saved entry contributes its
/// default value, and its description when non-empty. Saved entries whose
/// name no longer occurs in the template are dropped.
pub fn merge_saved(extracted: Vec<Placeholder>, saved: &[Placeholder]) -> Vec<Placeholder> {
    if saved.is_empty() {
        return extracted;
    }

    let by_name: HashMap<&str, &Placeholder> =
        saved.iter().map(|p| (p.name.as_str(), p)).collect();

    extracted
        .into_iter()
        .map(|mut placeholder| {
            if let Some(previous) = by_name.get(placeholder.name.as_str()) {
                if !previous.description.trim().is_empty() {
                    placeholder.description = previous.description.clone();
                }
                placeholder.default_value = previous.default_value.clone();
            }
            placeholder
        })
        .collect()
}
