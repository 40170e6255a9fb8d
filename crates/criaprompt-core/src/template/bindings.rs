//! Binding sets: placeholder name → user-supplied value

use crate::error::{CriapromptError, Result};
use crate::template::dialect::is_valid_name;
use crate::template::error::TemplateError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Values for one render pass
///
/// Lives only as long as a preview session; serializes as a flat JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Bindings {
    values: BTreeMap<String, String>,
}

impl Bindings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a value, returning the previous one
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    /// Value to substitute for `name`, or `None` when unbound or empty
    pub fn filled(&self, name: &str) -> Option<&str> {
        self.get(name).filter(|value| !value.is_empty())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Overlay `other` on top of `self`; values in `other` win
    pub fn merge(&mut self, other: Bindings) {
        self.values.extend(other.values);
    }

    /// Parse a `name=value` assignment
    ///
    /// Splits on the first `=`; the value may itself contain `=` or be empty.
    pub fn parse_assignment(input: &str) -> std::result::Result<(String, String), TemplateError> {
        let (name, value) = input
            .split_once('=')
            .ok_or_else(|| TemplateError::MalformedBinding {
                input: input.to_string(),
                reason: "expected name=value".to_string(),
            })?;

        let name = name.trim();
        if !is_valid_name(name) {
            return Err(TemplateError::MalformedBinding {
                input: input.to_string(),
                reason: "name must be letters, digits or '_'".to_string(),
            });
        }

        Ok((name.to_string(), value.to_string()))
    }

    /// Build a binding set from `name=value` assignments, later ones winning
    pub fn from_assignments<I, S>(assignments: I) -> std::result::Result<Self, TemplateError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut bindings = Self::new();
        for assignment in assignments {
            let (name, value) = Self::parse_assignment(assignment.as_ref())?;
            bindings.insert(name, value);
        }
        Ok(bindings)
    }

    /// Read a JSON object of string values
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            CriapromptError::BindingsInvalid(format!("failed to read '{}': {}", path.display(), e))
        })?;

        serde_json::from_str(&content).map_err(|e| {
            CriapromptError::BindingsInvalid(format!(
                "'{}' must be a JSON object of strings: {}",
                path.display(),
                e
            ))
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Bindings {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
