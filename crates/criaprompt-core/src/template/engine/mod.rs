//! Template engine implementation

mod helpers;
mod tokenize;

use crate::template::bindings::Bindings;
use crate::template::dialect::Dialect;
use crate::template::placeholder::Placeholder;
use std::collections::HashSet;

use helpers::substitution;
use tokenize::MarkerStream;

/// Template engine for one marker dialect
///
/// Holds no state besides the dialect; every call is independent, so one
/// engine can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TemplateEngine {
    dialect: Dialect,
}

impl TemplateEngine {
    /// Create a new template engine for `dialect`
    pub fn new(dialect: Dialect) -> Self {
        Self { dialect }
    }

    /// The dialect this engine recognizes
    pub fn dialect(&self) -> Dialect {
        self.dialect
    }

    /// List the placeholders of a template in order of first appearance
    ///
    /// Repeated names collapse to their first occurrence. Each placeholder
    /// carries synthetic metadata; see [`crate::template::merge_saved`] to
    /// apply saved descriptions and defaults.
    pub fn extract(&self, template: &str) -> Vec<Placeholder> {
        let mut seen = HashSet::new();
        let placeholders: Vec<Placeholder> = MarkerStream::new(template, self.dialect)
            .filter(|marker| seen.insert(marker.name))
            .map(|marker| Placeholder::synthetic(marker.name))
            .collect();

        tracing::debug!(
            dialect = %self.dialect,
            count = placeholders.len(),
            "extracted placeholders"
        );
        placeholders
    }

    /// Render a template against a binding set
    ///
    /// Every marker is replaced by its non-empty bound value or by `[name]`.
    /// Substituted text is copied verbatim and never rescanned.
    pub fn render(&self, template: &str, bindings: &Bindings) -> String {
        let mut output = String::with_capacity(template.len());
        let mut pos = 0;
        let mut replaced = 0usize;

        for marker in MarkerStream::new(template, self.dialect) {
            output.push_str(&template[pos..marker.start]);
            output.push_str(&substitution(bindings, marker.name));
            pos = marker.end();
            replaced += 1;
        }
        output.push_str(&template[pos..]);

        tracing::debug!(dialect = %self.dialect, replaced, "rendered template");
        output
    }

    /// Fresh binding set holding each placeholder's default value
    pub fn default_bindings(&self, placeholders: &[Placeholder]) -> Bindings {
        default_bindings(placeholders)
    }
}

/// Convenience function to extract placeholders
pub fn extract(template: &str, dialect: Dialect) -> Vec<Placeholder> {
    TemplateEngine::new(dialect).extract(template)
}

/// Convenience function to render a template
pub fn render(template: &str, bindings: &Bindings, dialect: Dialect) -> String {
    TemplateEngine::new(dialect).render(template, bindings)
}

/// Map each placeholder name to its default value
///
/// Used to restore a clean preview after the user has typed overrides.
pub fn default_bindings(placeholders: &[Placeholder]) -> Bindings {
    placeholders
        .iter()
        .map(|p| (p.name.clone(), p.default_value.clone()))
        .collect()
}

#[cfg(test)]
mod tests;
