//! Shared test helpers for template engine tests

use crate::template::bindings::Bindings;
use crate::template::placeholder::Placeholder;

/// Build a binding set from literal pairs
pub(super) fn bindings(pairs: &[(&str, &str)]) -> Bindings {
    pairs.iter().map(|&(k, v)| (k, v)).collect()
}

/// Names of extracted placeholders, in order
pub(super) fn names(placeholders: &[Placeholder]) -> Vec<&str> {
    placeholders.iter().map(|p| p.name.as_str()).collect()
}

/// A realistic prompt in the hash dialect
pub(super) const HASH_PROMPT: &str = "Act as a #role. Explain #topic to #audience \
in a #tone tone. Keep the #topic examples short.";

/// The same prompt in the bracket dialect, mixing both forms
pub(super) const BRACKET_PROMPT: &str = "Act as a (role). Explain {topic} to (audience) \
in a {tone} tone. Keep the (topic) examples short.";
