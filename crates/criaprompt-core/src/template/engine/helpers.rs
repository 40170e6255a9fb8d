//! Helper functions for template rendering

use crate::template::bindings::Bindings;
use std::borrow::Cow;

/// Text to emit for a placeholder: the bound value, or `[name]` when unfilled
pub(crate) fn substitution<'a>(bindings: &'a Bindings, name: &str) -> Cow<'a, str> {
    match bindings.filled(name) {
        Some(value) => Cow::Borrowed(value),
        None => Cow::Owned(fallback_token(name)),
    }
}

/// Visible marker for a placeholder with no value
pub(crate) fn fallback_token(name: &str) -> String {
    format!("[{}]", name)
}
