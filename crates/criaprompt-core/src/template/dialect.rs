//! Placeholder marker dialects

use crate::template::error::TemplateError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Marker syntax used by a template
///
/// The two dialects are independent: a template written in one is plain text
/// to the other.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// `#name`
    #[default]
    Hash,
    /// `(name)` or `{name}`
    Bracket,
}

impl Dialect {
    /// Canonical lowercase name, as used in config files and on the command line
    pub fn as_str(self) -> &'static str {
        match self {
            Dialect::Hash => "hash",
            Dialect::Bracket => "bracket",
        }
    }
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dialect {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hash" => Ok(Dialect::Hash),
            "bracket" => Ok(Dialect::Bracket),
            _ => Err(TemplateError::UnknownDialect {
                name: s.to_string(),
            }),
        }
    }
}

/// Concrete shape of a single marker occurrence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkerForm {
    /// `#name`
    Hash,
    /// `(name)`
    Paren,
    /// `{name}`
    Brace,
}

impl MarkerForm {
    /// Closing delimiter byte, if the form has one
    pub(crate) fn closing_byte(self) -> Option<u8> {
        match self {
            MarkerForm::Hash => None,
            MarkerForm::Paren => Some(b')'),
            MarkerForm::Brace => Some(b'}'),
        }
    }
}

/// Word bytes allowed in placeholder names: ASCII alphanumerics and `_`
#[inline]
pub(crate) fn is_name_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}

/// Check that a whole string is a valid placeholder name
pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_name_byte)
}
