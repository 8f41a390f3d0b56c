//! Flat configuration directives and the key names they use.
//!
//! A [`Directive`] is one `(key, value)` entry. Keys are colon-segmented
//! paths such as `minimum-level:override:System`; the helpers in [`keys`]
//! build them so every source spells them the same way.

pub mod keys;

use serde::{Deserialize, Serialize};

/// A single normalised configuration entry.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Directive {
    key: String,
    value: String,
}

impl Directive {
    /// Create a directive from a key and value.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The colon-segmented key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The textual value; empty for marker directives.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Decompose the directive into its key and value.
    #[must_use]
    pub fn into_parts(self) -> (String, String) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Directive
where
    K: Into<String>,
    V: Into<String>,
{
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

/// Text used for boolean directive values.
#[must_use]
pub const fn bool_text(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
