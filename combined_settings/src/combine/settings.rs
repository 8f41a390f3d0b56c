//! The materialised result of a combination.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::Directive;

/// One value per key, in the order keys were first seen.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CombinedSettings(IndexMap<String, String>);

impl CombinedSettings {
    pub(super) const fn from_map(map: IndexMap<String, String>) -> Self {
        Self(map)
    }

    /// Value recorded for `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Returns `true` when `key` has a value.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of distinct keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no key has a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries as borrowed `(key, value)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries as directives.
    #[must_use]
    pub fn into_directives(self) -> Vec<Directive> {
        self.0.into_iter().map(Directive::from).collect()
    }
}

impl FromIterator<Directive> for CombinedSettings {
    /// Later directives overwrite earlier ones with the same key.
    fn from_iter<I: IntoIterator<Item = Directive>>(iter: I) -> Self {
        let mut settings = Self::default();
        settings.extend(iter);
        settings
    }
}

impl Extend<Directive> for CombinedSettings {
    fn extend<I: IntoIterator<Item = Directive>>(&mut self, iter: I) {
        self.0.extend(iter.into_iter().map(Directive::into_parts));
    }
}

impl IntoIterator for CombinedSettings {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'s> IntoIterator for &'s CombinedSettings {
    type Item = (&'s String, &'s String);
    type IntoIter = indexmap::map::Iter<'s, String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
