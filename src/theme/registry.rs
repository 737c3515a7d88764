//! Static lookup from theme keys to resolved styles

use crate::classify::ThemeKey;
use crate::io::error::{Result, missing_theme};
use crate::theme::style::ThemeStyle;
use std::collections::BTreeMap;

/// Immutable table of theme styles, built once per run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThemeRegistry {
    styles: BTreeMap<ThemeKey, ThemeStyle>,
}

impl ThemeRegistry {
    /// Resolve a theme key
    ///
    /// # Errors
    ///
    /// Returns [`PlacardError::Configuration`](crate::PlacardError::Configuration)
    /// when the key has no entry
    pub fn lookup(&self, key: &ThemeKey) -> Result<&ThemeStyle> {
        self.styles.get(key).ok_or_else(|| missing_theme(key))
    }

    /// Check that every key has an entry before any rendering starts
    ///
    /// # Errors
    ///
    /// Returns [`PlacardError::Configuration`](crate::PlacardError::Configuration)
    /// naming the first key without an entry
    pub fn ensure_covers<'a>(&self, keys: impl IntoIterator<Item = &'a ThemeKey>) -> Result<()> {
        keys.into_iter()
            .try_for_each(|key| self.lookup(key).map(|_| ()))
    }

    /// Whether the key has an entry
    pub fn contains(&self, key: &ThemeKey) -> bool {
        self.styles.contains_key(key)
    }

    /// Registered keys in sorted order
    pub fn keys(&self) -> impl Iterator<Item = &ThemeKey> {
        self.styles.keys()
    }

    /// Number of registered themes
    pub fn len(&self) -> usize {
        self.styles.len()
    }

    /// Whether no theme is registered
    pub fn is_empty(&self) -> bool {
        self.styles.is_empty()
    }
}

impl<K: Into<ThemeKey>> FromIterator<(K, ThemeStyle)> for ThemeRegistry {
    fn from_iter<I: IntoIterator<Item = (K, ThemeStyle)>>(iter: I) -> Self {
        Self {
            styles: iter.into_iter().map(|(k, s)| (k.into(), s)).collect(),
        }
    }
}
