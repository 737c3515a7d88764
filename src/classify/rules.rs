//! First-match decision list mapping item identifiers to theme keys
//!
//! Rules are evaluated strictly in table order. Several shipped tables contain
//! overlapping predicates (an identifier may contain members of more than one
//! substring set), so the order of the list is part of the table's meaning and
//! must never be replaced by an unordered lookup.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::ops::RangeInclusive;

/// Category label controlling an item's visual style
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeKey(String);

impl ThemeKey {
    /// Create a key from any string-like value
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Borrow the key as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Human-readable label: uppercased with separators turned into spaces
    pub fn label(&self) -> String {
        self.0.to_uppercase().replace(['_', '-'], " ")
    }
}

impl fmt::Display for ThemeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ThemeKey {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

/// Test applied to an identifier by a single rule
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Predicate {
    /// Identifier contains any of the substrings
    ContainsAny(Vec<String>),
    /// Identifier parses as a number inside the inclusive range
    NumericRange(RangeInclusive<u32>),
    /// Identifier parses as one of the listed numbers
    NumericSet(BTreeSet<u32>),
}

impl Predicate {
    /// Build a substring predicate from string slices
    pub fn contains_any(members: &[&str]) -> Self {
        Self::ContainsAny(members.iter().map(|m| (*m).to_string()).collect())
    }

    /// Build a numeric set predicate
    pub fn numeric_set(ids: &[u32]) -> Self {
        Self::NumericSet(ids.iter().copied().collect())
    }

    /// Evaluate the predicate against an identifier
    pub fn matches(&self, identifier: &str) -> bool {
        match self {
            Self::ContainsAny(members) => members.iter().any(|m| identifier.contains(m.as_str())),
            Self::NumericRange(range) => numeric_id(identifier).is_some_and(|n| range.contains(&n)),
            Self::NumericSet(ids) => numeric_id(identifier).is_some_and(|n| ids.contains(&n)),
        }
    }
}

/// Numeric value of an identifier such as `"021"`, if it is one
pub fn numeric_id(identifier: &str) -> Option<u32> {
    identifier.trim().parse().ok()
}

/// Predicate paired with the theme it selects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationRule {
    /// Test applied to the identifier
    pub predicate: Predicate,
    /// Theme returned when the predicate matches
    pub theme: ThemeKey,
}

impl ClassificationRule {
    /// Pair a predicate with its theme
    pub fn new(predicate: Predicate, theme: impl Into<ThemeKey>) -> Self {
        Self {
            predicate,
            theme: theme.into(),
        }
    }
}

/// Ordered rule list with an explicit fallback theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    rules: Vec<ClassificationRule>,
    default: ThemeKey,
}

impl RuleTable {
    /// Create a table from rules in priority order and the fallback theme
    pub const fn new(rules: Vec<ClassificationRule>, default: ThemeKey) -> Self {
        Self { rules, default }
    }

    /// Resolve an identifier to exactly one theme
    ///
    /// The first rule whose predicate matches wins; identifiers matched by no
    /// rule resolve to the default.
    pub fn classify(&self, identifier: &str) -> &ThemeKey {
        self.rules
            .iter()
            .find(|rule| rule.predicate.matches(identifier))
            .map_or(&self.default, |rule| &rule.theme)
    }

    /// Rules in evaluation order
    pub fn rules(&self) -> &[ClassificationRule] {
        &self.rules
    }

    /// Theme returned when no rule matches
    pub const fn default_theme(&self) -> &ThemeKey {
        &self.default
    }

    /// Every theme the table can produce, default included
    pub fn theme_keys(&self) -> BTreeSet<&ThemeKey> {
        self.rules
            .iter()
            .map(|rule| &rule.theme)
            .chain(std::iter::once(&self.default))
            .collect()
    }
}
