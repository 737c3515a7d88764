//! Identifier classification into visual themes

/// Rule tables shipped with the built-in catalogs
pub mod presets;
/// Ordered first-match rules and theme keys
pub mod rules;

pub use rules::{ClassificationRule, Predicate, RuleTable, ThemeKey};
