//! Rule tables for the built-in blend and story catalogs

use crate::classify::rules::{ClassificationRule, Predicate, RuleTable, ThemeKey};

/// Three-letter s-blends, listed ahead of the r-blends they contain
pub const S_BLEND_TRIGRAPHS: &[&str] = &["scr", "squ", "str", "spr", "spl"];
/// Two-letter r-blends
pub const R_BLENDS: &[&str] = &["br", "cr", "dr", "fr", "gr", "pr", "tr"];
/// Two-letter s-blends
pub const S_BLENDS: &[&str] = &["sc", "sk", "sm", "sn", "sp", "st", "sw"];
/// Two-letter l-blends
pub const L_BLENDS: &[&str] = &["bl", "cl", "fl", "gl", "pl", "sl"];
/// Word-final blends
pub const FINAL_BLENDS: &[&str] = &[
    "ct", "ft", "lt", "nt", "pt", "xt", "ck", "ld", "lf", "lk", "lm", "lp", "mb", "mp", "nd", "nk",
    "rd", "rf", "rk", "rl", "rm", "rn", "rt",
];

/// Classification of consonant-blend identifiers such as `"br-words"`
///
/// `"scr-words"` also contains `"cr"`; the trigraph rule comes first so it
/// lands with the other s-blends.
pub fn blend_rules() -> RuleTable {
    RuleTable::new(
        vec![
            ClassificationRule::new(Predicate::contains_any(S_BLEND_TRIGRAPHS), "s-blends"),
            ClassificationRule::new(Predicate::contains_any(R_BLENDS), "r-blends"),
            ClassificationRule::new(Predicate::contains_any(S_BLENDS), "s-blends"),
            ClassificationRule::new(Predicate::contains_any(L_BLENDS), "l-blends"),
            ClassificationRule::new(Predicate::contains_any(FINAL_BLENDS), "final-blends"),
        ],
        ThemeKey::new("other"),
    )
}

/// Classification of numbered stories such as `"021"`
pub fn story_rules() -> RuleTable {
    RuleTable::new(
        vec![
            ClassificationRule::new(Predicate::NumericRange(1..=10), "minecraft"),
            ClassificationRule::new(Predicate::NumericRange(11..=20), "lego"),
            ClassificationRule::new(Predicate::NumericRange(21..=30), "pokemon"),
            ClassificationRule::new(Predicate::numeric_set(&[31, 37, 38, 42, 49]), "outdoor"),
            ClassificationRule::new(
                Predicate::numeric_set(&[32, 33, 44, 45, 48, 50]),
                "creative",
            ),
            ClassificationRule::new(Predicate::numeric_set(&[34, 35, 36, 40, 41, 46]), "sports"),
        ],
        ThemeKey::new("learning"),
    )
}
