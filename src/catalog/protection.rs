//! Predicates exempting existing outputs from overwrite

use crate::catalog::item::Item;
use crate::classify::rules::numeric_id;
use std::collections::BTreeSet;

/// Decides whether an item's pre-existing output must be left untouched
///
/// Protection only matters when the destination already exists; a protected
/// item with no file on disk is still rendered.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Protection {
    /// Every output is overwritten
    #[default]
    Nothing,
    /// Items whose numeric identifier is at most this value
    NumericIdAtMost(u32),
    /// Items whose identifier is listed
    Identifiers(BTreeSet<String>),
}

impl Protection {
    /// Whether the item's existing output is exempt from overwrite
    pub fn protects(&self, item: &Item) -> bool {
        match self {
            Self::Nothing => false,
            Self::NumericIdAtMost(limit) => {
                numeric_id(&item.identifier).is_some_and(|n| n <= *limit)
            }
            Self::Identifiers(ids) => ids.contains(&item.identifier),
        }
    }
}
