//! Item records and JSON catalog loading
//!
//! Catalog documents are JSON arrays of `{ "id", "title", "filename" }`
//! records. A `prompt` field, written for manual image generation elsewhere,
//! is carried along untouched and never affects rendering.

use crate::classify::ThemeKey;
use crate::io::error::{PlacardError, Result, WithPath};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One catalog entry to be rendered into an image
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Key used for classification
    #[serde(rename = "id")]
    pub identifier: String,
    /// Display title
    pub title: String,
    /// Destination filename, used verbatim
    pub filename: String,
    /// Free-text generation prompt for external tools
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    /// Theme pinned by the catalog, bypassing classification
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemeKey>,
}

impl Item {
    /// Create an item without prompt or pinned theme
    pub fn new(
        identifier: impl Into<String>,
        title: impl Into<String>,
        filename: impl Into<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            title: title.into(),
            filename: filename.into(),
            prompt: None,
            theme: None,
        }
    }

    /// Pin the item to a theme
    #[must_use]
    pub fn with_theme(mut self, theme: impl Into<ThemeKey>) -> Self {
        self.theme = Some(theme.into());
        self
    }
}

/// Ordered set of items processed in one batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Create a catalog preserving the given order
    pub const fn new(items: Vec<Item>) -> Self {
        Self { items }
    }

    /// Parse a catalog document
    ///
    /// # Errors
    ///
    /// Returns [`serde_json::Error`] if the document is not a valid catalog
    pub fn from_json_str(document: &str) -> serde_json::Result<Self> {
        serde_json::from_str(document)
    }

    /// Read and parse a catalog document from disk
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The contents are not a valid catalog
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let document = std::fs::read_to_string(path).with_path(path, "read catalog")?;
        Self::from_json_str(&document).map_err(|source| PlacardError::CatalogLoad {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Items in catalog order
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Iterate items in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Item> {
        self.items.iter()
    }

    /// Number of items
    pub const fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items
    pub const fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Themes pinned by individual items
    pub fn pinned_themes(&self) -> impl Iterator<Item = &ThemeKey> {
        self.items.iter().filter_map(|item| item.theme.as_ref())
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Item;
    type IntoIter = std::slice::Iter<'a, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
