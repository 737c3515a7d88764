//! Catalog items, built-in catalogs and overwrite protection

/// Item records and JSON catalog loading
pub mod item;
/// Catalogs shipped with the binary
pub mod presets;
/// Predicates exempting existing outputs from overwrite
pub mod protection;

pub use item::{Catalog, Item};
pub use presets::Preset;
pub use protection::Protection;
