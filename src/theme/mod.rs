//! Theme styles and the registry resolving theme keys to them

/// Styles shipped with the built-in catalogs
pub mod presets;
/// Theme key to style lookup
pub mod registry;
/// Colors and decorative motif variants
pub mod style;

pub use registry::ThemeRegistry;
pub use style::{Lattice, Motif, ThemeStyle};
