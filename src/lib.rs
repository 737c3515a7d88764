//! Themed placeholder thumbnails for content catalogs
//!
//! Each catalog item is classified into a theme by an ordered rule table, the
//! theme is resolved to colors and a decorative motif, and the renderer paints
//! an 800×600 canvas with a stroked, word-wrapped label. The emitter writes one
//! JPEG per item, leaving protected files that already exist untouched.

#![forbid(unsafe_code)]

/// Catalog items, built-in catalogs and overwrite protection
pub mod catalog;
/// Ordered rules mapping identifiers to themes
pub mod classify;
/// Command line, batch orchestration, persistence and errors
pub mod io;
/// Canvas, fonts, layout and painting
pub mod render;
/// Theme styles and their registry
pub mod theme;

pub use io::error::{PlacardError, Result};
