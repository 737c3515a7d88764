//! Procedural thumbnail rendering
//!
//! Each canvas is painted in a fixed order: background, optional gradient,
//! optional starfield, motif, wrapped label, then badges. Text with a stroke
//! width gets a contrasting outline so it stays legible on any background.

/// RGB canvas and drawing primitives
pub mod canvas;
/// Typeface interface with outline and built-in bitmap fonts
pub mod font;
/// Built-in bitmap glyph table
pub mod glyphs;
/// Label selection, wrapping and placement
pub mod layout;
/// Gradient, motif and starfield painting
pub mod motif;
/// Per-item painter
pub mod renderer;

pub use canvas::Canvas;
pub use font::{BuiltinFont, OutlineFont, TextExtent, Typeface, load_typeface};
pub use layout::{Layout, RenderProfile};
pub use renderer::Renderer;
