//! Text measurement and rasterization behind a common typeface interface
//!
//! A TrueType/OpenType file is preferred. When it cannot be read or parsed the
//! built-in bitmap font takes over, so a missing font never stops a batch.

use crate::io::error::{PlacardError, Result};
use crate::render::glyphs::{GLYPH_ADVANCE, GLYPH_HEIGHT, GLYPH_WIDTH, glyph, lit};
use ab_glyph::{Font, FontVec, GlyphId, PxScale, ScaleFont, point};
use std::path::Path;

/// Pixel size of a laid-out text run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextExtent {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

/// Measures and rasterizes single-line text
pub trait Typeface: Send + Sync {
    /// Short name used in logs
    fn name(&self) -> &str;

    /// Size of the text's box at the given pixel size
    fn measure(&self, text: &str, size: f32) -> TextExtent;

    /// Emit coverage values in `0.0..=1.0` relative to the text box's top-left
    ///
    /// Coordinates may fall slightly outside the measured box; callers clip.
    fn rasterize(&self, text: &str, size: f32, plot: &mut dyn FnMut(i32, i32, f32));
}

/// Blocky 5x7 font compiled into the binary
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinFont;

impl BuiltinFont {
    /// Pixels per font unit for a requested size
    pub fn unit(size: f32) -> u32 {
        let unit = (size / (GLYPH_HEIGHT + 1) as f32).round();
        if unit.is_finite() && unit >= 1.0 {
            unit as u32
        } else {
            1
        }
    }
}

impl Typeface for BuiltinFont {
    fn name(&self) -> &str {
        "builtin"
    }

    fn measure(&self, text: &str, size: f32) -> TextExtent {
        let count = text.chars().count() as u32;
        if count == 0 {
            return TextExtent::default();
        }
        let unit = Self::unit(size);
        let columns = count
            .saturating_mul(GLYPH_ADVANCE)
            .saturating_sub(GLYPH_ADVANCE - GLYPH_WIDTH);
        TextExtent {
            width: columns.saturating_mul(unit),
            height: GLYPH_HEIGHT.saturating_mul(unit),
        }
    }

    fn rasterize(&self, text: &str, size: f32, plot: &mut dyn FnMut(i32, i32, f32)) {
        let unit = Self::unit(size) as i32;
        for (index, c) in text.chars().enumerate() {
            let origin = index as i32 * GLYPH_ADVANCE as i32 * unit;
            for (row_index, row) in glyph(c).iter().enumerate() {
                for col in 0..GLYPH_WIDTH {
                    if !lit(*row, col) {
                        continue;
                    }
                    let x0 = origin + col as i32 * unit;
                    let y0 = row_index as i32 * unit;
                    for dy in 0..unit {
                        for dx in 0..unit {
                            plot(x0 + dx, y0 + dy, 1.0);
                        }
                    }
                }
            }
        }
    }
}

/// Scalable font loaded from a TrueType/OpenType file
pub struct OutlineFont {
    font: FontVec,
    name: String,
}

impl OutlineFont {
    /// Parse font bytes; collections use their first face
    ///
    /// # Errors
    ///
    /// Returns [`PlacardError::ResourceUnavailable`] if the bytes are not a font
    pub fn from_bytes(bytes: Vec<u8>, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        let font = FontVec::try_from_vec_and_index(bytes, 0).map_err(|e| {
            PlacardError::ResourceUnavailable {
                path: name.clone().into(),
                reason: e.to_string(),
            }
        })?;
        Ok(Self { font, name })
    }

    /// Read and parse a font file, named after its file name
    ///
    /// # Errors
    ///
    /// Returns [`PlacardError::ResourceUnavailable`] with the full path if the
    /// file cannot be read or is not a font
    pub fn from_path(path: &Path) -> Result<Self> {
        let unavailable = |reason: String| PlacardError::ResourceUnavailable {
            path: path.to_path_buf(),
            reason,
        };
        let bytes = std::fs::read(path).map_err(|e| unavailable(e.to_string()))?;
        let font = FontVec::try_from_vec_and_index(bytes, 0)
            .map_err(|e| unavailable(e.to_string()))?;
        let name = path.file_name().map_or_else(
            || path.display().to_string(),
            |file| file.to_string_lossy().into_owned(),
        );
        Ok(Self { font, name })
    }

    // Caret position after each glyph, kerning included
    fn positions(&self, text: &str, scale: PxScale) -> (Vec<(GlyphId, f32)>, f32) {
        let scaled = self.font.as_scaled(scale);
        let mut caret = 0.0;
        let mut previous: Option<GlyphId> = None;
        let mut placed = Vec::with_capacity(text.len());

        for c in text.chars() {
            let id = scaled.glyph_id(c);
            if let Some(prev) = previous {
                caret += scaled.kern(prev, id);
            }
            placed.push((id, caret));
            caret += scaled.h_advance(id);
            previous = Some(id);
        }

        (placed, caret)
    }
}

impl Typeface for OutlineFont {
    fn name(&self) -> &str {
        &self.name
    }

    fn measure(&self, text: &str, size: f32) -> TextExtent {
        if text.is_empty() {
            return TextExtent::default();
        }
        let scale = PxScale::from(size);
        let scaled = self.font.as_scaled(scale);
        let (_, advance) = self.positions(text, scale);
        TextExtent {
            width: advance.ceil().max(0.0) as u32,
            height: (scaled.ascent() - scaled.descent()).ceil().max(0.0) as u32,
        }
    }

    fn rasterize(&self, text: &str, size: f32, plot: &mut dyn FnMut(i32, i32, f32)) {
        let scale = PxScale::from(size);
        let ascent = self.font.as_scaled(scale).ascent();
        let (placed, _) = self.positions(text, scale);

        for (id, caret) in placed {
            let positioned = id.with_scale_and_position(scale, point(caret, ascent));
            if let Some(outlined) = self.font.outline_glyph(positioned) {
                let bounds = outlined.px_bounds();
                let (left, top) = (bounds.min.x as i32, bounds.min.y as i32);
                outlined.draw(|x, y, coverage| plot(left + x as i32, top + y as i32, coverage));
            }
        }
    }
}

/// Load the preferred font, falling back to [`BuiltinFont`]
///
/// Failures are logged and never returned: rendering always has a typeface.
pub fn load_typeface(path: Option<&Path>) -> Box<dyn Typeface> {
    let Some(path) = path else {
        return Box::new(BuiltinFont);
    };

    match OutlineFont::from_path(path) {
        Ok(font) => {
            tracing::debug!(font = font.name(), "loaded font");
            Box::new(font)
        }
        Err(error) => {
            tracing::warn!(%error, "using built-in font");
            Box::new(BuiltinFont)
        }
    }
}
