//! Paints one thumbnail per item from its theme style and layout

use crate::catalog::Item;
use crate::classify::ThemeKey;
use crate::io::configuration::{CANVAS_HEIGHT, CANVAS_WIDTH, DEFAULT_SEED};
use crate::render::canvas::{Canvas, Mask};
use crate::render::font::Typeface;
use crate::render::layout::{Layout, PlacedText, RenderProfile, compute_layout};
use crate::render::motif::{paint_gradient, paint_motif, paint_starfield};
use crate::theme::ThemeStyle;
use image::Rgb;

/// Outline color that stays visible around text of the given fill color
pub fn contrast_stroke(text: Rgb<u8>) -> Rgb<u8> {
    let [r, g, b] = text.0.map(f32::from);
    let luma = 0.299 * r + 0.587 * g + 0.114 * b;
    if luma < 128.0 {
        Rgb([255, 255, 255])
    } else {
        Rgb([0, 0, 0])
    }
}

/// Coverage mask spanning every inked pixel of a text run
///
/// The mask is sized from the ink itself rather than the advance box, so
/// glyphs that overhang their neighbours or the run's ends are kept whole.
/// `pad` empty pixels surround the ink on each side. Returns the mask with
/// the position of its top-left corner relative to the text box, or `None`
/// when the run leaves no ink.
pub fn text_mask(
    typeface: &dyn Typeface,
    text: &str,
    size: f32,
    pad: u32,
) -> Option<(Mask, i32, i32)> {
    let mut ink = Vec::new();
    typeface.rasterize(text, size, &mut |x, y, coverage| {
        if coverage > 0.0 {
            ink.push((x, y, coverage));
        }
    });

    let left = ink.iter().map(|&(x, _, _)| x).min()?;
    let right = ink.iter().map(|&(x, _, _)| x).max()?;
    let top = ink.iter().map(|&(_, y, _)| y).min()?;
    let bottom = ink.iter().map(|&(_, y, _)| y).max()?;

    let pad = pad as i32;
    let (origin_x, origin_y) = (left - pad, top - pad);
    let mut mask = Mask::new(
        (right - left + 1 + 2 * pad) as u32,
        (bottom - top + 1 + 2 * pad) as u32,
    );
    for (x, y, coverage) in ink {
        mask.accumulate(x - origin_x, y - origin_y, coverage);
    }
    Some((mask, origin_x, origin_y))
}

/// Stateless painter shared by every item in a run
pub struct Renderer {
    typeface: Box<dyn Typeface>,
    profile: RenderProfile,
    width: u32,
    height: u32,
    seed: u64,
}

impl Renderer {
    /// Renderer for the standard 800×600 canvas
    pub fn new(typeface: Box<dyn Typeface>, profile: RenderProfile) -> Self {
        Self {
            typeface,
            profile,
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,
            seed: DEFAULT_SEED,
        }
    }

    /// Seed for decorative randomness
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Canvas size as `(width, height)`
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Active typeface
    pub fn typeface(&self) -> &dyn Typeface {
        self.typeface.as_ref()
    }

    /// Active layout profile
    pub const fn profile(&self) -> &RenderProfile {
        &self.profile
    }

    /// Text placement for an item, without drawing
    pub fn layout(&self, item: &Item, theme: &ThemeKey) -> Layout {
        compute_layout(
            item,
            theme,
            &self.profile,
            self.typeface.as_ref(),
            self.dimensions(),
        )
    }

    /// Draw an item's thumbnail
    pub fn render(&self, item: &Item, theme: &ThemeKey, style: &ThemeStyle) -> Canvas {
        let mut canvas = Canvas::new(self.width, self.height, style.background);

        if let Some(cap) = self.profile.gradient_cap {
            paint_gradient(&mut canvas, style.background, cap);
        }
        if style.starfield {
            paint_starfield(&mut canvas, self.seed, &item.identifier);
        }
        paint_motif(&mut canvas, &style.motif, style.accent);

        let layout = self.layout(item, theme);
        for placed in layout.lines.iter().chain(&layout.badges) {
            self.paint_text(&mut canvas, placed, style.text);
        }

        canvas
    }

    // Outline first, fill on top
    fn paint_text(&self, canvas: &mut Canvas, placed: &PlacedText, fill: Rgb<u8>) {
        let Some((mask, dx, dy)) = text_mask(
            self.typeface.as_ref(),
            &placed.text,
            placed.size,
            placed.stroke + 1,
        ) else {
            return;
        };

        let (x, y) = (placed.x + dx, placed.y + dy);
        if placed.stroke > 0 {
            canvas.composite(&mask.dilate(placed.stroke), x, y, contrast_stroke(fill));
        }
        canvas.composite(&mask, x, y, fill);
    }
}
