//! Colors and decorative motif variants for a single theme

use image::Rgb;

/// Periodic cell placement shared by the grid motifs
///
/// Cells sit on a square lattice starting at `inset` and stepping by `step`
/// until `inset` short of the far edge. Only cells whose coordinate sum,
/// measured from the first lattice point, is a multiple of `period` are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lattice {
    /// Edge length of one cell in pixels
    pub cell: u32,
    /// Distance between neighbouring lattice points
    pub step: u32,
    /// Distance kept free along every canvas edge
    pub inset: u32,
    /// Sparsity period applied to the anchor's offset sum
    pub period: u32,
    /// Outline width drawn around each cell
    pub outline: u32,
}

impl Lattice {
    /// Whether the cell anchored at `(x, y)` is drawn
    pub const fn selects(&self, x: u32, y: u32) -> bool {
        let offset = x.saturating_sub(self.inset) + y.saturating_sub(self.inset);
        self.period == 0 || offset % self.period == 0
    }

    /// Anchors of every selected cell on a canvas of the given size
    pub fn anchors(&self, width: u32, height: u32) -> Vec<(u32, u32)> {
        let step = self.step.max(1) as usize;
        let x_end = width.saturating_sub(self.inset);
        let y_end = height.saturating_sub(self.inset);

        (self.inset..x_end)
            .step_by(step)
            .flat_map(|x| (self.inset..y_end).step_by(step).map(move |y| (x, y)))
            .filter(|&(x, y)| self.selects(x, y))
            .collect()
    }
}

/// Decorative pattern drawn over the background
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Motif {
    /// Plain background
    #[default]
    None,
    /// Square blocks on a sparse lattice
    BlockGrid(Lattice),
    /// Round studs on a sparse lattice
    StudGrid(Lattice),
    /// A single banded disc with a centre button, anchored to the top-right
    RingedDisc {
        /// Distance of the disc's left edge from the right canvas edge
        right: u32,
        /// Distance of the disc's top edge from the top canvas edge
        top: u32,
        /// Disc diameter
        diameter: u32,
        /// Outline width of the disc
        outline: u32,
    },
}

/// Resolved style parameters for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeStyle {
    /// Canvas fill color
    pub background: Rgb<u8>,
    /// Motif fill color
    pub accent: Rgb<u8>,
    /// Label fill color
    pub text: Rgb<u8>,
    /// Decorative pattern
    pub motif: Motif,
    /// Scatter seeded stars and a moon over the top half
    pub starfield: bool,
}

impl ThemeStyle {
    /// Style with the given colors, no motif and no starfield
    pub const fn new(background: [u8; 3], accent: [u8; 3], text: [u8; 3]) -> Self {
        Self {
            background: Rgb(background),
            accent: Rgb(accent),
            text: Rgb(text),
            motif: Motif::None,
            starfield: false,
        }
    }

    /// Replace the motif
    #[must_use]
    pub const fn with_motif(mut self, motif: Motif) -> Self {
        self.motif = motif;
        self
    }

    /// Enable the starfield
    #[must_use]
    pub const fn with_starfield(mut self) -> Self {
        self.starfield = true;
        self
    }
}
