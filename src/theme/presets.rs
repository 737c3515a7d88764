//! Theme registries for the built-in blend and story catalogs

use crate::theme::registry::ThemeRegistry;
use crate::theme::style::{Lattice, Motif, ThemeStyle};

const WHITE: [u8; 3] = [255, 255, 255];
const BLACK: [u8; 3] = [0, 0, 0];

/// 40 px blocks every 120 px, one in two diagonals
pub const BLOCKS: Motif = Motif::BlockGrid(Lattice {
    cell: 40,
    step: 120,
    inset: 0,
    period: 240,
    outline: 2,
});

/// 30 px studs every 60 px inside a 50 px border
pub const STUDS: Motif = Motif::StudGrid(Lattice {
    cell: 30,
    step: 60,
    inset: 50,
    period: 120,
    outline: 2,
});

/// 80 px banded disc near the top-right corner
pub const RINGED_DISC: Motif = Motif::RingedDisc {
    right: 120,
    top: 50,
    diameter: 80,
    outline: 3,
};

/// Styles for the consonant-blend catalog
pub fn blend_registry() -> ThemeRegistry {
    [
        ("r-blends", ThemeStyle::new([255, 102, 102], WHITE, WHITE)),
        ("s-blends", ThemeStyle::new([102, 178, 255], WHITE, WHITE)),
        ("l-blends", ThemeStyle::new([102, 255, 178], WHITE, BLACK)),
        ("final-blends", ThemeStyle::new([255, 178, 102], WHITE, BLACK)),
        ("other", ThemeStyle::new([204, 153, 255], WHITE, WHITE)),
    ]
    .into_iter()
    .collect()
}

/// Styles for the numbered story catalog
pub fn story_registry() -> ThemeRegistry {
    [
        (
            "minecraft",
            ThemeStyle::new([76, 175, 80], [139, 69, 19], WHITE).with_motif(BLOCKS),
        ),
        (
            "lego",
            ThemeStyle::new([255, 193, 7], [244, 67, 54], WHITE).with_motif(STUDS),
        ),
        (
            "pokemon",
            ThemeStyle::new([33, 150, 243], [255, 235, 59], WHITE).with_motif(RINGED_DISC),
        ),
        ("outdoor", ThemeStyle::new([139, 195, 74], [255, 193, 7], WHITE)),
        ("creative", ThemeStyle::new([156, 39, 176], [255, 152, 0], WHITE)),
        ("sports", ThemeStyle::new([255, 87, 34], [33, 150, 243], WHITE)),
        ("learning", ThemeStyle::new([96, 125, 139], [255, 193, 7], WHITE)),
        (
            "night",
            ThemeStyle::new([50, 50, 50], [255, 80, 80], WHITE).with_starfield(),
        ),
    ]
    .into_iter()
    .collect()
}
