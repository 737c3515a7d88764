//! Background decoration: gradient, motifs and the seeded starfield

use crate::io::configuration::{MOON_COLOR, STAR_COLOR, STAR_COUNT};
use crate::render::canvas::Canvas;
use crate::theme::Motif;
use image::Rgb;
use rand::{Rng, SeedableRng, rngs::StdRng};

const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
const WHITE: Rgb<u8> = Rgb([255, 255, 255]);

/// Background color of row `y` under a vertical gradient
///
/// Darkening grows linearly from nothing at row 0 to `cap` at the bottom edge;
/// channels are truncated, so row 0 is the background exactly.
pub fn gradient_row(background: Rgb<u8>, y: u32, height: u32, cap: f32) -> Rgb<u8> {
    if height == 0 {
        return background;
    }
    let factor = 1.0 - (y as f32 / height as f32) * cap.clamp(0.0, 1.0);
    Rgb(background.0.map(|c| (f32::from(c) * factor) as u8))
}

/// Repaint every row with the gradient
pub fn paint_gradient(canvas: &mut Canvas, background: Rgb<u8>, cap: f32) {
    let height = canvas.height();
    for y in 0..height {
        canvas.fill_row(y, gradient_row(background, y, height, cap));
    }
}

/// Draw a motif in the accent color
pub fn paint_motif(canvas: &mut Canvas, motif: &Motif, accent: Rgb<u8>) {
    let (width, height) = (canvas.width(), canvas.height());

    match *motif {
        Motif::None => {}
        Motif::BlockGrid(lattice) => {
            let cell = lattice.cell as i32;
            for (x, y) in lattice.anchors(width, height) {
                let (x, y) = (x as i32, y as i32);
                canvas.draw_rect((x, y, x + cell, y + cell), accent, BLACK, lattice.outline);
            }
        }
        Motif::StudGrid(lattice) => {
            let cell = lattice.cell as i32;
            for (x, y) in lattice.anchors(width, height) {
                let (x, y) = (x as i32, y as i32);
                canvas.draw_ellipse((x, y, x + cell, y + cell), accent, BLACK, lattice.outline);
            }
        }
        Motif::RingedDisc {
            right,
            top,
            diameter,
            outline,
        } => {
            let x = width as i32 - right as i32;
            let y = top as i32;
            let d = diameter as i32;
            canvas.draw_ellipse((x, y, x + d, y + d), accent, BLACK, outline);
            canvas.fill_rect(x, y + d / 2 - 2, x + d, y + d / 2 + 2, BLACK);
            let (near, far) = (d * 3 / 8, d * 5 / 8);
            canvas.draw_ellipse((x + near, y + near, x + far, y + far), WHITE, BLACK, 2);
        }
    }
}

/// Stable 64-bit FNV-1a hash, used to give each identifier its own stars
pub fn identifier_hash(identifier: &str) -> u64 {
    identifier.bytes().fold(0xcbf2_9ce4_8422_2325, |hash, byte| {
        (hash ^ u64::from(byte)).wrapping_mul(0x0100_0000_01b3)
    })
}

/// Scatter stars over the top half and hang a moon near the top-right
pub fn paint_starfield(canvas: &mut Canvas, seed: u64, identifier: &str) {
    let (width, height) = (canvas.width(), canvas.height());
    let mut rng = StdRng::seed_from_u64(seed ^ identifier_hash(identifier));

    if width > 0 && height > 1 {
        for _ in 0..STAR_COUNT {
            let x = rng.random_range(0..width);
            let y = rng.random_range(0..height / 2);
            canvas.put(x as i32, y as i32, Rgb(STAR_COLOR));
        }
    }

    let w = width as i32;
    canvas.draw_ellipse((w - 150, 50, w - 50, 150), Rgb(MOON_COLOR), BLACK, 1);
}
