//! Fixed-size RGB raster with the drawing primitives the renderer needs
//!
//! Rectangle and ellipse bounds are inclusive on both ends. Everything drawn
//! outside the canvas is clipped silently.

use image::{Rgb, RgbImage};

/// Single-channel coverage mask for a text run
#[derive(Debug, Clone, PartialEq)]
pub struct Mask {
    width: u32,
    height: u32,
    coverage: Vec<f32>,
}

impl Mask {
    /// Empty mask of the given size
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            coverage: vec![0.0; width as usize * height as usize],
        }
    }

    /// Mask width in pixels
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Mask height in pixels
    pub const fn height(&self) -> u32 {
        self.height
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (u32::try_from(x).ok()?, u32::try_from(y).ok()?);
        (x < self.width && y < self.height).then(|| (y * self.width + x) as usize)
    }

    /// Coverage at `(x, y)`, zero outside the mask
    pub fn get(&self, x: i32, y: i32) -> f32 {
        self.index(x, y)
            .and_then(|i| self.coverage.get(i))
            .copied()
            .unwrap_or(0.0)
    }

    /// Raise coverage at `(x, y)` to at least `value`
    pub fn accumulate(&mut self, x: i32, y: i32, value: f32) {
        if let Some(cell) = self.index(x, y).and_then(|i| self.coverage.get_mut(i)) {
            *cell = cell.max(value.clamp(0.0, 1.0));
        }
    }

    /// Grow the mask by a disc of the given radius
    ///
    /// Every pixel takes the maximum coverage found within `radius` of it.
    #[must_use]
    pub fn dilate(&self, radius: u32) -> Self {
        let r = radius as i32;
        let offsets: Vec<(i32, i32)> = (-r..=r)
            .flat_map(|dy| (-r..=r).map(move |dx| (dx, dy)))
            .filter(|(dx, dy)| dx * dx + dy * dy <= r * r)
            .collect();

        let mut grown = Self::new(self.width, self.height);
        for y in 0..self.height as i32 {
            for x in 0..self.width as i32 {
                let value = offsets
                    .iter()
                    .map(|(dx, dy)| self.get(x + dx, y + dy))
                    .fold(0.0_f32, f32::max);
                grown.accumulate(x, y, value);
            }
        }
        grown
    }

    /// Whether any pixel is covered
    pub fn is_blank(&self) -> bool {
        self.coverage.iter().all(|&c| c <= 0.0)
    }
}

/// RGB raster buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    image: RgbImage,
}

impl Canvas {
    /// Canvas filled with a single color
    pub fn new(width: u32, height: u32, fill: Rgb<u8>) -> Self {
        Self {
            image: RgbImage::from_pixel(width, height, fill),
        }
    }

    /// Width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel at `(x, y)`, if inside the canvas
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgb<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Borrow the underlying image
    pub const fn image(&self) -> &RgbImage {
        &self.image
    }

    /// Take the underlying image
    pub fn into_image(self) -> RgbImage {
        self.image
    }

    /// Set one pixel, ignoring coordinates outside the canvas
    pub fn put(&mut self, x: i32, y: i32, color: Rgb<u8>) {
        self.blend(x, y, color, 1.0);
    }

    /// Mix `color` into one pixel by `coverage`
    pub fn blend(&mut self, x: i32, y: i32, color: Rgb<u8>, coverage: f32) {
        let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) else {
            return;
        };
        let Some(pixel) = self.image.get_pixel_mut_checked(x, y) else {
            return;
        };
        let alpha = coverage.clamp(0.0, 1.0);
        if alpha >= 1.0 {
            *pixel = color;
            return;
        }
        for (dst, src) in pixel.0.iter_mut().zip(color.0) {
            let mixed = f32::from(*dst) + (f32::from(src) - f32::from(*dst)) * alpha;
            *dst = mixed.round().clamp(0.0, 255.0) as u8;
        }
    }

    /// Paint a whole row
    pub fn fill_row(&mut self, y: u32, color: Rgb<u8>) {
        if y >= self.height() {
            return;
        }
        for x in 0..self.width() {
            self.image.put_pixel(x, y, color);
        }
    }

    /// Fill the inclusive rectangle `(x0, y0)..=(x1, y1)`
    pub fn fill_rect(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: Rgb<u8>) {
        for y in y0.max(0)..=y1.min(self.height() as i32 - 1) {
            for x in x0.max(0)..=x1.min(self.width() as i32 - 1) {
                self.put(x, y, color);
            }
        }
    }

    /// Filled rectangle with an inner outline band of `outline_width` pixels
    pub fn draw_rect(
        &mut self,
        (x0, y0, x1, y1): (i32, i32, i32, i32),
        fill: Rgb<u8>,
        outline: Rgb<u8>,
        outline_width: u32,
    ) {
        let w = outline_width as i32;
        self.fill_rect(x0, y0, x1, y1, outline);
        self.fill_rect(x0 + w, y0 + w, x1 - w, y1 - w, fill);
    }

    /// Filled ellipse inscribed in the inclusive box, with an inner outline band
    pub fn draw_ellipse(
        &mut self,
        (x0, y0, x1, y1): (i32, i32, i32, i32),
        fill: Rgb<u8>,
        outline: Rgb<u8>,
        outline_width: u32,
    ) {
        let cx = (x0 + x1 + 1) as f32 / 2.0;
        let cy = (y0 + y1 + 1) as f32 / 2.0;
        let rx = (x1 - x0 + 1) as f32 / 2.0;
        let ry = (y1 - y0 + 1) as f32 / 2.0;
        let w = outline_width as f32;
        let (inner_rx, inner_ry) = (rx - w, ry - w);

        let inside = |px: f32, py: f32, a: f32, b: f32| {
            a > 0.0 && b > 0.0 && {
                let nx = (px - cx) / a;
                let ny = (py - cy) / b;
                nx * nx + ny * ny <= 1.0
            }
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                let (px, py) = (x as f32 + 0.5, y as f32 + 0.5);
                if !inside(px, py, rx, ry) {
                    continue;
                }
                let color = if inside(px, py, inner_rx, inner_ry) {
                    fill
                } else {
                    outline
                };
                self.put(x, y, color);
            }
        }
    }

    /// Blend `color` through a mask placed with its top-left at `(x, y)`
    pub fn composite(&mut self, mask: &Mask, x: i32, y: i32, color: Rgb<u8>) {
        for my in 0..mask.height() as i32 {
            for mx in 0..mask.width() as i32 {
                let coverage = mask.get(mx, my);
                if coverage > 0.0 {
                    self.blend(x + mx, y + my, color, coverage);
                }
            }
        }
    }
}
