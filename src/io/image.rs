//! JPEG encoding and persistence of rendered canvases

use crate::io::configuration::JPEG_QUALITY;
use crate::io::error::{PlacardError, Result, WithPath};
use crate::render::Canvas;
use image::codecs::jpeg::JpegEncoder;
use std::path::Path;

/// Encode a canvas as a JPEG at the given quality
///
/// # Errors
///
/// Returns [`image::ImageError`] if encoding fails
pub fn encode_jpeg(canvas: &Canvas, quality: u8) -> image::ImageResult<Vec<u8>> {
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, quality).encode_image(canvas.image())?;
    Ok(bytes)
}

/// Write a canvas to `path` as a JPEG, replacing any existing file
///
/// The file is truncated and rewritten in place; the parent directory must
/// already exist.
///
/// # Errors
///
/// Returns an error if:
/// - The canvas cannot be encoded
/// - The file cannot be written
pub fn save_jpeg(canvas: &Canvas, path: &Path) -> Result<()> {
    let bytes = encode_jpeg(canvas, JPEG_QUALITY).map_err(|source| PlacardError::ImageExport {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, bytes).with_path(path, "write image")
}
