//! Tests for JPEG encoding and persistence

#[cfg(test)]
mod tests {
    use image::{GenericImageView, Rgb};
    use placard::PlacardError;
    use placard::io::image::{encode_jpeg, save_jpeg};
    use placard::render::Canvas;
    use tempfile::TempDir;

    // Tests encoding produces a JPEG stream
    // Verified by encoding as PNG
    #[test]
    fn test_encode_jpeg_header() {
        let canvas = Canvas::new(16, 8, Rgb([255, 102, 102]));
        let bytes = encode_jpeg(&canvas, 95).unwrap();

        assert_eq!(&bytes[..2], &[0xFF, 0xD8]);
    }

    // Tests a saved file decodes back to the canvas size and colour
    // Verified by writing the image transposed
    #[test]
    fn test_save_jpeg_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("001.jpg");
        let canvas = Canvas::new(800, 600, Rgb([255, 102, 102]));

        save_jpeg(&canvas, &path).unwrap();
        let decoded = image::open(&path).unwrap();

        assert_eq!(decoded.dimensions(), (800, 600));
        let pixel = decoded.to_rgb8().get_pixel(400, 300).0;
        assert!(pixel.iter().zip([255_u8, 102, 102]).all(|(a, b)| a.abs_diff(b) <= 3));
    }

    // Tests saving replaces an existing file
    // Verified by skipping existing files
    #[test]
    fn test_save_jpeg_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("002.jpg");
        std::fs::write(&path, b"stale").unwrap();

        save_jpeg(&Canvas::new(8, 8, Rgb([0, 0, 0])), &path).unwrap();

        assert_ne!(std::fs::read(&path).unwrap(), b"stale");
    }

    // Tests writing into a missing directory reports a file system error
    // Verified by creating missing parent directories
    #[test]
    fn test_save_jpeg_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing").join("003.jpg");

        let result = save_jpeg(&Canvas::new(8, 8, Rgb([0, 0, 0])), &path);

        assert!(matches!(result, Err(PlacardError::FileSystem { .. })));
    }
}
