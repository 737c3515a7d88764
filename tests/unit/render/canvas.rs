//! Tests for the raster canvas and coverage masks

#[cfg(test)]
mod tests {
    use image::Rgb;
    use placard::render::Canvas;
    use placard::render::canvas::Mask;

    const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
    const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
    const RED: Rgb<u8> = Rgb([255, 0, 0]);

    // Tests a new canvas is filled uniformly
    // Verified by leaving the buffer zeroed
    #[test]
    fn test_new_fills() {
        let canvas = Canvas::new(4, 3, RED);

        assert_eq!((canvas.width(), canvas.height()), (4, 3));
        assert!(canvas.image().pixels().all(|p| *p == RED));
        assert_eq!(canvas.pixel(4, 0), None);
    }

    // Tests partial coverage mixes channels with rounding
    // Verified by truncating instead of rounding
    #[test]
    fn test_blend_partial() {
        let mut canvas = Canvas::new(1, 1, BLACK);
        canvas.blend(0, 0, WHITE, 0.5);

        assert_eq!(canvas.pixel(0, 0), Some(Rgb([128, 128, 128])));
    }

    // Tests drawing outside the canvas is ignored
    // Verified by wrapping negative coordinates
    #[test]
    fn test_put_clips() {
        let mut canvas = Canvas::new(2, 2, BLACK);
        canvas.put(-1, 0, WHITE);
        canvas.put(0, 2, WHITE);
        canvas.fill_rect(-5, -5, 0, 0, WHITE);

        assert_eq!(canvas.pixel(0, 0), Some(WHITE));
        assert_eq!(canvas.pixel(1, 1), Some(BLACK));
    }

    // Tests rectangles are inclusive with an inner outline band
    // Verified by making the right edge exclusive
    #[test]
    fn test_draw_rect_outline() {
        let mut canvas = Canvas::new(20, 20, WHITE);
        canvas.draw_rect((0, 0, 10, 10), RED, BLACK, 2);

        assert_eq!(canvas.pixel(0, 0), Some(BLACK));
        assert_eq!(canvas.pixel(1, 1), Some(BLACK));
        assert_eq!(canvas.pixel(2, 2), Some(RED));
        assert_eq!(canvas.pixel(10, 10), Some(BLACK));
        assert_eq!(canvas.pixel(11, 11), Some(WHITE));
    }

    // Tests ellipses fill the centre and leave the box corners alone
    // Verified by filling the bounding box
    #[test]
    fn test_draw_ellipse() {
        let mut canvas = Canvas::new(40, 40, WHITE);
        canvas.draw_ellipse((0, 0, 29, 29), RED, BLACK, 2);

        assert_eq!(canvas.pixel(15, 15), Some(RED));
        assert_eq!(canvas.pixel(0, 0), Some(WHITE));
        assert_eq!(canvas.pixel(29, 29), Some(WHITE));
        assert_eq!(canvas.pixel(0, 15), Some(BLACK));
    }

    // Tests fill_row ignores rows past the bottom edge
    // Verified by clamping the row to the last line
    #[test]
    fn test_fill_row() {
        let mut canvas = Canvas::new(3, 2, BLACK);
        canvas.fill_row(1, RED);
        canvas.fill_row(2, WHITE);

        assert_eq!(canvas.pixel(2, 1), Some(RED));
        assert_eq!(canvas.pixel(2, 0), Some(BLACK));
    }

    // Tests mask coverage keeps the maximum and clamps to one
    // Verified by summing coverage without a clamp
    #[test]
    fn test_mask_accumulate() {
        let mut mask = Mask::new(3, 3);
        assert!(mask.is_blank());

        mask.accumulate(1, 1, 0.4);
        mask.accumulate(1, 1, 0.2);
        mask.accumulate(0, 0, 3.0);
        mask.accumulate(-1, 7, 1.0);

        assert!((mask.get(1, 1) - 0.4).abs() < f32::EPSILON);
        assert!((mask.get(0, 0) - 1.0).abs() < f32::EPSILON);
        assert!(mask.get(5, 5).abs() < f32::EPSILON);
        assert!(!mask.is_blank());
    }

    // Tests dilation grows a point into a disc, not a square
    // Verified by dilating with a square kernel
    #[test]
    fn test_mask_dilate_disc() {
        let mut mask = Mask::new(11, 11);
        mask.accumulate(5, 5, 1.0);
        let grown = mask.dilate(2);

        assert!(grown.get(7, 5) > 0.0);
        assert!(grown.get(5, 3) > 0.0);
        assert!(grown.get(6, 6) > 0.0);
        assert!(grown.get(7, 7) <= 0.0);
        assert!(grown.get(8, 5) <= 0.0);
    }

    // Tests compositing places the mask at the offset and clips at edges
    // Verified by ignoring the composite offset
    #[test]
    fn test_composite() {
        let mut mask = Mask::new(2, 2);
        mask.accumulate(0, 0, 1.0);
        mask.accumulate(1, 1, 1.0);
        let mut canvas = Canvas::new(4, 4, BLACK);

        canvas.composite(&mask, 2, 2, WHITE);
        canvas.composite(&mask, 3, 3, RED);

        assert_eq!(canvas.pixel(2, 2), Some(WHITE));
        assert_eq!(canvas.pixel(3, 2), Some(BLACK));
        assert_eq!(canvas.pixel(3, 3), Some(RED));
    }
}
