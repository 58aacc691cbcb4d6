//! Rects and CSS-style `cover` fitting.

use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle (origin + size convention).
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

/// Placement of an image scaled to fully cover a box.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CoverFit {
    pub draw_width: f32,
    pub draw_height: f32,
    pub offset_x: f32,
    pub offset_y: f32,
}

/// Scale-and-crop placement that fills the box completely, cropping the
/// longer dimension symmetrically (CSS `background-size: cover`).
///
/// All dimensions must be positive — callers validate image dimensions
/// before invoking (a zero-height image has no aspect ratio).
pub fn cover_fit(img_width: f32, img_height: f32, box_width: f32, box_height: f32) -> CoverFit {
    debug_assert!(img_width > 0.0 && img_height > 0.0);
    debug_assert!(box_width > 0.0 && box_height > 0.0);

    let img_aspect = img_width / img_height;
    let box_aspect = box_width / box_height;

    if img_aspect > box_aspect {
        // Image relatively wider: fit to height, crop sides.
        let draw_height = box_height;
        let draw_width = box_height * img_aspect;
        CoverFit {
            draw_width,
            draw_height,
            offset_x: (box_width - draw_width) / 2.0,
            offset_y: 0.0,
        }
    } else {
        // Image relatively taller (or same aspect): fit to width, crop
        // top/bottom.
        let draw_width = box_width;
        let draw_height = box_width / img_aspect;
        CoverFit {
            draw_width,
            draw_height,
            offset_x: 0.0,
            offset_y: (box_height - draw_height) / 2.0,
        }
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wide_image_fits_height() {
        let fit = cover_fit(2000.0, 1000.0, 1080.0, 1080.0);
        assert_eq!(fit.draw_height, 1080.0);
        assert_eq!(fit.draw_width, 2160.0);
        assert_eq!(fit.offset_x, -540.0);
        assert_eq!(fit.offset_y, 0.0);
    }

    #[test]
    fn test_tall_image_fits_width() {
        let fit = cover_fit(1000.0, 2000.0, 1080.0, 1080.0);
        assert_eq!(fit.draw_width, 1080.0);
        assert_eq!(fit.draw_height, 2160.0);
        assert_eq!(fit.offset_x, 0.0);
        assert_eq!(fit.offset_y, -540.0);
    }

    #[test]
    fn test_matching_aspect_is_exact() {
        let fit = cover_fit(540.0, 540.0, 1080.0, 1080.0);
        assert_eq!(fit.draw_width, 1080.0);
        assert_eq!(fit.draw_height, 1080.0);
        assert_eq!(fit.offset_x, 0.0);
        assert_eq!(fit.offset_y, 0.0);
    }

    #[test]
    fn test_always_covers_box() {
        // Full coverage, never under-fill, for a spread of aspects.
        let cases = [
            (100.0, 900.0),
            (900.0, 100.0),
            (1080.0, 1080.0),
            (1.0, 1.0),
            (4032.0, 3024.0),
            (1080.0, 1920.0),
        ];
        for (w, h) in cases {
            let fit = cover_fit(w, h, 1080.0, 1080.0);
            assert!(fit.draw_width >= 1080.0 - 1e-3, "{w}x{h} under-fills width");
            assert!(fit.draw_height >= 1080.0 - 1e-3, "{w}x{h} under-fills height");
            // Crop is symmetric.
            assert!((fit.offset_x * 2.0 + fit.draw_width - 1080.0).abs() < 1e-3);
            assert!((fit.offset_y * 2.0 + fit.draw_height - 1080.0).abs() < 1e-3);
        }
    }

    #[test]
    fn test_non_square_box() {
        let fit = cover_fit(1000.0, 1000.0, 1920.0, 1080.0);
        assert_eq!(fit.draw_width, 1920.0);
        assert!(fit.draw_height >= 1080.0);
    }
}
