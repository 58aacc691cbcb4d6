//! Decoded image handles for the render pass.
//!
//! The ingestion collaborator hands the renderer raw bytes; here they
//! become pixel buffers with known dimensions, which cover-fit needs
//! before any drawing starts. Decode failures are recovered per the
//! card's fallback policy: a bad background falls back to the default
//! gradient, a bad logo is simply omitted — both logged, neither fatal.

use image::imageops::{self, FilterType};
use image::RgbaImage;

use crate::renderer::RenderError;

/// A decoded RGBA image with positive dimensions.
pub struct ImageAsset {
    pixels: RgbaImage,
}

impl ImageAsset {
    /// Decode PNG/JPEG bytes. Zero-dimension images are rejected here
    /// so cover-fit never sees a degenerate aspect ratio.
    pub fn decode(bytes: &[u8]) -> Result<Self, RenderError> {
        let pixels = image::load_from_memory(bytes)?.to_rgba8();
        if pixels.width() == 0 || pixels.height() == 0 {
            return Err(RenderError::InvalidImage(format!(
                "degenerate dimensions {}x{}",
                pixels.width(),
                pixels.height()
            )));
        }
        Ok(Self { pixels })
    }

    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Resample to the given size (bilinear).
    pub fn resized(&self, width: u32, height: u32) -> RgbaImage {
        imageops::resize(&self.pixels, width.max(1), height.max(1), FilterType::Triangle)
    }
}

/// The two optional images a card can carry, already decoded.
#[derive(Default)]
pub struct CardAssets {
    pub background: Option<ImageAsset>,
    pub logo: Option<ImageAsset>,
}

impl CardAssets {
    /// Decode both image handles, applying the recovery policy: a
    /// failed background decode falls back to `None` (the renderer
    /// draws the default gradient), a failed logo decode omits the
    /// logo. Both are reported via the log.
    pub fn decode(background: Option<&[u8]>, logo: Option<&[u8]>) -> Self {
        let background = background.and_then(|bytes| match ImageAsset::decode(bytes) {
            Ok(asset) => Some(asset),
            Err(e) => {
                log::warn!("background image failed to decode ({e}); using gradient fallback");
                None
            }
        });
        let logo = logo.and_then(|bytes| match ImageAsset::decode(bytes) {
            Ok(asset) => Some(asset),
            Err(e) => {
                log::warn!("logo failed to decode ({e}); omitting logo");
                None
            }
        });
        Self { background, logo }
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use image::ImageFormat;
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32, rgba: [u8; 4]) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, image::Rgba(rgba));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, ImageFormat::Png).unwrap();
        out.into_inner()
    }

    #[test]
    fn test_decode_reports_dimensions() {
        let asset = ImageAsset::decode(&png_bytes(12, 7, [10, 20, 30, 255])).unwrap();
        assert_eq!(asset.width(), 12);
        assert_eq!(asset.height(), 7);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(ImageAsset::decode(b"not an image").is_err());
    }

    #[test]
    fn test_resized_changes_dimensions() {
        let asset = ImageAsset::decode(&png_bytes(10, 10, [200, 0, 0, 255])).unwrap();
        let scaled = asset.resized(25, 5);
        assert_eq!(scaled.width(), 25);
        assert_eq!(scaled.height(), 5);
        // Solid input stays solid through resampling.
        assert_eq!(scaled.get_pixel(12, 2).0, [200, 0, 0, 255]);
    }

    #[test]
    fn test_card_assets_recover_from_bad_bytes() {
        let good = png_bytes(4, 4, [0, 255, 0, 255]);
        let assets = CardAssets::decode(Some(b"garbage"), Some(&good));
        assert!(assets.background.is_none());
        assert!(assets.logo.is_some());
    }

    #[test]
    fn test_card_assets_absent_inputs() {
        let assets = CardAssets::decode(None, None);
        assert!(assets.background.is_none());
        assert!(assets.logo.is_none());
    }
}
