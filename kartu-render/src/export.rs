//! Raster encoding for the export collaborator.
//!
//! Export reads only committed frames — the renderer's completion
//! signal — so there is never a settle delay or a partially drawn
//! buffer behind these bytes.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder};

use crate::renderer::{Frame, RenderError};

/// JPEG quality, matching the preview's export setting.
const JPEG_QUALITY: u8 = 90;

/// Supported raster output formats.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Png,
    Jpeg,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Png => "png",
            ExportFormat::Jpeg => "jpg",
        }
    }
}

/// Encode a completed frame.
pub fn encode(frame: &Frame, format: ExportFormat) -> Result<Vec<u8>, RenderError> {
    let canvas = frame.canvas();
    let (width, height) = (canvas.width(), canvas.height());
    let mut out = Vec::new();

    match format {
        ExportFormat::Png => {
            PngEncoder::new(&mut out).write_image(
                canvas.data(),
                width,
                height,
                ExtendedColorType::Rgba8,
            )?;
        }
        ExportFormat::Jpeg => {
            // JPEG carries no alpha; the frame is opaque by the time a
            // render completes, so dropping the channel is lossless.
            let rgb: Vec<u8> = canvas
                .data()
                .chunks_exact(4)
                .flat_map(|px| [px[0], px[1], px[2]])
                .collect();
            JpegEncoder::new_with_quality(&mut out, JPEG_QUALITY).write_image(
                &rgb,
                width,
                height,
                ExtendedColorType::Rgb8,
            )?;
        }
    }

    log::debug!(
        "encoded generation {} as {} ({} bytes)",
        frame.generation(),
        format.extension(),
        out.len()
    );
    Ok(out)
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_names() {
        assert_eq!(ExportFormat::Png.extension(), "png");
        assert_eq!(ExportFormat::Jpeg.extension(), "jpg");
    }
}
