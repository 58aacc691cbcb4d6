//! Shared test shaper with deterministic, font-free metrics.

use kartu_text::{FontSpec, GlyphBitmap, TextShaper};

/// Every character advances `size * 0.6`; non-space characters raster
/// to a solid box half the advance wide and half the size tall, sitting
/// on the baseline. Deterministic on any machine, fonts or not.
pub struct BoxShaper;

impl BoxShaper {
    pub fn advance_for(spec: FontSpec) -> f32 {
        spec.size * 0.6
    }
}

impl TextShaper for BoxShaper {
    fn measure(&mut self, text: &str, spec: FontSpec) -> f32 {
        text.chars().count() as f32 * Self::advance_for(spec)
    }

    fn advance(&mut self, _ch: char, spec: FontSpec) -> f32 {
        Self::advance_for(spec)
    }

    fn raster(&mut self, ch: char, spec: FontSpec) -> Option<GlyphBitmap> {
        if ch == ' ' {
            return None;
        }
        let width = (Self::advance_for(spec) * 0.5).round().max(1.0) as u32;
        let height = (spec.size * 0.5).round().max(1.0) as u32;
        Some(GlyphBitmap {
            width,
            height,
            left: 0,
            top: height as i32,
            data: vec![255u8; (width * height) as usize],
        })
    }
}
