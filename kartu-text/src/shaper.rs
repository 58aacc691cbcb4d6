//! Text shaper — glyph metrics and alpha-mask rasterization.
//!
//! The shaper answers three questions for the render pipeline: how wide
//! is this substring (wrap decisions), how far does this character
//! advance the cursor (highlight composition), and what does this
//! character look like (an alpha mask plus baseline-relative placement
//! for blitting). The production implementation wraps a
//! `cosmic_text::FontSystem` (system font discovery + shaping) and a
//! `SwashCache` (rasterization), with LRU caches over per-character
//! results — a card redraws the same few dozen glyphs constantly.

use std::num::NonZeroUsize;

use cosmic_text::{Attrs, Buffer, Family, FontSystem, Metrics, Shaping, SwashCache, Weight};
use lru::LruCache;

/// Size + weight pair the shaper resolves against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FontSpec {
    /// Font size in pixels.
    pub size: f32,
    /// Font weight (100–900). 400 = normal, 700 = bold.
    pub weight: u16,
}

impl FontSpec {
    pub const REGULAR: u16 = 400;
    pub const BOLD: u16 = 700;

    pub fn new(size: f32, weight: u16) -> Self {
        Self { size, weight }
    }

    pub fn bold(size: f32) -> Self {
        Self::new(size, Self::BOLD)
    }

    pub fn regular(size: f32) -> Self {
        Self::new(size, Self::REGULAR)
    }
}

/// A rasterized glyph: alpha mask plus baseline-relative placement.
#[derive(Clone, Debug)]
pub struct GlyphBitmap {
    pub width: u32,
    pub height: u32,
    /// Horizontal offset from the pen position to the bitmap's left edge.
    pub left: i32,
    /// Vertical offset from the baseline up to the bitmap's top edge.
    pub top: i32,
    /// Coverage, one byte per pixel, row-major.
    pub data: Vec<u8>,
}

/// Glyph-metric provider for layout and rendering.
pub trait TextShaper {
    /// Pixel width of a substring — used only for wrap decisions.
    fn measure(&mut self, text: &str, spec: FontSpec) -> f32;

    /// Advance width of a single character. The compositor accumulates
    /// these, one character at a time, for drift-free placement.
    fn advance(&mut self, ch: char, spec: FontSpec) -> f32;

    /// Rasterize a single character. `None` for whitespace and
    /// characters no loaded font covers.
    fn raster(&mut self, ch: char, spec: FontSpec) -> Option<GlyphBitmap>;
}

// ── cosmic-text implementation ──────────────────────────────────────

/// Cache key: character + quantized size + weight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
struct GlyphKey {
    ch: char,
    /// Size in 1/64 px so f32 sizes hash cleanly.
    size_q: u32,
    weight: u16,
}

impl GlyphKey {
    fn new(ch: char, spec: FontSpec) -> Self {
        Self {
            ch,
            size_q: (spec.size * 64.0).round() as u32,
            weight: spec.weight,
        }
    }
}

const CACHE_CAPACITY: usize = 4096;

/// Production shaper on cosmic-text.
pub struct FontShaper {
    font_system: FontSystem,
    swash_cache: SwashCache,
    advances: LruCache<GlyphKey, f32>,
    bitmaps: LruCache<GlyphKey, Option<GlyphBitmap>>,
}

impl FontShaper {
    /// Create a shaper with system font discovery.
    pub fn new() -> Self {
        let capacity = NonZeroUsize::new(CACHE_CAPACITY).unwrap();
        Self {
            font_system: FontSystem::new(),
            swash_cache: SwashCache::new(),
            advances: LruCache::new(capacity),
            bitmaps: LruCache::new(capacity),
        }
    }

    /// Number of discovered font faces (0 means nothing to draw with).
    pub fn face_count(&self) -> usize {
        self.font_system.db().faces().count()
    }

    /// Shape `text` as a single unbounded line.
    fn shape_line(&mut self, text: &str, spec: FontSpec) -> Buffer {
        let metrics = Metrics::new(spec.size, spec.size);
        let attrs = Attrs::new()
            .family(Family::SansSerif)
            .weight(Weight(spec.weight));

        let mut buffer = Buffer::new(&mut self.font_system, metrics);
        buffer.set_size(&mut self.font_system, None, None);
        buffer.set_text(&mut self.font_system, text, attrs, Shaping::Advanced);
        buffer.shape_until_scroll(&mut self.font_system, false);
        buffer
    }
}

impl Default for FontShaper {
    fn default() -> Self {
        Self::new()
    }
}

impl TextShaper for FontShaper {
    fn measure(&mut self, text: &str, spec: FontSpec) -> f32 {
        let buffer = self.shape_line(text, spec);
        let mut width = 0.0f32;
        for run in buffer.layout_runs() {
            for glyph in run.glyphs {
                width = width.max(glyph.x + glyph.w);
            }
        }
        width
    }

    fn advance(&mut self, ch: char, spec: FontSpec) -> f32 {
        let key = GlyphKey::new(ch, spec);
        if let Some(&w) = self.advances.get(&key) {
            return w;
        }

        let buffer = self.shape_line(&ch.to_string(), spec);
        let advance: f32 = buffer
            .layout_runs()
            .next()
            .map(|run| run.glyphs.iter().map(|g| g.w).sum())
            .unwrap_or(0.0);

        self.advances.put(key, advance);
        advance
    }

    fn raster(&mut self, ch: char, spec: FontSpec) -> Option<GlyphBitmap> {
        let key = GlyphKey::new(ch, spec);
        if let Some(cached) = self.bitmaps.get(&key) {
            return cached.clone();
        }

        let bitmap = self.raster_uncached(ch, spec);
        self.bitmaps.put(key, bitmap.clone());
        bitmap
    }
}

impl FontShaper {
    fn raster_uncached(&mut self, ch: char, spec: FontSpec) -> Option<GlyphBitmap> {
        let buffer = self.shape_line(&ch.to_string(), spec);

        let physical = {
            let run = buffer.layout_runs().next()?;
            let glyph = run.glyphs.first()?;
            glyph.physical((0.0, 0.0), 1.0)
        };

        let image = self
            .swash_cache
            .get_image(&mut self.font_system, physical.cache_key);
        let image = match image {
            Some(img) => img,
            None => return None, // whitespace or missing glyph
        };

        let width = image.placement.width;
        let height = image.placement.height;
        if width == 0 || height == 0 {
            return None;
        }

        // Swash emits either an alpha mask (1 byte/px) or RGBA
        // (4 bytes/px, color glyphs); reduce both to coverage.
        let pixel_count = (width * height) as usize;
        let data = if image.data.len() >= pixel_count * 4 {
            image.data.chunks_exact(4).map(|px| px[3]).take(pixel_count).collect()
        } else if image.data.len() >= pixel_count {
            image.data[..pixel_count].to_vec()
        } else {
            log::warn!("glyph {ch:?} bitmap shorter than placement, skipping");
            return None;
        };

        Some(GlyphBitmap {
            width,
            height,
            left: image.placement.left + physical.x,
            top: image.placement.top - physical.y,
            data,
        })
    }
}

// ===================================================================
// Tests
// ===================================================================
