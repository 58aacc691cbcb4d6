//! # kartu-text
//!
//! Glyph metrics and rasterization for the card renderer, via
//! `cosmic-text` (font discovery + shaping) and `swash` rasterization.
//!
//! ## Architecture
//!
//! ```text
//! TextShaper (trait)
//!     │  measure(str)  ──► bulk width, wrap decisions only
//!     │  advance(char) ──► per-character x step
//!     │  raster(char)  ──► GlyphBitmap { alpha mask + placement }
//!     ▼
//! FontShaper (cosmic-text FontSystem + SwashCache, LRU-cached)
//! ```
//!
//! The renderer and layout engine only see the trait, so tests can
//! substitute deterministic synthetic metrics.

pub mod shaper;

// Re-exports for ergonomic use.
pub use shaper::{FontShaper, FontSpec, GlyphBitmap, TextShaper};
