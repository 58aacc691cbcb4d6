//! # kartu-render
//!
//! CPU rendering backend for Kartu: composites a `CardConfig` onto a
//! fixed 1080×1080 RGBA canvas and encodes the result.
//!
//! ## Architecture
//!
//! ```text
//!  CardConfig (kartu-core)      CardAssets (decoded images)
//!       │                            │
//!       ▼                            ▼
//!  CardRenderer::render()  ◀─── stage machine:
//!       │                       background → overlay → logo →
//!       │                       badge → headline → subtitle → accent
//!       ▼
//!  Frame { Canvas, generation }
//!       │
//!       ▼
//!  export::encode()         ◀─── PNG / JPEG bytes
//! ```
//!
//! ## Crate modules
//!
//! - [`canvas`] — RGBA pixel buffer with fill/blend/gradient/blit ops
//! - [`assets`] — decoded background/logo image handles
//! - [`text_pass`] — wrapped, highlight-aware text drawing
//! - [`renderer`] — stage orchestration and frame generations
//! - [`export`] — raster encoding for the export collaborator

pub mod assets;
pub mod canvas;
pub mod export;
pub mod renderer;
pub mod text_pass;

// Re-exports for convenience
pub use assets::{CardAssets, ImageAsset};
pub use canvas::Canvas;
pub use export::{encode, ExportFormat};
pub use renderer::{CardRenderer, Frame, RenderError, Stage};
