//! High-level card renderer — runs the fixed stage sequence against an
//! offscreen canvas and swaps completed frames in whole.
//!
//! ```text
//! Background → Overlay → Logo? → Badge? → Headline → Subtitle? → Accent
//! ```
//!
//! Every render pass reads one immutable `CardConfig` snapshot and is
//! stamped with a monotonically increasing generation. Only completed
//! frames are observable (`latest_frame`), and a completed pass whose
//! generation is older than the newest committed frame is discarded —
//! a slow earlier render can never overwrite a newer one.

use thiserror::Error;

use kartu_core::color::Color;
use kartu_core::config::{CardConfig, VerticalPosition};
use kartu_core::geometry::{cover_fit, Rect};
use kartu_text::{FontSpec, TextShaper};

use crate::assets::{CardAssets, ImageAsset};
use crate::canvas::Canvas;
use crate::text_pass::{
    draw_plain_text, draw_text_block, BlockStyle, HEADLINE_SHADOW, SUBTITLE_SHADOW,
};

/// Output raster size (Instagram square), logical pixels.
pub const CANVAS_SIZE: u32 = 1080;
/// Uniform content padding.
pub const CONTENT_PADDING: f32 = 60.0;

// The UI-facing font size and the canvas font size are related by this
// fixed multiplier; it feeds every wrap width and line height, so the
// export wraps exactly like the preview.
const CANVAS_FONT_SCALE: f32 = 1.5;
const SUBTITLE_FRACTION: f32 = 0.45;
const HEADLINE_SUBTITLE_GAP: f32 = 30.0;

const CENTER_OFFSET: f32 = 100.0;
const BOTTOM_RESERVE: f32 = 300.0;

const ACCENT_BAR_HEIGHT: f32 = 8.0;
const LOGO_HEIGHT: f32 = 60.0;

const BADGE_WIDTH: f32 = 140.0;
const BADGE_HEIGHT: f32 = 36.0;
const BADGE_RISE: f32 = 10.0;
const BADGE_LABEL: &str = "TERKINI";
const BADGE_FONT_SIZE: f32 = 16.0;
const BADGE_BASELINE: f32 = 24.0;
const BADGE_HEADLINE_SHIFT: f32 = 60.0;

// Default background gradient when no photo is configured.
const DEFAULT_BG_FROM: Color = Color::rgb(0x66, 0x7e, 0xea);
const DEFAULT_BG_TO: Color = Color::rgb(0x76, 0x4b, 0xa2);

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("invalid image: {0}")]
    InvalidImage(String),
}

/// Render pipeline stages, in draw order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stage {
    Background,
    Overlay,
    Logo,
    Badge,
    Headline,
    Subtitle,
    Accent,
}

/// A completed render: the canvas plus the generation that produced it.
#[derive(Clone)]
pub struct Frame {
    canvas: Canvas,
    generation: u64,
}

impl Frame {
    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// Orchestrates render passes over a glyph shaper.
pub struct CardRenderer<S> {
    shaper: S,
    generation: u64,
    latest: Option<Frame>,
}

impl<S: TextShaper> CardRenderer<S> {
    pub fn new(shaper: S) -> Self {
        Self {
            shaper,
            generation: 0,
            latest: None,
        }
    }

    /// Allocate the next render generation.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Commit a completed frame. Returns `false` (frame dropped) when a
    /// newer frame has already been committed.
    pub fn commit(&mut self, frame: Frame) -> bool {
        if let Some(latest) = &self.latest {
            if latest.generation >= frame.generation {
                log::debug!(
                    "discarding stale frame generation {} (latest {})",
                    frame.generation,
                    latest.generation
                );
                return false;
            }
        }
        self.latest = Some(frame);
        true
    }

    /// The newest completed frame — the export collaborator's read.
    /// `None` until a render pass has completed; there is no partially
    /// drawn state to observe.
    pub fn latest_frame(&self) -> Option<&Frame> {
        self.latest.as_ref()
    }

    /// Run one full render pass and commit the result.
    pub fn render(
        &mut self,
        config: &CardConfig,
        assets: &CardAssets,
    ) -> Result<&Frame, RenderError> {
        let generation = self.begin();
        let frame = self.render_pass(config, assets, generation)?;
        // A generation allocated just above is always the newest.
        Ok(self.latest.insert(frame))
    }

    fn render_pass(
        &mut self,
        config: &CardConfig,
        assets: &CardAssets,
        generation: u64,
    ) -> Result<Frame, RenderError> {
        let mut canvas = Canvas::new(CANVAS_SIZE, CANVAS_SIZE);
        let size = CANVAS_SIZE as f32;
        let palette = config.template.effective_palette(config.primary_color);

        // ── Background ──────────────────────────────────────────
        match &assets.background {
            Some(photo) => draw_cover_image(&mut canvas, photo),
            None => canvas.fill_diagonal_gradient(DEFAULT_BG_FROM, DEFAULT_BG_TO),
        }
        log::debug!("stage complete: {:?}", Stage::Background);

        // ── Overlay ─────────────────────────────────────────────
        let terminal_alpha =
            (config.overlay_opacity.min(100) as f32 / 100.0 * 255.0).round() as u8;
        canvas.fill_vertical_gradient(palette.gradient[0], 0, palette.gradient[1], terminal_alpha);
        log::debug!("stage complete: {:?}", Stage::Overlay);

        // ── Logo (optional) ─────────────────────────────────────
        if let Some(logo) = &assets.logo {
            let logo_width = logo.width() as f32 / logo.height() as f32 * LOGO_HEIGHT;
            let scaled = logo.resized(logo_width.round() as u32, LOGO_HEIGHT as u32);
            canvas.blit_rgba(
                scaled.as_raw(),
                scaled.width(),
                scaled.height(),
                CONTENT_PADDING as i32,
                CONTENT_PADDING as i32,
            );
            log::debug!("stage complete: {:?}", Stage::Logo);
        }

        let mut text_y = text_start_y(config.position, size);

        // ── Badge (template-gated) ──────────────────────────────
        if config.template.has_badge() {
            let badge_y = text_y - BADGE_RISE;
            canvas.fill_rect(
                Rect::new(CONTENT_PADDING, badge_y, BADGE_WIDTH, BADGE_HEIGHT),
                palette.primary,
                255,
            );

            let spec = FontSpec::bold(BADGE_FONT_SIZE);
            let label_width = self.shaper.measure(BADGE_LABEL, spec);
            draw_plain_text(
                &mut canvas,
                &mut self.shaper,
                BADGE_LABEL,
                spec,
                CONTENT_PADDING + (BADGE_WIDTH - label_width) / 2.0,
                badge_y + BADGE_BASELINE,
                Color::WHITE,
                None,
            );
            text_y += BADGE_HEADLINE_SHIFT;
            log::debug!("stage complete: {:?}", Stage::Badge);
        }

        // ── Headline ────────────────────────────────────────────
        let scaled_size = config.headline.font_size_px * CANVAS_FONT_SCALE;
        let max_width = size - CONTENT_PADDING * 2.0;
        let headline_height = draw_text_block(
            &mut canvas,
            &mut self.shaper,
            &config.headline.content,
            &config.headline.highlights,
            BlockStyle {
                spec: FontSpec::bold(scaled_size),
                color: config.text_color,
                shadow: HEADLINE_SHADOW,
            },
            CONTENT_PADDING,
            text_y,
            max_width,
        );
        log::debug!("stage complete: {:?}", Stage::Headline);

        // ── Subtitle (optional) ─────────────────────────────────
        if !config.subtitle.content.is_empty() {
            let subtitle_y = text_y + headline_height + HEADLINE_SUBTITLE_GAP;
            draw_text_block(
                &mut canvas,
                &mut self.shaper,
                &config.subtitle.content,
                &config.subtitle.highlights,
                BlockStyle {
                    spec: FontSpec::regular(scaled_size * SUBTITLE_FRACTION),
                    color: config.text_color,
                    shadow: SUBTITLE_SHADOW,
                },
                CONTENT_PADDING,
                subtitle_y,
                max_width,
            );
            log::debug!("stage complete: {:?}", Stage::Subtitle);
        }

        // ── Accent bar ──────────────────────────────────────────
        canvas.fill_rect(
            Rect::new(0.0, size - ACCENT_BAR_HEIGHT, size, ACCENT_BAR_HEIGHT),
            palette.accent,
            255,
        );
        log::debug!("stage complete: {:?}", Stage::Accent);

        log::info!("rendered card generation {generation}");
        Ok(Frame { canvas, generation })
    }
}

/// First headline baseline for a vertical position, before any badge
/// shift.
fn text_start_y(position: VerticalPosition, canvas_size: f32) -> f32 {
    match position {
        VerticalPosition::Top => CONTENT_PADDING,
        VerticalPosition::Center => canvas_size / 2.0 - CENTER_OFFSET,
        VerticalPosition::Bottom => canvas_size - BOTTOM_RESERVE,
    }
}

/// Cover-fit a photo over the whole canvas.
fn draw_cover_image(canvas: &mut Canvas, photo: &ImageAsset) {
    let size = CANVAS_SIZE as f32;
    let fit = cover_fit(photo.width() as f32, photo.height() as f32, size, size);
    let scaled = photo.resized(fit.draw_width.round() as u32, fit.draw_height.round() as u32);
    canvas.blit_rgba(
        scaled.as_raw(),
        scaled.width(),
        scaled.height(),
        fit.offset_x.round() as i32,
        fit.offset_y.round() as i32,
    );
}

// ===================================================================
// Tests
// ===================================================================
