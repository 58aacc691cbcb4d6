//! Highlight-aware text drawing.
//!
//! One call draws one text block: wrap into lines, compose each line
//! into per-character instructions, then paint — highlight background
//! first, shadow, glyph — character by character. Wrap decisions use
//! bulk substring measurement; glyph placement uses accumulated
//! per-character advances. Both come from the same shaper, and the
//! wrap is shared with the height-only path by construction.

use kartu_core::color::Color;
use kartu_core::geometry::Rect;
use kartu_core::highlight::HighlightRange;
use kartu_layout::{compose_line, wrap, wrapped_height};
use kartu_text::{FontSpec, TextShaper};

use crate::canvas::Canvas;

/// Line height as a multiple of the font size.
pub const LINE_HEIGHT_FACTOR: f32 = 1.1;

// Highlight background geometry, relative to the pen position and the
// block's font size.
const HIGHLIGHT_PAD_X: f32 = 2.0;
const HIGHLIGHT_PAD_W: f32 = 4.0;
const HIGHLIGHT_RISE: f32 = 10.0;
const HIGHLIGHT_EXTRA_H: f32 = 5.0;
const HIGHLIGHT_BG_ALPHA: u8 = 0x80;

/// Offset drop shadow, an approximation of the preview's blurred one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub dx: f32,
    pub dy: f32,
    pub alpha: f32,
}

/// Shadow under plain headline glyphs.
pub const HEADLINE_SHADOW: Shadow = Shadow { dx: 3.0, dy: 3.0, alpha: 0.45 };
/// Lighter shadow under subtitle glyphs.
pub const SUBTITLE_SHADOW: Shadow = Shadow { dx: 2.0, dy: 2.0, alpha: 0.35 };
/// Stronger shadow under highlighted glyphs.
const HIGHLIGHT_SHADOW: Shadow = Shadow { dx: 3.0, dy: 3.0, alpha: 0.8 };

/// Style for one text block pass.
#[derive(Clone, Copy, Debug)]
pub struct BlockStyle {
    pub spec: FontSpec,
    pub color: Color,
    pub shadow: Shadow,
}

/// Draw a wrapped text block with highlights. `baseline_y` is the first
/// line's baseline; returns the block's total wrapped height.
pub fn draw_text_block(
    canvas: &mut Canvas,
    shaper: &mut dyn TextShaper,
    content: &str,
    highlights: &[HighlightRange],
    style: BlockStyle,
    origin_x: f32,
    baseline_y: f32,
    max_width: f32,
) -> f32 {
    let line_height = style.spec.size * LINE_HEIGHT_FACTOR;
    let lines = wrap(content, max_width, line_height, |s| {
        shaper.measure(s, style.spec)
    });

    for line in &lines {
        let baseline = baseline_y + line.y;
        let instructions = compose_line(line, highlights, origin_x, |ch| {
            shaper.advance(ch, style.spec)
        });

        for instr in &instructions {
            let (glyph_color, shadow) = match instr.highlight {
                Some(highlight_color) => {
                    canvas.fill_rect(
                        Rect::new(
                            instr.x - HIGHLIGHT_PAD_X,
                            baseline - style.spec.size + HIGHLIGHT_RISE,
                            instr.width + HIGHLIGHT_PAD_W,
                            style.spec.size + HIGHLIGHT_EXTRA_H,
                        ),
                        highlight_color,
                        HIGHLIGHT_BG_ALPHA,
                    );
                    (Color::WHITE, HIGHLIGHT_SHADOW)
                }
                None => (style.color, style.shadow),
            };

            draw_glyph(canvas, shaper, instr.ch, style.spec, instr.x, baseline, glyph_color, Some(shadow));
        }
    }

    log::debug!(
        "text block: {} chars over {} lines at {}px",
        content.chars().count(),
        lines.len(),
        style.spec.size
    );
    wrapped_height(&lines, line_height)
}

/// Draw a single unwrapped run (the badge label). Advances the pen by
/// each character's own width; no highlights, optional shadow.
pub fn draw_plain_text(
    canvas: &mut Canvas,
    shaper: &mut dyn TextShaper,
    text: &str,
    spec: FontSpec,
    origin_x: f32,
    baseline_y: f32,
    color: Color,
    shadow: Option<Shadow>,
) {
    let mut x = origin_x;
    for ch in text.chars() {
        draw_glyph(canvas, shaper, ch, spec, x, baseline_y, color, shadow);
        x += shaper.advance(ch, spec);
    }
}

fn draw_glyph(
    canvas: &mut Canvas,
    shaper: &mut dyn TextShaper,
    ch: char,
    spec: FontSpec,
    pen_x: f32,
    baseline_y: f32,
    color: Color,
    shadow: Option<Shadow>,
) {
    let Some(bitmap) = shaper.raster(ch, spec) else {
        return; // whitespace or uncovered character
    };

    let glyph_x = pen_x.round() as i32 + bitmap.left;
    let glyph_y = baseline_y.round() as i32 - bitmap.top;

    if let Some(shadow) = shadow {
        canvas.blit_mask(
            &bitmap.data,
            bitmap.width,
            bitmap.height,
            glyph_x + shadow.dx.round() as i32,
            glyph_y + shadow.dy.round() as i32,
            Color::BLACK,
            shadow.alpha,
        );
    }
    canvas.blit_mask(
        &bitmap.data,
        bitmap.width,
        bitmap.height,
        glyph_x,
        glyph_y,
        color,
        1.0,
    );
}

// ===================================================================
// Tests
// ===================================================================
