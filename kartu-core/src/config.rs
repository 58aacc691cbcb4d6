//! `CardConfig` — the declarative card description.
//!
//! Created with defaults at session start, mutated field-by-field by UI
//! collaborators, and read (never written) by the renderer. The whole
//! aggregate is serde round-trippable so the persistence collaborator
//! can snapshot it verbatim, highlight order included.

use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::highlight::{add_highlight, remove_highlight, HighlightRange};
use crate::template::Template;

/// Vertical anchor for the text block on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalPosition {
    Top,
    Center,
    Bottom,
}

impl Default for VerticalPosition {
    fn default() -> Self {
        Self::Bottom
    }
}

/// One text field plus its highlights.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    pub content: String,
    pub highlights: Vec<HighlightRange>,
    /// Nominal font size in pixels. For the subtitle block this is
    /// advisory: rendering derives the subtitle size from the headline
    /// size so the two blocks keep a fixed proportion.
    pub font_size_px: f32,
}

impl TextBlock {
    pub fn new(content: impl Into<String>, font_size_px: f32) -> Self {
        Self {
            content: content.into(),
            highlights: Vec::new(),
            font_size_px,
        }
    }

    /// Insert a highlight over `[start, end)`; keeps the collection
    /// sorted. Returns `false` (and changes nothing) for empty spans.
    pub fn add_highlight(&mut self, start: usize, end: usize, color: Color, text: &str) -> bool {
        add_highlight(&mut self.highlights, start, end, color, text)
    }

    /// Remove the highlight at `index` in current sorted order.
    pub fn remove_highlight(&mut self, index: usize) -> Option<HighlightRange> {
        remove_highlight(&mut self.highlights, index)
    }
}

/// The full card description consumed by the renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    pub headline: TextBlock,
    pub subtitle: TextBlock,
    /// Opaque background image reference (path or URL); `None` renders
    /// the default gradient.
    pub background_image: Option<String>,
    /// Opaque logo image reference; `None` omits the logo.
    pub logo_url: Option<String>,
    pub template: Template,
    pub primary_color: Color,
    pub text_color: Color,
    /// Color applied to the next highlight the user adds.
    pub highlight_color: Color,
    /// Overlay strength at the gradient's terminal stop, percent [0,100].
    pub overlay_opacity: u8,
    pub position: VerticalPosition,
}

impl Default for CardConfig {
    fn default() -> Self {
        let highlight_color = Color::rgb(0x8b, 0x5c, 0xf6);

        let mut headline = TextBlock::new(
            "UGM Ciptakan Sistem Inspeksi Mobil Berbasis Blockchain",
            48.0,
        );
        // Default sample highlight, recorded against the default
        // headline. Offsets are pinned (see `highlight` module docs).
        headline.add_highlight(32, 56, highlight_color, "Mobil Berbasis Blockchain");

        let subtitle = TextBlock::new(
            "Teknologi blockchain digunakan untuk meningkatkan transparansi \
             dan keamanan dalam proses inspeksi kendaraan",
            22.0,
        );

        Self {
            headline,
            subtitle,
            background_image: None,
            logo_url: None,
            template: Template::Crypto,
            primary_color: Color::rgb(0x7c, 0x3a, 0xed),
            text_color: Color::WHITE,
            highlight_color,
            overlay_opacity: 70,
            position: VerticalPosition::Bottom,
        }
    }
}

impl CardConfig {
    /// Apply a template: switches the preset and adopts its primary
    /// color, like picking a quick template in the UI.
    pub fn apply_template(&mut self, template: Template) {
        self.template = template;
        self.primary_color = template.palette().primary;
    }
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_initial_session() {
        let cfg = CardConfig::default();
        assert_eq!(cfg.template, Template::Crypto);
        assert_eq!(cfg.position, VerticalPosition::Bottom);
        assert_eq!(cfg.overlay_opacity, 70);
        assert_eq!(cfg.headline.font_size_px, 48.0);
        assert_eq!(cfg.headline.highlights.len(), 1);
        assert_eq!(cfg.headline.highlights[0].start, 32);
        assert_eq!(cfg.headline.highlights[0].end, 56);
        assert!(cfg.background_image.is_none());
    }

    #[test]
    fn test_serde_roundtrip_field_for_field() {
        let mut cfg = CardConfig::default();
        cfg.subtitle.add_highlight(0, 9, Color::rgb(0xec, 0x48, 0x99), "Teknologi");
        cfg.headline.add_highlight(0, 3, Color::rgb(0x10, 0xb9, 0x81), "UGM");
        cfg.background_image = Some("bg.jpg".to_string());
        cfg.overlay_opacity = 35;
        cfg.position = VerticalPosition::Center;

        let json = serde_json::to_string(&cfg).unwrap();
        let back: CardConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
        // Highlight sort order survives verbatim.
        let starts: Vec<usize> = back.headline.highlights.iter().map(|r| r.start).collect();
        assert_eq!(starts, vec![0, 32]);
    }

    #[test]
    fn test_apply_template_adopts_preset_primary() {
        let mut cfg = CardConfig::default();
        cfg.apply_template(Template::Business);
        assert_eq!(cfg.template, Template::Business);
        assert_eq!(cfg.primary_color, Template::Business.palette().primary);
    }

    #[test]
    fn test_block_highlight_ops() {
        let mut block = TextBlock::new("hello world", 48.0);
        assert!(block.add_highlight(6, 11, Color::WHITE, "world"));
        assert!(!block.add_highlight(4, 4, Color::WHITE, "x"));
        assert_eq!(block.highlights.len(), 1);
        assert!(block.remove_highlight(0).is_some());
        assert!(block.highlights.is_empty());
    }
}
