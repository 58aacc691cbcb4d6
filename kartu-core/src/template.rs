//! Card template presets.
//!
//! A template is a named preset of primary/accent colors and overlay
//! gradient stops. The card's configured primary color overrides the
//! preset's primary, first gradient stop, and accent — the preset only
//! contributes the terminal gradient stop and the badge gating.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// Built-in card templates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Template {
    News,
    Crypto,
    Tech,
    Business,
    /// "Terkini" — the only template that draws the breaking-news badge.
    Breaking,
}

impl Default for Template {
    fn default() -> Self {
        Self::Crypto
    }
}

/// Resolved color set for one template.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub primary: Color,
    /// Overlay gradient stops, top to bottom.
    pub gradient: [Color; 2],
    pub accent: Color,
}

impl Template {
    /// Human-facing template name.
    pub fn display_name(self) -> &'static str {
        match self {
            Template::News => "News",
            Template::Crypto => "Crypto",
            Template::Tech => "Tech",
            Template::Business => "Business",
            Template::Breaking => "Terkini",
        }
    }

    /// The template's base preset colors.
    pub fn palette(self) -> Palette {
        match self {
            Template::News => Palette {
                primary: Color::rgb(0xdc, 0x26, 0x26),
                gradient: [Color::rgb(0xdc, 0x26, 0x26), Color::rgb(0xb9, 0x1c, 0x1c)],
                accent: Color::rgb(0xdc, 0x26, 0x26),
            },
            Template::Crypto => Palette {
                primary: Color::rgb(0x7c, 0x3a, 0xed),
                gradient: [Color::rgb(0x7c, 0x3a, 0xed), Color::rgb(0x25, 0x63, 0xeb)],
                accent: Color::rgb(0x7c, 0x3a, 0xed),
            },
            Template::Tech => Palette {
                primary: Color::rgb(0x25, 0x63, 0xeb),
                gradient: [Color::rgb(0x25, 0x63, 0xeb), Color::rgb(0x08, 0x91, 0xb2)],
                accent: Color::rgb(0x25, 0x63, 0xeb),
            },
            Template::Business => Palette {
                primary: Color::rgb(0x05, 0x96, 0x69),
                gradient: [Color::rgb(0x05, 0x96, 0x69), Color::rgb(0x10, 0xb9, 0x81)],
                accent: Color::rgb(0x05, 0x96, 0x69),
            },
            Template::Breaking => Palette {
                primary: Color::rgb(0xdc, 0x26, 0x26),
                gradient: [Color::rgb(0xb9, 0x1c, 0x1c), Color::rgb(0xea, 0x58, 0x0c)],
                accent: Color::rgb(0xdc, 0x26, 0x26),
            },
        }
    }

    /// Palette with the configured primary color applied: primary, the
    /// first gradient stop, and the accent all take the override; only
    /// the terminal gradient stop keeps the preset value.
    pub fn effective_palette(self, primary: Color) -> Palette {
        let base = self.palette();
        Palette {
            primary,
            gradient: [primary, base.gradient[1]],
            accent: primary,
        }
    }

    /// Whether this template draws the badge above the headline.
    pub fn has_badge(self) -> bool {
        matches!(self, Template::Breaking)
    }
}

// ===================================================================
// Tests
// ===================================================================
