//! Greedy word wrap with source-offset bookkeeping.
//!
//! Splits on single spaces (runs of spaces collapse — this is a card
//! headline, not a general Unicode line breaker), measures candidate
//! lines with the caller's `measure` function, and records for every
//! emitted line the *character* offset where it begins in the original
//! string. Those offsets are what highlight ranges were recorded
//! against, so they must stay exact across the wrap.

/// One wrapped line, positioned relative to the block's first baseline.
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutLine {
    pub text: String,
    /// Character offset of this line's first character in the source.
    pub start_offset: usize,
    /// Baseline offset from the block's first baseline.
    pub y: f32,
}

/// Greedily wrap `text` into lines no wider than `max_width_px`.
///
/// A candidate line is adopted unless it *exceeds* the budget while the
/// current line is non-empty; a single word wider than the budget is
/// placed alone on its own line (no mid-word breaking). Empty input
/// yields no lines.
///
/// `measure` returns the pixel width of a substring. It is called on
/// whole candidate lines — the bulk measurement is used only for break
/// decisions, never for glyph placement (see `compositor`).
pub fn wrap(
    text: &str,
    max_width_px: f32,
    line_height: f32,
    mut measure: impl FnMut(&str) -> f32,
) -> Vec<LayoutLine> {
    let mut lines: Vec<LayoutLine> = Vec::new();
    let mut current = String::new();
    // Offset of `current`'s first character, and of the next word.
    let mut line_start = 0usize;
    let mut offset = 0usize;

    for word in text.split(' ') {
        if word.is_empty() {
            // A run of spaces collapses, but still occupies offsets.
            offset += 1;
            continue;
        }
        let word_chars = word.chars().count();

        if current.is_empty() {
            current = word.to_string();
            line_start = offset;
        } else {
            let candidate = format!("{current} {word}");
            if measure(&candidate) > max_width_px {
                let y = lines.len() as f32 * line_height;
                lines.push(LayoutLine {
                    text: std::mem::take(&mut current),
                    start_offset: line_start,
                    y,
                });
                current = word.to_string();
                line_start = offset;
            } else {
                current = candidate;
            }
        }

        offset += word_chars + 1;
    }

    if !current.is_empty() {
        let y = lines.len() as f32 * line_height;
        lines.push(LayoutLine {
            text: current,
            start_offset: line_start,
            y,
        });
    }

    log::trace!(
        "wrapped {} chars into {} lines at {max_width_px}px",
        text.chars().count(),
        lines.len()
    );
    lines
}

/// Total block height for a wrapped line set.
pub fn wrapped_height(lines: &[LayoutLine], line_height: f32) -> f32 {
    lines.len() as f32 * line_height
}

// ===================================================================
// Tests
// ===================================================================
