//! Highlight ranges — colored character-offset spans over a text field.
//!
//! Offsets are *character* indices into the source string (the offsets a
//! text selection reports), not byte indices. A block's ranges are kept
//! sorted ascending by `start` after every mutation. Overlapping ranges
//! are tolerated here; the compositor resolves them first-match-wins at
//! draw time.
//!
//! Offsets are pinned: editing the source text afterwards does not
//! re-anchor or re-validate existing ranges. A stale range can stop
//! matching the characters it was recorded over, but it can never point
//! outside the characters that actually get drawn.

use serde::{Deserialize, Serialize};

use crate::color::Color;

/// One highlighted span: `[start, end)` in character offsets.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightRange {
    pub start: usize,
    pub end: usize,
    pub color: Color,
    /// Snapshot of the highlighted substring at creation time. Display
    /// only — rendering resolves by offset, and this may go stale.
    pub text: String,
}

impl HighlightRange {
    /// Whether the character at `index` falls inside this range.
    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }
}

/// Insert a new range and re-sort the collection ascending by `start`.
///
/// Rejected silently (returns `false`, collection untouched) when
/// `start >= end` or `text` is empty. Overlap with existing ranges is
/// not checked.
pub fn add_highlight(
    ranges: &mut Vec<HighlightRange>,
    start: usize,
    end: usize,
    color: Color,
    text: &str,
) -> bool {
    if start >= end || text.is_empty() {
        log::debug!("rejected highlight [{start},{end}) over {:?}", text);
        return false;
    }
    ranges.push(HighlightRange {
        start,
        end,
        color,
        text: text.to_string(),
    });
    // Stable sort: equal starts keep insertion order.
    ranges.sort_by_key(|r| r.start);
    true
}

/// Remove the range at `index` in the *current sorted order*.
///
/// Indices shift on every mutation — callers must re-fetch them after
/// any add or remove.
pub fn remove_highlight(ranges: &mut Vec<HighlightRange>, index: usize) -> Option<HighlightRange> {
    if index < ranges.len() {
        Some(ranges.remove(index))
    } else {
        None
    }
}

// ===================================================================
// Tests
// ===================================================================
