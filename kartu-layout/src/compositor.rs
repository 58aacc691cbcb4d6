//! Per-character highlight composition.
//!
//! Walks a wrapped line character-by-character, resolves each character
//! against the block's sorted highlight ranges by its *source* offset,
//! and accumulates an x-cursor from per-character advances. Advances
//! are measured one character at a time — deliberately not as substring
//! widths — so highlight background rectangles and glyphs can never
//! drift apart on kerned fonts. The bulk line measurement in `wrap` is
//! used only for the break decision.

use kartu_core::color::Color;
use kartu_core::highlight::HighlightRange;

use crate::wrap::LayoutLine;

/// One character ready to draw.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DrawInstruction {
    pub ch: char,
    /// Left edge of the character cell, canvas coordinates.
    pub x: f32,
    /// The character's own measured advance.
    pub width: f32,
    /// Highlight color, when a range covers this character.
    pub highlight: Option<Color>,
}

/// Compose one line into per-character draw instructions.
///
/// `highlights` must be sorted ascending by `start` (the highlight
/// model maintains this). When ranges overlap, the first match in
/// sorted order wins — an explicit contract, not an accident.
pub fn compose_line(
    line: &LayoutLine,
    highlights: &[HighlightRange],
    origin_x: f32,
    mut advance: impl FnMut(char) -> f32,
) -> Vec<DrawInstruction> {
    let mut instructions = Vec::with_capacity(line.text.len());
    let mut x = origin_x;

    for (i, ch) in line.text.chars().enumerate() {
        let global = line.start_offset + i;
        let highlight = highlights
            .iter()
            .find(|range| range.contains(global))
            .map(|range| range.color);

        let width = advance(ch);
        instructions.push(DrawInstruction {
            ch,
            x,
            width,
            highlight,
        });
        x += width;
    }

    instructions
}

// ===================================================================
// Tests
// ===================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wrap::wrap;
    use kartu_core::highlight::add_highlight;

    const PURPLE: Color = Color::rgb(0x8b, 0x5c, 0xf6);
    const PINK: Color = Color::rgb(0xec, 0x48, 0x99);

    fn mono(s: &str) -> f32 {
        s.chars().count() as f32 * 10.0
    }

    fn line(text: &str, start_offset: usize) -> LayoutLine {
        LayoutLine {
            text: text.to_string(),
            start_offset,
            y: 0.0,
        }
    }

    fn range(start: usize, end: usize, color: Color) -> HighlightRange {
        HighlightRange {
            start,
            end,
            color,
            text: String::new(),
        }
    }

    #[test]
    fn test_range_inside_line_marks_exactly() {
        let l = line("hello world", 0);
        let ranges = vec![range(6, 11, PURPLE)];
        let out = compose_line(&l, &ranges, 0.0, |c| mono(&c.to_string()));

        for (i, instr) in out.iter().enumerate() {
            if (6..11).contains(&i) {
                assert_eq!(instr.highlight, Some(PURPLE), "char {i} should be highlighted");
            } else {
                assert_eq!(instr.highlight, None, "char {i} should be plain");
            }
        }
    }

    #[test]
    fn test_offsets_resolve_against_source_not_line() {
        // Line starting at source offset 20; range covers source 22..25.
        let l = line("abcdef", 20);
        let ranges = vec![range(22, 25, PURPLE)];
        let out = compose_line(&l, &ranges, 0.0, |_| 10.0);
        let marked: Vec<bool> = out.iter().map(|i| i.highlight.is_some()).collect();
        assert_eq!(marked, vec![false, false, true, true, true, false]);
    }

    #[test]
    fn test_overlap_first_match_wins() {
        let mut ranges = Vec::new();
        add_highlight(&mut ranges, 2, 8, PURPLE, "purple");
        add_highlight(&mut ranges, 5, 10, PINK, "pink!");

        let l = line("abcdefghij", 0);
        let out = compose_line(&l, &ranges, 0.0, |_| 10.0);
        // 5..8 is covered by both; the lower-start range wins there.
        assert_eq!(out[6].highlight, Some(PURPLE));
        // 8..10 only the second range covers.
        assert_eq!(out[8].highlight, Some(PINK));
        assert_eq!(out[9].highlight, Some(PINK));
    }

    #[test]
    fn test_x_advances_accumulate_without_drift() {
        // Varying advances; each cell starts where the previous ended.
        let l = line("kartu", 0);
        let widths = [12.0f32, 7.5, 9.25, 11.0, 8.0];
        let mut it = widths.iter().copied();
        let out = compose_line(&l, &[], 60.0, |_| it.next().unwrap());

        assert_eq!(out[0].x, 60.0);
        for pair in out.windows(2) {
            assert_eq!(pair[1].x, pair[0].x + pair[0].width);
        }
        // Sum of per-character widths equals the drawn x-extent.
        let sum: f32 = widths.iter().sum();
        let last = out.last().unwrap();
        assert!((last.x + last.width - 60.0 - sum).abs() < 1e-5);
    }

    #[test]
    fn test_highlight_survives_line_break() {
        // "Mobil Berbasis Blockchain" begins at source offset 32; the
        // width budget forces a break inside the highlighted phrase.
        let text = "UGM Menciptakan Sistem Inspeksi Mobil Berbasis Blockchain";
        let ranges = vec![range(32, 56, PURPLE)];

        let lines = wrap(text, 450.0, 10.0, mono);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].text, "UGM Menciptakan Sistem Inspeksi Mobil");
        assert_eq!(lines[1].text, "Berbasis Blockchain");

        let chars: Vec<char> = text.chars().collect();
        for l in &lines {
            let out = compose_line(l, &ranges, 0.0, |_| 10.0);
            for (i, instr) in out.iter().enumerate() {
                let global = l.start_offset + i;
                let expect = (32..56).contains(&global);
                assert_eq!(
                    instr.highlight.is_some(),
                    expect,
                    "char {global} ({:?}) highlight mismatch",
                    chars[global]
                );
            }
        }
        // No leakage into the adjacent word: the space before "Mobil"
        // (offset 31) and the final source char (offset 56) stay plain.
        let first = compose_line(&lines[0], &ranges, 0.0, |_| 10.0);
        assert_eq!(first[31].highlight, None);
        let second = compose_line(&lines[1], &ranges, 0.0, |_| 10.0);
        assert_eq!(second.last().unwrap().highlight, None);
    }

    #[test]
    fn test_empty_line_yields_nothing() {
        let l = line("", 0);
        assert!(compose_line(&l, &[], 0.0, |_| 10.0).is_empty());
    }
}
