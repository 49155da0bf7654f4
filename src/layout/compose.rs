//! Structural parsing: grouping classified lines into text blocks.
//!
//! Lines are sorted into reading order, then merged into paragraphs by
//! looking at the vertical gap to the previous line and at indentation
//! shifts. Lines sharing a visual row (overlapping vertical extents) always
//! stay in one block regardless of their horizontal positions.

use crate::element::TextLine;
use crate::model::TextBlock;

/// Horizontal shift, in points, treated as an indentation change.
const INDENT_SHIFT: f32 = 20.0;

/// Fallback line gap, in points, when the lines carry no usable spacing.
const DEFAULT_LINE_GAP: f32 = 12.0;

/// Group lines into paragraph-level text blocks.
///
/// The input order is irrelevant; lines are re-sorted into reading order
/// before grouping. Empty input yields no blocks.
pub fn compose_blocks(lines: &[TextLine]) -> Vec<TextBlock> {
    if lines.is_empty() {
        return Vec::new();
    }

    let mut sorted: Vec<TextLine> = lines.to_vec();
    sorted.sort_by(|a, b| a.bbox.cmp_reading_order(&b.bbox));

    let avg_gap = average_line_gap(&sorted);
    log::debug!(
        "composing {} lines into blocks, avg gap {:.1}pt",
        sorted.len(),
        avg_gap
    );

    let mut blocks: Vec<TextBlock> = Vec::new();
    let mut current: Vec<TextLine> = Vec::new();

    for line in sorted {
        if let Some(prev) = current.last() {
            if should_break(prev, &line, avg_gap) {
                blocks.push(TextBlock::from_lines(std::mem::take(&mut current)));
            }
        }
        current.push(line);
    }
    if !current.is_empty() {
        blocks.push(TextBlock::from_lines(current));
    }

    blocks
}

/// Average positive gap between consecutive lines.
fn average_line_gap(sorted: &[TextLine]) -> f32 {
    let gaps: Vec<f32> = sorted
        .windows(2)
        .map(|pair| pair[1].bbox.y0 - pair[0].bbox.y1)
        .filter(|gap| *gap > 0.1)
        .collect();

    if gaps.is_empty() {
        return DEFAULT_LINE_GAP;
    }
    gaps.iter().sum::<f32>() / gaps.len() as f32
}

/// Decide whether `curr` starts a new block after `prev`.
fn should_break(prev: &TextLine, curr: &TextLine, avg_gap: f32) -> bool {
    // Same visual row: fragments of one line, never split.
    let overlap = prev.bbox.y1.min(curr.bbox.y1) - prev.bbox.y0.max(curr.bbox.y0);
    if overlap > 0.0 {
        return false;
    }

    let gap = curr.bbox.y0 - prev.bbox.y1;
    if gap > avg_gap * 1.5 {
        return true;
    }

    (curr.bbox.x0 - prev.bbox.x0).abs() > INDENT_SHIFT
}
