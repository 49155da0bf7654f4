//! The block collection: reading order, spacing, and sink dispatch.

use crate::error::Result;
use crate::geometry::Rect;
use crate::model::{Alignment, Block, TextBlock};
use crate::render::DocumentSink;
use serde::{Deserialize, Serialize};

use super::SpacingParams;

/// An ordered collection of blocks belonging to one column region.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Blocks {
    region: Rect,
    items: Vec<Block>,
}

impl Blocks {
    /// Create an empty collection for a region.
    pub fn new(region: Rect) -> Self {
        Self {
            region,
            items: Vec::new(),
        }
    }

    /// The region this collection belongs to.
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Append a block.
    pub fn push(&mut self, block: Block) {
        self.items.push(block);
    }

    /// Append all blocks from an iterator.
    pub fn extend(&mut self, blocks: impl IntoIterator<Item = Block>) {
        self.items.extend(blocks);
    }

    /// Number of blocks.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Blocks as a slice.
    pub fn blocks(&self) -> &[Block] {
        &self.items
    }

    /// Iterate over the blocks.
    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.items.iter()
    }

    /// Sort blocks into reading order: top to bottom, then left to right.
    ///
    /// The sort is stable, so blocks whose floored coordinates tie keep
    /// their insertion order.
    pub fn sort_in_reading_order(&mut self) {
        self.items
            .sort_by(|a, b| a.bbox().cmp_reading_order(&b.bbox()));
    }

    /// Compute vertical spacing, alignment, and hard line breaks.
    ///
    /// Expects the collection to already be in reading order. Gaps below
    /// `line_separate_threshold` collapse to contiguous flow.
    pub fn compute_spacing(&mut self, params: &SpacingParams) {
        let region = self.region;
        let mut cursor = region.y0;

        for block in &mut self.items {
            let gap = block.bbox().y0 - cursor;
            let space = if gap >= params.line_separate_threshold {
                gap
            } else {
                0.0
            };
            block.set_space_before(space.max(0.0));
            cursor = cursor.max(block.bbox().y1);

            if let Block::Text(text) = block {
                text.alignment = detect_alignment(text, params);
                mark_line_breaks(text, region.width(), params);
            }
        }
    }

    /// Write all blocks into a document sink, in order.
    pub fn write_to(&self, sink: &mut dyn DocumentSink) -> Result<()> {
        log::debug!("writing {} blocks to sink", self.items.len());
        for block in &self.items {
            match block {
                Block::Text(text) => sink.paragraph(text)?,
                Block::Table(table) => sink.table(table)?,
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a Blocks {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Spread of a per-line measure: max minus min.
fn spread(lines: &[crate::element::TextLine], measure: impl Fn(&Rect) -> f32) -> f32 {
    let mut min = f32::MAX;
    let mut max = f32::MIN;
    for line in lines {
        let value = measure(&line.bbox);
        min = min.min(value);
        max = max.max(value);
    }
    max - min
}

/// Detect the alignment of a text block from its line edges.
///
/// Single-line blocks stay left-aligned: one line cannot disambiguate.
/// The last line is excluded from the justify check since the final line
/// of a justified paragraph is typically short.
fn detect_alignment(block: &TextBlock, params: &SpacingParams) -> Alignment {
    let lines = &block.lines;
    if lines.len() < 2 {
        return Alignment::Left;
    }

    let left = spread(lines, |bbox| bbox.x0);
    let right = spread(lines, |bbox| bbox.x1);
    let center = spread(lines, |bbox| bbox.center_x());

    if lines.len() >= 3 {
        let right_body = spread(&lines[..lines.len() - 1], |bbox| bbox.x1);
        if left <= params.left_aligned_threshold && right_body <= params.right_aligned_threshold {
            return Alignment::Justify;
        }
    }

    if left <= params.left_aligned_threshold {
        Alignment::Left
    } else if right <= params.right_aligned_threshold {
        Alignment::Right
    } else if center <= params.center_aligned_threshold {
        Alignment::Center
    } else {
        // Irregular edges: left with tab stops is decided downstream.
        Alignment::Left
    }
}

/// Flag lines that end with an intentional break.
///
/// A line (other than the last) gets a hard break when it leaves
/// significant free space at its end, or is short relative to the region.
fn mark_line_breaks(block: &mut TextBlock, region_width: f32, params: &SpacingParams) {
    if region_width <= 0.0 {
        return;
    }
    let block_right = block.bbox.x1;
    let last = block.lines.len().saturating_sub(1);

    for (i, line) in block.lines.iter_mut().enumerate() {
        if i == last {
            line.hard_break = false;
            continue;
        }
        let free = (block_right - line.bbox.x1).max(0.0);
        line.hard_break = free > params.line_break_free_space_ratio * region_width
            || line.bbox.width() < params.line_break_width_ratio * region_width;
    }
}
