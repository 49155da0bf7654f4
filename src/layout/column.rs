//! A column: one rectangular content region of a page.

use crate::element::{PageElement, Shape, TextLine};
use crate::error::Result;
use crate::geometry::Rect;
use crate::model::{Block, Cell, Row, TableBlock, TextBlock};
use crate::render::DocumentSink;

use super::{compose_blocks, Blocks, Settings};

/// A column of a section: the whole page, or one of two side-by-side
/// regions.
///
/// A column classifies and retains the raw content assigned to it, then
/// produces an ordered block stream at render time. Each instance is
/// exclusively owned by its parent section and keeps its own copy of the
/// layout settings.
#[derive(Debug, Clone, Default)]
pub struct Column {
    region: Rect,
    lines: Vec<TextLine>,
    shapes: Vec<Shape>,
    blocks: Vec<TextBlock>,
    settings: Settings,
}

impl Column {
    /// Create an empty column owning the given region.
    pub fn new(region: Rect) -> Self {
        Self {
            region,
            ..Self::default()
        }
    }

    /// The column's working region.
    pub fn region(&self) -> Rect {
        self.region
    }

    /// Text lines assigned to this column, in arrival order.
    pub fn lines(&self) -> &[TextLine] {
        &self.lines
    }

    /// Graphic shapes assigned to this column, in arrival order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Text blocks composed by the last structural parse.
    pub fn text_blocks(&self) -> &[TextBlock] {
        &self.blocks
    }

    /// The column's current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Add candidate elements to the column.
    ///
    /// Text lines and graphic shapes are kept, preserving their relative
    /// order within each partition; any other element kind is silently
    /// dropped. Repeated calls accumulate.
    pub fn add_elements(&mut self, elements: impl IntoIterator<Item = PageElement>) {
        for element in elements {
            match element {
                PageElement::Line(line) => self.lines.push(line),
                PageElement::Graphic(shape) => self.shapes.push(shape),
                other => {
                    log::trace!("column skips unsupported element at {:?}", other.bbox());
                }
            }
        }
    }

    /// Merge configuration into the column's stored settings.
    pub fn configure(&mut self, options: &Settings) {
        self.settings.merge(options);
    }

    /// Configure the column, then run the structural parse.
    ///
    /// Two sequenced steps: settings merge first, then line-to-paragraph
    /// composition over everything classified so far.
    pub fn parse(&mut self, options: &Settings) {
        self.configure(options);
        self.blocks = compose_blocks(&self.lines);
    }

    /// Approximate a graphic shape as a renderable block.
    ///
    /// The target document format has no primitive for arbitrary filled or
    /// stroked rectangles; the nearest analogue is a one-row, one-cell
    /// table with shading. White fills are page background and yield no
    /// block. A zero-area shape still yields a degenerate table.
    pub fn approximate_shape(&self, shape: &Shape) -> Option<Block> {
        let stroke = match shape {
            Shape::Fill(fill) => {
                if fill.color.is_white() {
                    log::debug!("discarding white fill at {:?}", fill.bbox);
                    return None;
                }
                fill.to_stroke(self.region.width())
            }
            Shape::Stroke(stroke) => stroke.clone(),
        };

        let mut table = TableBlock::new(stroke.bbox);
        let mut row = Row::new(stroke.bbox.height());
        row.add_cell(Cell::new(stroke.bbox).with_background(stroke.color));
        table.add_row(row);

        Some(Block::Table(table))
    }

    /// Build the column's ordered block stream.
    ///
    /// Text blocks come first in stored order, then shape-derived blocks in
    /// shape-storage order; the combined sequence is re-sorted into reading
    /// order and annotated with spacing. Fails fast with a missing-setting
    /// error before touching any block when the six spacing thresholds are
    /// not all configured.
    pub fn compose_stream(&self) -> Result<Blocks> {
        let params = self.settings.spacing_params()?;

        let mut blocks = Blocks::new(self.region);
        blocks.extend(self.blocks.iter().cloned().map(Block::Text));
        for shape in &self.shapes {
            if let Some(block) = self.approximate_shape(shape) {
                blocks.push(block);
            }
        }

        blocks.sort_in_reading_order();
        blocks.compute_spacing(&params);
        Ok(blocks)
    }

    /// Build the block stream and write it into a document sink.
    ///
    /// The sink is never invoked when configuration is incomplete; a
    /// failure here is scoped to this column.
    pub fn render(&self, sink: &mut dyn DocumentSink) -> Result<()> {
        self.compose_stream()?.write_to(sink)
    }
}
