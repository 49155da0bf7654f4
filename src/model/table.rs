//! Table block types.
//!
//! Besides real tables, the target document model uses one-row, one-cell
//! tables to stand in for colored rectangles — the closest construct the
//! format supports for arbitrary fills and borders.

use super::Alignment;
use crate::geometry::{Color, Rect};
use serde::{Deserialize, Serialize};

/// Line spacing mode inside table cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSpacing {
    /// Spacing follows the content
    #[default]
    Auto,
    /// Fixed spacing in points
    Exact(f32),
}

/// A table-level block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableBlock {
    /// Bounding box of the table
    pub bbox: Rect,

    /// Text alignment inside the table
    pub alignment: Alignment,

    /// Line spacing mode
    pub line_spacing: LineSpacing,

    /// Rows in the table
    pub rows: Vec<Row>,

    /// Vertical space before the block, in points
    pub space_before: f32,
}

impl TableBlock {
    /// Create a new empty table with left alignment and auto line spacing.
    pub fn new(bbox: Rect) -> Self {
        Self {
            bbox,
            alignment: Alignment::Left,
            line_spacing: LineSpacing::Auto,
            rows: Vec::new(),
            space_before: 0.0,
        }
    }

    /// Add a row to the table.
    pub fn add_row(&mut self, row: Row) {
        self.rows.push(row);
    }

    /// Get the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Get the number of columns (based on the first row).
    pub fn column_count(&self) -> usize {
        self.rows.first().map(|row| row.cells.len()).unwrap_or(0)
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// A table row with an explicit height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    /// Row height in points
    pub height: f32,

    /// Cells in the row
    pub cells: Vec<Cell>,
}

impl Row {
    /// Create a new empty row with the given height.
    pub fn new(height: f32) -> Self {
        Self {
            height,
            cells: Vec::new(),
        }
    }

    /// Add a cell to the row.
    pub fn add_cell(&mut self, cell: Cell) {
        self.cells.push(cell);
    }
}

/// A table cell: a bounding box with an optional background shading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Bounding box of the cell
    pub bbox: Rect,

    /// Background color, if shaded
    pub bg_color: Option<Color>,
}

impl Cell {
    /// Create a new unshaded cell.
    pub fn new(bbox: Rect) -> Self {
        Self {
            bbox,
            bg_color: None,
        }
    }

    /// Set the background color and return self.
    pub fn with_background(mut self, color: Color) -> Self {
        self.bg_color = Some(color);
        self
    }
}
