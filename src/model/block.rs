//! The renderable block unit.

use super::{TableBlock, TextBlock};
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// A renderable block: the unit the target-document writer consumes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A paragraph of text
    Text(TextBlock),

    /// A table (real or shape-approximating)
    Table(TableBlock),
}

impl Block {
    /// Bounding box of the block.
    pub fn bbox(&self) -> Rect {
        match self {
            Block::Text(text) => text.bbox,
            Block::Table(table) => table.bbox,
        }
    }

    /// Vertical space before the block.
    pub fn space_before(&self) -> f32 {
        match self {
            Block::Text(text) => text.space_before,
            Block::Table(table) => table.space_before,
        }
    }

    /// Set the vertical space before the block.
    pub fn set_space_before(&mut self, space: f32) {
        match self {
            Block::Text(text) => text.space_before = space,
            Block::Table(table) => table.space_before = space,
        }
    }

    /// Check if this block is a text block.
    pub fn is_text(&self) -> bool {
        matches!(self, Block::Text(_))
    }

    /// Check if this block is a table block.
    pub fn is_table(&self) -> bool {
        matches!(self, Block::Table(_))
    }
}
