//! Text block types.

use crate::element::TextLine;
use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified text
    Justify,
}

/// A paragraph-level block composed of one or more text lines.
///
/// Text blocks are composed by the structural-parse step, never by the
/// column itself; the column only merges them with shape-derived blocks at
/// render time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    /// Lines in the block, in reading order
    pub lines: Vec<TextLine>,

    /// Union bounding box of all lines
    pub bbox: Rect,

    /// Detected alignment (Left until spacing computation runs)
    pub alignment: Alignment,

    /// Vertical space before the block, in points
    pub space_before: f32,
}

impl TextBlock {
    /// Create a block from lines, computing the union bounding box.
    pub fn from_lines(lines: Vec<TextLine>) -> Self {
        let bbox = lines
            .iter()
            .map(|line| line.bbox)
            .reduce(|a, b| a.union(&b))
            .unwrap_or_default();
        Self {
            lines,
            bbox,
            alignment: Alignment::Left,
            space_before: 0.0,
        }
    }

    /// Create a block holding a single line.
    pub fn from_line(line: TextLine) -> Self {
        Self::from_lines(vec![line])
    }

    /// Number of lines in the block.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Check if the block has no visible content.
    pub fn is_empty(&self) -> bool {
        self.lines.iter().all(|line| line.is_empty())
    }

    /// Plain text of the block: hard-broken lines joined with newlines,
    /// soft-wrapped lines joined with spaces.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        let last = self.lines.len().saturating_sub(1);
        for (i, line) in self.lines.iter().enumerate() {
            out.push_str(&line.text);
            if i < last {
                out.push(if line.hard_break { '\n' } else { ' ' });
            }
        }
        out
    }
}
