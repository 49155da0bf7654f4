//! Vector-graphic rectangle primitives.
//!
//! Only two shape kinds survive to this stage: solid fills and stroked
//! borders. Both are axis-aligned; curves, rotation, and clipping are
//! resolved (or dropped) upstream.

use crate::geometry::{Color, Rect};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle with a solid background color.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fill {
    /// Bounding box of the filled area
    pub bbox: Rect,

    /// Background color
    pub color: Color,
}

impl Fill {
    /// Create a new fill shape.
    pub fn new(bbox: Rect, color: Color) -> Self {
        Self { bbox, color }
    }

    /// Flatten this fill into a stroke, clamping its horizontal extent to
    /// `max_width`.
    ///
    /// The color and vertical extent are preserved; fills narrower than
    /// `max_width` come through unchanged.
    pub fn to_stroke(&self, max_width: f32) -> Stroke {
        let width = self.bbox.width().min(max_width);
        Stroke {
            bbox: Rect::new(
                self.bbox.x0,
                self.bbox.y0,
                self.bbox.x0 + width,
                self.bbox.y1,
            ),
            color: self.color,
        }
    }
}

/// An axis-aligned rectangle representing a drawn border or line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stroke {
    /// Bounding box of the stroked area
    pub bbox: Rect,

    /// Stroke color
    pub color: Color,
}

impl Stroke {
    /// Create a new stroke shape.
    pub fn new(bbox: Rect, color: Color) -> Self {
        Self { bbox, color }
    }
}

/// A vector-graphic shape assigned to a column.
///
/// Exactly two variants exist and no third is anticipated; consumers match
/// on the tag rather than dispatching through a trait.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Shape {
    /// A solid background rectangle
    Fill(Fill),

    /// A drawn border or line
    Stroke(Stroke),
}

impl Shape {
    /// Create a fill shape.
    pub fn fill(bbox: Rect, color: Color) -> Self {
        Shape::Fill(Fill::new(bbox, color))
    }

    /// Create a stroke shape.
    pub fn stroke(bbox: Rect, color: Color) -> Self {
        Shape::Stroke(Stroke::new(bbox, color))
    }

    /// Bounding box of the shape.
    pub fn bbox(&self) -> Rect {
        match self {
            Shape::Fill(fill) => fill.bbox,
            Shape::Stroke(stroke) => stroke.bbox,
        }
    }

    /// Color of the shape.
    pub fn color(&self) -> Color {
        match self {
            Shape::Fill(fill) => fill.color,
            Shape::Stroke(stroke) => stroke.color,
        }
    }

    /// Check if this shape is a fill.
    pub fn is_fill(&self) -> bool {
        matches!(self, Shape::Fill(_))
    }

    /// Check if this shape is a stroke.
    pub fn is_stroke(&self) -> bool {
        matches!(self, Shape::Stroke(_))
    }
}
