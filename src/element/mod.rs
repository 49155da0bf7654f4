//! Raw page elements consumed by the layout stage.
//!
//! The upstream parser emits a heterogeneous element stream; columns accept
//! text lines and graphic shapes and silently drop everything else. That
//! filtering is deliberate: other kinds (floating images, annotations) are
//! handled by different stages of the pipeline.

mod line;
mod shape;

pub use line::TextLine;
pub use shape::{Fill, Shape, Stroke};

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// A reference to an image placed on the page.
///
/// Columns do not consume images; the variant exists so that mixed element
/// batches can be classified without preprocessing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageElement {
    /// Resource ID of the image in the source document
    pub resource_id: String,

    /// Bounding box on the page
    pub bbox: Rect,
}

impl ImageElement {
    /// Create a new image reference.
    pub fn new(resource_id: impl Into<String>, bbox: Rect) -> Self {
        Self {
            resource_id: resource_id.into(),
            bbox,
        }
    }
}

/// A page element as produced by the upstream parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageElement {
    /// A text line
    Line(TextLine),

    /// A vector-graphic shape
    Graphic(Shape),

    /// An image reference (not consumed by columns)
    Image(ImageElement),
}

impl PageElement {
    /// Bounding box of the element, whatever its kind.
    pub fn bbox(&self) -> Rect {
        match self {
            PageElement::Line(line) => line.bbox,
            PageElement::Graphic(shape) => shape.bbox(),
            PageElement::Image(image) => image.bbox,
        }
    }

    /// Check if this element is a text line.
    pub fn is_line(&self) -> bool {
        matches!(self, PageElement::Line(_))
    }

    /// Check if this element is a graphic shape.
    pub fn is_graphic(&self) -> bool {
        matches!(self, PageElement::Graphic(_))
    }
}
