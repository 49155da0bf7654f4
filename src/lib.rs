//! # reflow
//!
//! Column-level layout reconstruction for document conversion pipelines.
//!
//! This library takes a parsed page description — text lines and
//! vector-graphic rectangles — and rebuilds it into an ordered, renderable
//! block stream: paragraphs in reading order plus one-cell shaded tables
//! standing in for the fills and strokes the target document format cannot
//! express natively.
//!
//! ## Quick Start
//!
//! ```
//! use reflow::{Column, PageElement, Rect, Settings, TextLine, TextSink};
//!
//! fn main() -> reflow::Result<()> {
//!     // One column spanning a Letter page.
//!     let mut column = Column::new(Rect::new(0.0, 0.0, 612.0, 792.0));
//!     column.add_elements([PageElement::Line(TextLine::new(
//!         "Hello, layout!",
//!         Rect::new(72.0, 72.0, 300.0, 86.0),
//!     ))]);
//!
//!     // Configure and structurally parse, then render.
//!     column.parse(&Settings::recommended());
//!     let mut sink = TextSink::buffered();
//!     column.render(&mut sink)?;
//!
//!     assert!(sink.into_string().contains("Hello, layout!"));
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Content classification**: text lines and graphic shapes are kept,
//!   everything else is filtered out
//! - **Shape approximation**: colored rectangles become one-cell shaded
//!   tables; white fills are discarded as page background
//! - **Reading order and spacing**: stable top-to-bottom, left-to-right
//!   ordering with threshold-driven spacing, alignment, and line breaks
//! - **Sections**: up to two side-by-side columns, composed in parallel
//!   with Rayon
//! - **Pluggable output**: a [`DocumentSink`] trait plus plain-text and
//!   JSON renderers

pub mod element;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod model;
pub mod render;

// Re-export commonly used types
pub use element::{Fill, ImageElement, PageElement, Shape, Stroke, TextLine};
pub use error::{Error, Result};
pub use geometry::{Color, Rect};
pub use layout::{compose_blocks, Blocks, Column, Section, SettingKey, Settings, SpacingParams};
pub use model::{Alignment, Block, Cell, LineSpacing, Row, TableBlock, TextBlock};
pub use render::{to_json, CountingSink, DocumentSink, JsonFormat, TextSink};

/// Build the ordered block stream for a single full-width column.
///
/// Convenience wrapper over [`Column`]: classify `elements`, configure and
/// structurally parse with `settings`, and compose the final stream.
pub fn compose(
    region: Rect,
    elements: impl IntoIterator<Item = PageElement>,
    settings: &Settings,
) -> Result<Blocks> {
    let mut column = Column::new(region);
    column.add_elements(elements);
    column.parse(settings);
    column.compose_stream()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compose_convenience() {
        let blocks = compose(
            Rect::new(0.0, 0.0, 100.0, 200.0),
            [
                PageElement::Line(TextLine::new("hello", Rect::new(10.0, 10.0, 90.0, 20.0))),
                PageElement::Graphic(Shape::fill(
                    Rect::new(10.0, 30.0, 90.0, 35.0),
                    Color::new(1.0, 0.0, 0.0),
                )),
            ],
            &Settings::recommended(),
        )
        .unwrap();

        assert_eq!(blocks.len(), 2);
        assert!(blocks.blocks()[0].is_text());
        assert!(blocks.blocks()[1].is_table());
    }

    #[test]
    fn test_compose_requires_settings() {
        let result = compose(
            Rect::new(0.0, 0.0, 100.0, 200.0),
            [],
            &Settings::new(),
        );
        assert!(matches!(result, Err(Error::MissingSetting(_))));
    }
}
