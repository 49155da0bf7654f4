//! Text line primitives.

use crate::geometry::Rect;
use serde::{Deserialize, Serialize};

/// A horizontal run of text with its own bounding box.
///
/// Lines arrive pre-formed from the upstream parser; this crate only decides
/// which column owns them and how they group into paragraphs. Ownership is
/// exclusive and decided once, during classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextLine {
    /// The text content
    pub text: String,

    /// Bounding box of the line on the page
    pub bbox: Rect,

    /// Whether a hard line break follows this line in the output.
    ///
    /// Set during spacing computation, false until then.
    #[serde(default)]
    pub hard_break: bool,
}

impl TextLine {
    /// Create a new text line.
    pub fn new(text: impl Into<String>, bbox: Rect) -> Self {
        Self {
            text: text.into(),
            bbox,
            hard_break: false,
        }
    }

    /// Check if the line has no visible content.
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_new() {
        let line = TextLine::new("hello", Rect::new(0.0, 0.0, 50.0, 12.0));
        assert_eq!(line.text, "hello");
        assert!(!line.hard_break);
        assert!(!line.is_empty());
    }

    #[test]
    fn test_line_empty() {
        let line = TextLine::new("   ", Rect::default());
        assert!(line.is_empty());
    }
}
