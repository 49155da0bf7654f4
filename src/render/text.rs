//! Plain-text rendering of block streams.

use std::io::Write;

use crate::error::Result;
use crate::model::{TableBlock, TextBlock};
use crate::render::DocumentSink;

/// A sink writing blocks as plain text.
///
/// Paragraphs are separated by blank lines; hard-broken lines keep their
/// breaks, soft-wrapped lines are joined with spaces. Table blocks here are
/// colored rectangles with no textual content, so plain text skips them.
#[derive(Debug)]
pub struct TextSink<W: Write> {
    writer: W,
    started: bool,
    skipped_tables: usize,
}

impl<W: Write> TextSink<W> {
    /// Create a sink writing into `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            started: false,
            skipped_tables: 0,
        }
    }

    /// Number of table blocks the text output could not express.
    pub fn skipped_tables(&self) -> usize {
        self.skipped_tables
    }

    /// Consume the sink, returning the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl TextSink<Vec<u8>> {
    /// Create a sink writing into an in-memory buffer.
    pub fn buffered() -> Self {
        Self::new(Vec::new())
    }

    /// Consume the sink, returning the buffered output as a string.
    pub fn into_string(self) -> String {
        String::from_utf8_lossy(&self.writer).into_owned()
    }
}

impl<W: Write> DocumentSink for TextSink<W> {
    fn paragraph(&mut self, block: &TextBlock) -> Result<()> {
        if self.started {
            writeln!(self.writer)?;
        }
        let last = block.lines.len().saturating_sub(1);
        for (i, line) in block.lines.iter().enumerate() {
            self.writer.write_all(line.text.as_bytes())?;
            if i < last {
                if line.hard_break {
                    writeln!(self.writer)?;
                } else {
                    write!(self.writer, " ")?;
                }
            }
        }
        writeln!(self.writer)?;
        self.started = true;
        Ok(())
    }

    fn table(&mut self, table: &TableBlock) -> Result<()> {
        log::debug!(
            "text output skips a {}x{} table block",
            table.row_count(),
            table.column_count()
        );
        self.skipped_tables += 1;
        Ok(())
    }
}
