//! The document-writer boundary.

use crate::error::Result;
use crate::model::{TableBlock, TextBlock};

/// Receiver for rendered blocks.
///
/// The sink is an opaque handle owned by the top-level document builder;
/// this crate only pushes blocks into it, in final reading order.
pub trait DocumentSink {
    /// Write a paragraph-level text block.
    fn paragraph(&mut self, block: &TextBlock) -> Result<()>;

    /// Write a table block.
    fn table(&mut self, table: &TableBlock) -> Result<()>;
}

/// A sink that counts blocks without producing output.
///
/// Useful for dry runs and for asserting what reached the writer.
#[derive(Debug, Clone, Copy, Default)]
pub struct CountingSink {
    /// Number of paragraphs received
    pub paragraphs: usize,

    /// Number of tables received
    pub tables: usize,
}

impl CountingSink {
    /// Create a new counting sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of blocks received.
    pub fn total(&self) -> usize {
        self.paragraphs + self.tables
    }
}

impl DocumentSink for CountingSink {
    fn paragraph(&mut self, _block: &TextBlock) -> Result<()> {
        self.paragraphs += 1;
        Ok(())
    }

    fn table(&mut self, _table: &TableBlock) -> Result<()> {
        self.tables += 1;
        Ok(())
    }
}
