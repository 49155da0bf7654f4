//! JSON rendering of block streams.

use crate::error::Result;
use crate::layout::Blocks;

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonFormat {
    /// Human-readable, indented output
    Pretty,
    /// Single-line output
    Compact,
}

/// Serialize a block stream to JSON.
pub fn to_json(blocks: &Blocks, format: JsonFormat) -> Result<String> {
    let json = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(blocks)?,
        JsonFormat::Compact => serde_json::to_string(blocks)?,
    };
    Ok(json)
}
