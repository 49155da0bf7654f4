//! Error types for the reflow library.

use std::io;
use thiserror::Error;

use crate::layout::SettingKey;

/// Result type alias for reflow operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during layout reconstruction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error while writing rendered output.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// A required layout setting was never configured.
    ///
    /// The six spacing thresholds have no defaults at this layer; rendering
    /// without them is a caller error, not something to paper over.
    #[error("missing layout setting: {0}")]
    MissingSetting(SettingKey),

    /// A section was constructed with more columns than the layout supports.
    #[error("section supports at most two columns, got {0}")]
    TooManyColumns(usize),

    /// Error serializing a block stream to JSON.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error reported by a document sink.
    #[error("rendering error: {0}")]
    Render(String),
}
