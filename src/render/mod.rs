//! Rendering: the document-writer boundary and bundled output formats.
//!
//! The layout stage performs no I/O of its own; blocks leave the crate
//! through the [`DocumentSink`] trait. A plain-text sink and a JSON
//! serializer are bundled; real target-document writers live downstream.

mod json;
mod sink;
mod text;

pub use json::{to_json, JsonFormat};
pub use sink::{CountingSink, DocumentSink};
pub use text::TextSink;
