//! Layout reconstruction: columns, sections, and the block collection.
//!
//! This module turns classified page content into ordered block streams.
//! [`Column`] is the unit of work: it owns a region, accumulates classified
//! lines and shapes, and produces a [`Blocks`] stream at render time.
//! [`Section`] arranges up to two columns side by side.

mod blocks;
mod column;
mod compose;
mod section;
mod settings;

pub use blocks::Blocks;
pub use column::Column;
pub use compose::compose_blocks;
pub use section::{Section, MAX_COLUMNS};
pub use settings::{SettingKey, Settings, SpacingParams};
