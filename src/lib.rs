//! Dualsub - dual-language subtitle combining tool
//!
//! This library crate exposes the merge pipeline: two subtitle streams go in,
//! one combined stream comes out with the primary text on top and the
//! secondary text underneath whenever their time ranges overlap.

pub mod error;
pub mod merge;
pub mod pipeline;
pub mod render;
pub mod segment;
pub mod smooth;
pub mod style;

pub use dualsub_srt::Cue;
pub use error::{Error, Result};
pub use pipeline::{produce, produce_with_defaults, DEFAULT_MIN_LEN};
pub use segment::Segment;
pub use style::FontStyle;
