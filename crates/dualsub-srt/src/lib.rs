//! # dualsub-srt
//!
//! SubRip (SRT) cue model, parser, and composer.
//!
//! This crate provides the [`Cue`] value type shared by the whole pipeline,
//! plus conversion between SubRip text and ordered cue sequences. Anything
//! appearing after the second timestamp on a timing line (coordinate hints and
//! similar player extensions) is preserved verbatim in [`Cue::proprietary`]
//! so untouched tracks round-trip unchanged.
//!
//! ## Quick Start
//!
//! ```
//! let cues = dualsub_srt::parse("1\n00:00:01,000 --> 00:00:02,500\nHello\n").unwrap();
//!
//! assert_eq!(cues.len(), 1);
//! assert_eq!(cues[0].content, "Hello");
//! assert_eq!(dualsub_srt::compose(&cues), "1\n00:00:01,000 --> 00:00:02,500\nHello\n\n");
//! ```

mod compose;
mod cue;
mod error;
mod parse;
pub mod timestamp;

pub use compose::compose;
pub use cue::Cue;
pub use error::{ParseError, Result};
pub use parse::parse;
