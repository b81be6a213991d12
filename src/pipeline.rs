//! The merge → smooth → render pipeline.

use crate::error::Result;
use crate::style::FontStyle;
use crate::{merge, render, smooth};
use dualsub_srt::Cue;
use std::time::Duration;

/// Smallest segment duration the smoother keeps by default.
pub const DEFAULT_MIN_LEN: Duration = Duration::from_millis(500);

/// Produce the combined, styled cue sequence for one pair of streams.
///
/// Each invocation owns its inputs for the whole run; callers processing
/// several files or track combinations parse fresh streams per run.
pub fn produce(
    primary: Vec<Cue>,
    secondary: Vec<Cue>,
    primary_style: &FontStyle,
    secondary_style: &FontStyle,
    min_len: Duration,
) -> Result<Vec<Cue>> {
    let segments = merge::merge(primary, secondary)?;
    let segments = smooth::smooth(segments, min_len);
    Ok(render::render(&segments, primary_style, secondary_style))
}

/// [`produce`] with the default smoothing threshold and styles.
pub fn produce_with_defaults(primary: Vec<Cue>, secondary: Vec<Cue>) -> Result<Vec<Cue>> {
    produce(
        primary,
        secondary,
        &FontStyle::primary_default(),
        &FontStyle::secondary_default(),
        DEFAULT_MIN_LEN,
    )
}
