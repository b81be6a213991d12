//! SubRip text composition.

use crate::cue::Cue;
use crate::timestamp::format_timestamp;
use std::fmt::Write;

/// Compose cues back into SubRip text.
///
/// Indices are written as stored; callers that renumber do so before
/// composing. Proprietary data, when present, is appended after the end
/// timestamp exactly as it was parsed.
pub fn compose(cues: &[Cue]) -> String {
    let mut out = String::new();
    for cue in cues {
        let _ = writeln!(out, "{}", cue.index);
        let _ = write!(
            out,
            "{} --> {}",
            format_timestamp(cue.start),
            format_timestamp(cue.end)
        );
        if !cue.proprietary.is_empty() {
            let _ = write!(out, " {}", cue.proprietary);
        }
        let _ = writeln!(out);
        let _ = writeln!(out, "{}", cue.content);
        let _ = writeln!(out);
    }
    out
}
