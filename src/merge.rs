//! Sweep-line merge of two cue streams into dual-slot segments.
//!
//! The merger walks both streams in start order, keeping one not-yet-final
//! pending pair. Whenever both slots hold a cue, the pair is split at its
//! change points so every emitted segment has a constant presence pattern;
//! the last window stays pending because a later cue may still extend it.

use crate::error::{Error, Result};
use crate::segment::Segment;
use dualsub_srt::Cue;
use std::collections::VecDeque;
use std::time::Duration;

/// Which input stream a cue came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Primary,
    Secondary,
}

/// Merge two cue streams into ordered, non-overlapping segments.
///
/// Both streams must individually be time-ordered and non-overlapping; a
/// stream violating that is rejected outright. Either stream may be empty, in
/// which case the other passes through as single-slot segments.
pub fn merge(primary: Vec<Cue>, secondary: Vec<Cue>) -> Result<Vec<Segment>> {
    ensure_well_formed("primary", &primary)?;
    ensure_well_formed("secondary", &secondary)?;

    let mut segments = Vec::new();
    let mut cur_primary: Option<Cue> = None;
    let mut cur_secondary: Option<Cue> = None;

    for (cue, slot) in sweep(primary, secondary) {
        // A cue landing in an occupied slot finalizes the whole pending pair.
        let occupied = match slot {
            Slot::Primary => cur_primary.is_some(),
            Slot::Secondary => cur_secondary.is_some(),
        };
        if occupied {
            segments.push(Segment::new(cur_primary.take(), cur_secondary.take()));
        }

        match slot {
            Slot::Primary => cur_primary = Some(cue),
            Slot::Secondary => cur_secondary = Some(cue),
        }

        let mut windows = decompose(cur_primary.take(), cur_secondary.take());
        if let Some(last) = windows.pop() {
            segments.extend(windows);
            cur_primary = last.primary;
            cur_secondary = last.secondary;
        }
    }

    if cur_primary.is_some() || cur_secondary.is_some() {
        segments.push(Segment::new(cur_primary, cur_secondary));
    }

    Ok(segments)
}

/// Interleave both streams by start time, primary first on ties.
fn sweep(primary: Vec<Cue>, secondary: Vec<Cue>) -> Vec<(Cue, Slot)> {
    let mut merged = Vec::with_capacity(primary.len() + secondary.len());
    let mut primary = VecDeque::from(primary);
    let mut secondary = VecDeque::from(secondary);

    while !primary.is_empty() || !secondary.is_empty() {
        let take_primary = match (primary.front(), secondary.front()) {
            (Some(p), Some(s)) => p.start <= s.start,
            (Some(_), None) => true,
            _ => false,
        };
        if take_primary {
            if let Some(cue) = primary.pop_front() {
                merged.push((cue, Slot::Primary));
            }
        } else if let Some(cue) = secondary.pop_front() {
            merged.push((cue, Slot::Secondary));
        }
    }

    merged
}

/// Split an overlapping pair at its change points.
///
/// Each window between consecutive change points yields one segment carrying
/// whichever cues are visible across the whole window, rebounded to the
/// window; windows where neither cue is visible are skipped. Single-slot
/// pairs pass through unchanged.
fn decompose(primary: Option<Cue>, secondary: Option<Cue>) -> Vec<Segment> {
    let (p, s) = match (primary, secondary) {
        (Some(p), Some(s)) => (p, s),
        (primary, secondary) => return vec![Segment::new(primary, secondary)],
    };

    let mut points = vec![p.start, p.end, s.start, s.end];
    points.sort_unstable();
    points.dedup();

    let mut windows = Vec::new();
    for pair in points.windows(2) {
        let (t1, t2) = (pair[0], pair[1]);
        let visible = |cue: &Cue| cue.start <= t1 && t2 <= cue.end;
        let prim = visible(&p).then(|| rebounded(&p, t1, t2));
        let sec = visible(&s).then(|| rebounded(&s, t1, t2));
        if prim.is_some() || sec.is_some() {
            windows.push(Segment::new(prim, sec));
        }
    }
    windows
}

/// The same cue, confined to a window.
fn rebounded(cue: &Cue, start: Duration, end: Duration) -> Cue {
    Cue {
        start,
        end,
        ..cue.clone()
    }
}

/// Reject streams that are out of order or self-overlapping.
fn ensure_well_formed(stream: &'static str, cues: &[Cue]) -> Result<()> {
    for (i, cue) in cues.iter().enumerate() {
        if cue.start > cue.end {
            return Err(Error::malformed_stream(
                stream,
                format!("cue {i} ends before it starts"),
            ));
        }
    }
    for (i, pair) in cues.windows(2).enumerate() {
        if pair[1].start < pair[0].end {
            return Err(Error::malformed_stream(
                stream,
                format!("cues {i} and {} overlap or are out of order", i + 1),
            ));
        }
    }
    Ok(())
}
