//! Removal of segments too brief to read.
//!
//! Near-miss overlaps between independently authored tracks leave slivers a
//! viewer cannot read. A single forward pass drops each sliver whose content
//! is redundant on both tracks and donates its duration to whichever
//! neighbor repeats that content, keeping the timeline contiguous. When a
//! sliver is elided the lookback segment stays put, so a run of consecutive
//! slivers collapses into its neighbors within the same pass.
//!
//! The pass must run exactly once: repeating it would keep extending
//! boundaries across segments that were already stretched.

use crate::segment::Segment;
use dualsub_srt::Cue;
use std::time::Duration;

/// Drop redundant segments no longer than `min_len`, donating their duration
/// to the matching neighbor(s).
pub fn smooth(segments: Vec<Segment>, min_len: Duration) -> Vec<Segment> {
    let mut smoothed = Vec::with_capacity(segments.len());
    let mut iter = segments.into_iter();

    let mut prev: Option<Segment> = None;
    let mut cur = iter.next();
    let mut next = iter.next();

    while let Some(segment) = cur.take() {
        if segment.duration() <= min_len
            && both_tracks_redundant(&segment, prev.as_ref(), next.as_ref())
        {
            absorb(&segment, prev.as_mut(), next.as_mut());
            // elided: prev keeps serving as the lookback for what follows
        } else {
            if let Some(finished) = prev.take() {
                smoothed.push(finished);
            }
            prev = Some(segment);
        }
        cur = next;
        next = iter.next();
    }

    if let Some(finished) = prev {
        smoothed.push(finished);
    }
    smoothed
}

/// A segment may only be removed when neither track loses unique content.
fn both_tracks_redundant(cur: &Segment, prev: Option<&Segment>, next: Option<&Segment>) -> bool {
    track_redundant(
        cur.primary.as_ref(),
        prev.and_then(|s| s.primary.as_ref()),
        next.and_then(|s| s.primary.as_ref()),
    ) && track_redundant(
        cur.secondary.as_ref(),
        prev.and_then(|s| s.secondary.as_ref()),
        next.and_then(|s| s.secondary.as_ref()),
    )
}

/// Empty slots are trivially redundant; occupied ones must repeat a neighbor.
fn track_redundant(cur: Option<&Cue>, prev: Option<&Cue>, next: Option<&Cue>) -> bool {
    match cur {
        None => true,
        Some(_) => same_text(cur, prev) || same_text(cur, next),
    }
}

/// Whether any track's text repeats between a dropped segment and a neighbor.
fn repeats_in(cur: &Segment, neighbor: &Segment) -> bool {
    same_text(cur.primary.as_ref(), neighbor.primary.as_ref())
        || same_text(cur.secondary.as_ref(), neighbor.secondary.as_ref())
}

fn same_text(a: Option<&Cue>, b: Option<&Cue>) -> bool {
    matches!((a, b), (Some(a), Some(b)) if a.content == b.content)
}

/// Donate a dropped segment's duration to the neighbor(s) repeating its text.
///
/// Both sides repeat: prev takes the floored half (millisecond resolution),
/// next takes the remainder, so the shared boundary lands on one instant.
/// One side repeats: that side absorbs everything. Neither: the duration is
/// discarded with the segment.
fn absorb(cur: &Segment, prev: Option<&mut Segment>, next: Option<&mut Segment>) {
    let repeats_prev = prev.as_deref().is_some_and(|p| repeats_in(cur, p));
    let repeats_next = next.as_deref().is_some_and(|n| repeats_in(cur, n));
    let length = cur.duration();

    let (prev_shift, next_shift) = if repeats_prev && repeats_next {
        let half = Duration::from_millis(length.as_millis() as u64 / 2);
        (half, length - half)
    } else {
        (length, length)
    };

    if repeats_prev {
        if let Some(neighbor) = prev {
            extend_end(neighbor, prev_shift);
        }
    }
    if repeats_next {
        if let Some(neighbor) = next {
            pull_start(neighbor, next_shift);
        }
    }
}

fn extend_end(segment: &mut Segment, shift: Duration) {
    if let Some(cue) = segment.primary.as_mut() {
        cue.end += shift;
    }
    if let Some(cue) = segment.secondary.as_mut() {
        cue.end += shift;
    }
}

fn pull_start(segment: &mut Segment, shift: Duration) {
    if let Some(cue) = segment.primary.as_mut() {
        cue.start = cue.start.saturating_sub(shift);
    }
    if let Some(cue) = segment.secondary.as_mut() {
        cue.start = cue.start.saturating_sub(shift);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cue(start_ms: u64, end_ms: u64, text: &str) -> Cue {
        Cue::new(
            0,
            Duration::from_millis(start_ms),
            Duration::from_millis(end_ms),
            text,
        )
    }

    fn pair(p: Option<Cue>, s: Option<Cue>) -> Segment {
        Segment::new(p, s)
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_smooth_keeps_long_segments() {
        let segments = vec![pair(Some(cue(2000, 4000, "a1")), Some(cue(2000, 4000, "b1")))];
        assert_eq!(smooth(segments.clone(), ms(1000)), segments);
    }

    #[test]
    fn test_smooth_absorbs_early_start_into_next() {
        let segments = vec![
            pair(Some(cue(1000, 2000, "a1")), None),
            pair(Some(cue(2000, 4000, "a1")), Some(cue(2000, 4000, "b1"))),
        ];
        assert_eq!(
            smooth(segments, ms(1000)),
            vec![pair(Some(cue(1000, 4000, "a1")), Some(cue(1000, 4000, "b1")))]
        );
    }

    #[test]
    fn test_smooth_absorbs_late_end_into_prev() {
        let segments = vec![
            pair(Some(cue(1000, 3000, "a1")), Some(cue(1000, 3000, "b1"))),
            pair(Some(cue(3000, 4000, "a1")), None),
        ];
        assert_eq!(
            smooth(segments, ms(1000)),
            vec![pair(Some(cue(1000, 4000, "a1")), Some(cue(1000, 4000, "b1")))]
        );
    }

    #[test]
    fn test_smooth_splits_between_both_neighbors() {
        let segments = vec![
            pair(Some(cue(1000, 4000, "a1")), Some(cue(1000, 4000, "b1"))),
            pair(Some(cue(4000, 6000, "a1")), Some(cue(4000, 6000, "b2"))),
            pair(Some(cue(6000, 9000, "a2")), Some(cue(6000, 9000, "b2"))),
        ];
        assert_eq!(
            smooth(segments, ms(2000)),
            vec![
                pair(Some(cue(1000, 5000, "a1")), Some(cue(1000, 5000, "b1"))),
                pair(Some(cue(5000, 9000, "a2")), Some(cue(5000, 9000, "b2"))),
            ]
        );
    }

    #[test]
    fn test_smooth_odd_split_floors_toward_prev_without_gap() {
        // 375ms sliver split both ways: prev takes 187ms, next takes 188ms.
        let segments = vec![
            pair(Some(cue(0, 2000, "a1")), None),
            pair(Some(cue(2000, 2375, "a1")), Some(cue(2000, 2375, "b1"))),
            pair(Some(cue(2375, 6000, "a2")), Some(cue(2375, 6000, "b1"))),
        ];
        assert_eq!(
            smooth(segments, ms(500)),
            vec![
                pair(Some(cue(0, 2187, "a1")), None),
                pair(Some(cue(2187, 6000, "a2")), Some(cue(2187, 6000, "b1"))),
            ]
        );
    }

    #[test]
    fn test_smooth_keeps_short_segment_with_unique_content() {
        let segments = vec![
            pair(None, Some(cue(1000, 4000, "b1"))),
            pair(Some(cue(4000, 5000, "a1")), Some(cue(4000, 5000, "b2"))),
            pair(None, Some(cue(6000, 9000, "b3"))),
        ];
        assert_eq!(smooth(segments.clone(), ms(2000)), segments);
    }

    #[test]
    fn test_smooth_extends_trailing_repeat_into_kept_short_segment() {
        let segments = vec![
            pair(Some(cue(1000, 4000, "a1")), None),
            pair(Some(cue(4000, 5000, "a1")), Some(cue(4000, 5000, "b1"))),
            pair(Some(cue(5000, 6000, "a1")), None),
        ];
        assert_eq!(
            smooth(segments, ms(1000)),
            vec![
                pair(Some(cue(1000, 4000, "a1")), None),
                pair(Some(cue(4000, 6000, "a1")), Some(cue(4000, 6000, "b1"))),
            ]
        );
    }

    #[test]
    fn test_smooth_keeps_short_tail_with_new_text() {
        let segments = vec![
            pair(Some(cue(1000, 4000, "a1")), None),
            pair(Some(cue(4000, 5000, "a1")), Some(cue(4000, 5000, "b1"))),
            pair(Some(cue(5000, 6000, "a2")), None),
        ];
        assert_eq!(smooth(segments.clone(), ms(1000)), segments);
    }

    #[test]
    fn test_smooth_collapses_consecutive_shorts_in_one_pass() {
        let segments = vec![
            pair(Some(cue(1000, 5000, "a1")), Some(cue(1000, 5000, "b1"))),
            pair(None, Some(cue(5000, 7000, "b1"))),
            pair(Some(cue(7000, 9000, "a2")), Some(cue(7000, 9000, "b1"))),
            pair(Some(cue(9000, 11000, "a2")), None),
        ];
        // The first sliver donates 1s to each side; the second, now 3s long,
        // still falls at the threshold and splits again. One pass settles it.
        assert_eq!(
            smooth(segments, ms(3000)),
            vec![
                pair(Some(cue(1000, 7500, "a1")), Some(cue(1000, 7500, "b1"))),
                pair(Some(cue(7500, 11000, "a2")), None),
            ]
        );
    }

    #[test]
    fn test_smooth_is_idempotent_on_already_smoothed_input() {
        let segments = vec![
            pair(Some(cue(1000, 7500, "a1")), Some(cue(1000, 7500, "b1"))),
            pair(Some(cue(7500, 11000, "a2")), None),
        ];
        assert_eq!(smooth(segments.clone(), ms(3000)), segments);
    }

    #[test]
    fn test_smooth_empty_input() {
        assert_eq!(smooth(vec![], ms(1000)), vec![]);
    }

    #[test]
    fn test_smooth_single_short_segment_has_no_neighbors_to_match() {
        let segments = vec![pair(Some(cue(1000, 2000, "a1")), None)];
        assert_eq!(smooth(segments.clone(), ms(5000)), segments);
    }
}
