//! The dual-slot segment type produced by merging.

use dualsub_srt::Cue;
use std::time::Duration;

/// One constant-presence window of the combined timeline: a primary cue, a
/// secondary cue, or both sharing identical bounds.
///
/// At least one member is always present. Segments own their cues outright,
/// so boundary adjustments during smoothing are plain field updates with no
/// aliasing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub primary: Option<Cue>,
    pub secondary: Option<Cue>,
}

impl Segment {
    /// Create a segment; at least one member must be present.
    pub fn new(primary: Option<Cue>, secondary: Option<Cue>) -> Self {
        debug_assert!(primary.is_some() || secondary.is_some());
        Self { primary, secondary }
    }

    /// The cue that defines this segment's time range.
    fn anchor(&self) -> &Cue {
        self.primary
            .as_ref()
            .or(self.secondary.as_ref())
            .expect("segment has at least one member")
    }

    /// Offset at which the segment becomes visible.
    pub fn start(&self) -> Duration {
        self.anchor().start
    }

    /// Offset at which the segment disappears.
    pub fn end(&self) -> Duration {
        self.anchor().end
    }

    /// How long the segment stays on screen.
    pub fn duration(&self) -> Duration {
        self.anchor().duration()
    }
}
