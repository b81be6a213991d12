//! The timed caption value type.

use std::time::Duration;

/// A single timed caption.
///
/// Equality is plain value equality over all fields, so cues can be compared
/// directly in assertions and redundancy checks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cue {
    /// Informational ordinal; rewritten when a combined file is composed.
    pub index: usize,
    /// Offset from stream start at which the caption appears.
    pub start: Duration,
    /// Offset from stream start at which the caption disappears.
    pub end: Duration,
    /// Caption text; may carry inline markup and a position-override code.
    pub content: String,
    /// Format-specific data after the timing line, preserved verbatim.
    pub proprietary: String,
}

impl Cue {
    /// Create a cue with no proprietary data.
    pub fn new(index: usize, start: Duration, end: Duration, content: impl Into<String>) -> Self {
        Self {
            index,
            start,
            end,
            content: content.into(),
            proprietary: String::new(),
        }
    }

    /// How long the cue stays on screen.
    pub fn duration(&self) -> Duration {
        self.end.saturating_sub(self.start)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration() {
        let cue = Cue::new(1, Duration::from_millis(500), Duration::from_millis(2750), "hi");
        assert_eq!(cue.duration(), Duration::from_millis(2250));
    }

    #[test]
    fn test_value_equality() {
        let a = Cue::new(1, Duration::from_secs(1), Duration::from_secs(2), "text");
        let mut b = a.clone();
        assert_eq!(a, b);
        b.proprietary = "X1:100".to_string();
        assert_ne!(a, b);
    }
}
