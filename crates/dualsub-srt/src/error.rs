//! Error types for dualsub-srt.

/// Result type alias using our ParseError type.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors that can occur while parsing SubRip text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// A cue block did not begin with a numeric index line.
    #[error("line {line}: expected cue index, found {found:?}")]
    ExpectedIndex { line: usize, found: String },

    /// A timing line was missing or did not contain the `-->` separator.
    #[error("line {line}: malformed timing line {found:?}")]
    MalformedTiming { line: usize, found: String },

    /// A timestamp did not match `HH:MM:SS,mmm`.
    #[error("line {line}: malformed timestamp {found:?}")]
    MalformedTimestamp { line: usize, found: String },

    /// A cue ends before it starts.
    #[error("line {line}: cue ends before it starts")]
    NegativeDuration { line: usize },
}

impl ParseError {
    /// Create an expected-index error.
    pub fn expected_index(line: usize, found: impl Into<String>) -> Self {
        Self::ExpectedIndex {
            line,
            found: found.into(),
        }
    }

    /// Create a malformed-timing error.
    pub fn malformed_timing(line: usize, found: impl Into<String>) -> Self {
        Self::MalformedTiming {
            line,
            found: found.into(),
        }
    }

    /// Create a malformed-timestamp error.
    pub fn malformed_timestamp(line: usize, found: impl Into<String>) -> Self {
        Self::MalformedTimestamp {
            line,
            found: found.into(),
        }
    }
}
