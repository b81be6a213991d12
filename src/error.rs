//! Error types for the merge pipeline.

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while combining two cue streams.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// An input stream violates the ordering/non-overlap precondition.
    ///
    /// The merger never reorders cues; a stream that is out of order or
    /// self-overlapping is rejected before any work happens.
    #[error("malformed {stream} stream: {message}")]
    MalformedStream {
        stream: &'static str,
        message: String,
    },

    /// A style attribute name the renderer does not understand.
    #[error("unknown style attribute: {name}")]
    UnknownStyleAttribute { name: String },

    /// A style attribute entry that is not a `name:value` pair.
    #[error("malformed style attribute entry: {entry:?}")]
    MalformedStyleEntry { entry: String },
}

impl Error {
    /// Create a malformed-stream error.
    pub fn malformed_stream(stream: &'static str, message: impl Into<String>) -> Self {
        Self::MalformedStream {
            stream,
            message: message.into(),
        }
    }
}
