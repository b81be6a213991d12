//! SubRip timestamp conversion.
//!
//! SubRip writes offsets as `HH:MM:SS,mmm`. Some files in the wild use `.` as
//! the millisecond separator; parsing accepts both, composing always emits `,`.

use crate::error::{ParseError, Result};
use std::time::Duration;

/// Parse a `HH:MM:SS,mmm` timestamp into an offset from stream start.
///
/// `line` is the 1-based source line, used for error reporting.
pub fn parse_timestamp(text: &str, line: usize) -> Result<Duration> {
    let mut fields = text.splitn(3, ':');
    let (Some(hours), Some(minutes), Some(rest)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(ParseError::malformed_timestamp(line, text));
    };

    let (seconds, millis) = rest
        .split_once([',', '.'])
        .ok_or_else(|| ParseError::malformed_timestamp(line, text))?;

    let parse_field = |field: &str| -> Result<u64> {
        field
            .parse()
            .map_err(|_| ParseError::malformed_timestamp(line, text))
    };

    let hours = parse_field(hours)?;
    let minutes = parse_field(minutes)?;
    let seconds = parse_field(seconds)?;
    if millis.len() != 3 {
        return Err(ParseError::malformed_timestamp(line, text));
    }
    let millis = parse_field(millis)?;

    Ok(Duration::from_millis(
        ((hours * 60 + minutes) * 60 + seconds) * 1000 + millis,
    ))
}

/// Format an offset as `HH:MM:SS,mmm`.
pub fn format_timestamp(offset: Duration) -> String {
    let total_millis = offset.as_millis();
    let millis = total_millis % 1000;
    let seconds = (total_millis / 1000) % 60;
    let minutes = (total_millis / 60_000) % 60;
    let hours = total_millis / 3_600_000;
    format!("{hours:02}:{minutes:02}:{seconds:02},{millis:03}")
}
