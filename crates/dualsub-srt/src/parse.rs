//! SubRip text parsing.

use crate::cue::Cue;
use crate::error::{ParseError, Result};
use crate::timestamp::parse_timestamp;
use std::time::Duration;

/// Parse SubRip text into an ordered cue sequence.
///
/// Blank-line runs between cues, a missing trailing newline, and a leading BOM
/// are tolerated. Text after the second timestamp on a timing line is kept
/// verbatim as the cue's proprietary data.
pub fn parse(input: &str) -> Result<Vec<Cue>> {
    let mut cues = Vec::new();
    let mut lines = input.lines().enumerate().peekable();

    loop {
        while matches!(lines.peek(), Some((_, line)) if line.trim().is_empty()) {
            lines.next();
        }
        let Some((line_no, index_line)) = lines.next() else {
            break;
        };

        let index_text = index_line.trim().trim_start_matches('\u{feff}');
        let index: usize = index_text
            .parse()
            .map_err(|_| ParseError::expected_index(line_no + 1, index_text))?;

        let (timing_no, timing_line) = lines
            .next()
            .ok_or_else(|| ParseError::malformed_timing(line_no + 1, "<end of input>"))?;
        let (start, end, proprietary) = parse_timing(timing_line, timing_no + 1)?;

        let mut content_lines = Vec::new();
        while let Some((_, line)) = lines.peek() {
            if line.trim().is_empty() {
                break;
            }
            content_lines.push(*line);
            lines.next();
        }

        cues.push(Cue {
            index,
            start,
            end,
            content: content_lines.join("\n"),
            proprietary,
        });
    }

    Ok(cues)
}

/// Split a timing line into start, end, and trailing proprietary data.
fn parse_timing(line: &str, line_no: usize) -> Result<(Duration, Duration, String)> {
    let (start_text, rest) = line
        .split_once("-->")
        .ok_or_else(|| ParseError::malformed_timing(line_no, line))?;

    let start = parse_timestamp(start_text.trim(), line_no)?;

    // The end timestamp is the first whitespace-delimited token; everything
    // after it belongs to the source format, not to us.
    let rest = rest.trim();
    let (end_text, proprietary) = match rest.split_once(char::is_whitespace) {
        Some((token, tail)) => (token, tail.trim().to_string()),
        None => (rest, String::new()),
    };
    let end = parse_timestamp(end_text, line_no)?;

    if end < start {
        return Err(ParseError::NegativeDuration { line: line_no });
    }

    Ok((start, end, proprietary))
}
