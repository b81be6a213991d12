//! Rendering merged segments into final styled cues.
//!
//! Source tracks arrive with their own inline styling; it is stripped and
//! replaced with the configured per-track style so the combined file looks
//! uniform. A position-override code found in the primary text is promoted to
//! the front of the cue, outside the styled span, where players expect it.

use crate::segment::Segment;
use crate::style::FontStyle;
use dualsub_srt::Cue;
use regex::Regex;
use std::sync::LazyLock;

static FONT_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"</?font[^>]*>").expect("font tag pattern"));
static POSITION_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\\an\d\}").expect("position code pattern"));

/// Remove inline `<font>` spans, keeping their inner text.
///
/// Only font tags are stripped; other markup such as `<b>` stays.
pub fn strip_font(text: &str) -> String {
    FONT_TAG.replace_all(text, "").into_owned()
}

/// Split a position-override code (`{\anN}`) out of cue text.
///
/// Returns the text without the code, and the code itself (empty when the
/// text has none).
pub fn extract_position(text: &str) -> (String, String) {
    match POSITION_CODE.find(text) {
        Some(found) => {
            let mut stripped = String::with_capacity(text.len() - found.len());
            stripped.push_str(&text[..found.start()]);
            stripped.push_str(&text[found.end()..]);
            (stripped, found.as_str().to_string())
        }
        None => (text.to_string(), String::new()),
    }
}

/// Render smoothed segments into the final cue sequence.
///
/// Each segment becomes one cue: position code (if any), the styled primary
/// line, a line break, then the styled secondary block. Indices restart at 1;
/// per-track proprietary data does not carry over to the combined cue.
pub fn render(
    segments: &[Segment],
    primary_style: &FontStyle,
    secondary_style: &FontStyle,
) -> Vec<Cue> {
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let mut position = String::new();
            let primary_line = match &segment.primary {
                Some(cue) => {
                    let text = strip_font(&cue.content);
                    let (text, code) = extract_position(&text);
                    position = code;
                    primary_style.wrap(text.trim())
                }
                None => String::new(),
            };

            let secondary_block = match &segment.secondary {
                Some(cue) => {
                    let text = strip_font(&cue.content);
                    let (text, _) = extract_position(&text);
                    let styled = secondary_style.wrap(text.trim());
                    // pad single-line secondaries under a primary so the
                    // secondary text sits at a stable height
                    if !primary_line.is_empty() && !styled.contains('\n') {
                        format!(".\n{styled}")
                    } else {
                        styled
                    }
                }
                None => ".\n.".to_string(),
            };

            Cue::new(
                i + 1,
                segment.start(),
                segment.end(),
                format!("{position}{primary_line}\n{secondary_block}"),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn cue(start: u64, end: u64, text: &str) -> Cue {
        Cue::new(0, Duration::from_secs(start), Duration::from_secs(end), text)
    }

    fn styles() -> (FontStyle, FontStyle) {
        (FontStyle::primary_default(), FontStyle::secondary_default())
    }

    #[test]
    fn test_strip_font() {
        assert_eq!(strip_font("<font face=\"Serif\" size=\"18\">text</font>"), "text");
        assert_eq!(strip_font("<font face=\"Serif\" size=\"18\">l1\nl2</font>"), "l1\nl2");
        assert_eq!(strip_font("<font size=\"1\"><b>bold</b></font>"), "<b>bold</b>");
        assert_eq!(strip_font("a<font size=\"1\">b</font>c"), "abc");
    }

    #[test]
    fn test_extract_position() {
        assert_eq!(
            extract_position("no position"),
            ("no position".to_string(), String::new())
        );
        assert_eq!(
            extract_position(r"{\an8}top"),
            ("top".to_string(), r"{\an8}".to_string())
        );
        assert_eq!(
            extract_position(r"<font>{\an8}a</font>"),
            ("<font>a</font>".to_string(), r"{\an8}".to_string())
        );
    }

    #[test]
    fn test_render_both_tracks() {
        let segments = vec![Segment::new(
            Some(cue(1, 3, "Hello")),
            Some(cue(1, 3, "Privet")),
        )];
        let rendered = render(&segments, &styles().0, &styles().1);
        assert_eq!(rendered.len(), 1);
        assert_eq!(rendered[0].index, 1);
        assert_eq!(rendered[0].start, Duration::from_secs(1));
        assert_eq!(rendered[0].end, Duration::from_secs(3));
        assert_eq!(
            rendered[0].content,
            "<font size=\"18\">Hello</font>\n.\n<font color=\"gray\" size=\"15\">Privet</font>"
        );
    }

    #[test]
    fn test_render_primary_only_uses_placeholder() {
        let segments = vec![Segment::new(Some(cue(1, 3, "Hello")), None)];
        let rendered = render(&segments, &styles().0, &styles().1);
        assert_eq!(rendered[0].content, "<font size=\"18\">Hello</font>\n.\n.");
    }

    #[test]
    fn test_render_secondary_only_keeps_second_line() {
        let segments = vec![Segment::new(None, Some(cue(1, 3, "Privet")))];
        let rendered = render(&segments, &styles().0, &styles().1);
        assert_eq!(
            rendered[0].content,
            "\n<font color=\"gray\" size=\"15\">Privet</font>"
        );
    }

    #[test]
    fn test_render_strips_source_styling_and_restyles() {
        let segments = vec![Segment::new(
            Some(cue(1, 3, "<font color=\"#ffffff\">Hello</font>")),
            Some(cue(1, 3, "<font size=\"12\">Privet</font>")),
        )];
        let rendered = render(&segments, &styles().0, &styles().1);
        assert_eq!(
            rendered[0].content,
            "<font size=\"18\">Hello</font>\n.\n<font color=\"gray\" size=\"15\">Privet</font>"
        );
    }

    #[test]
    fn test_render_promotes_position_code_out_of_styled_span() {
        let segments = vec![Segment::new(
            Some(cue(1, 3, r"{\an8}Up here")),
            Some(cue(1, 3, r"{\an8}Naverhu")),
        )];
        let rendered = render(&segments, &styles().0, &styles().1);
        assert_eq!(
            rendered[0].content,
            "{\\an8}<font size=\"18\">Up here</font>\n.\n<font color=\"gray\" size=\"15\">Naverhu</font>"
        );
    }

    #[test]
    fn test_render_multiline_secondary_is_not_padded() {
        let segments = vec![Segment::new(
            Some(cue(1, 3, "Hello")),
            Some(cue(1, 3, "line one\nline two")),
        )];
        let rendered = render(&segments, &styles().0, &styles().1);
        assert_eq!(
            rendered[0].content,
            "<font size=\"18\">Hello</font>\n<font color=\"gray\" size=\"15\">line one\nline two</font>"
        );
    }

    #[test]
    fn test_render_renumbers_and_drops_proprietary() {
        let mut first = cue(1, 2, "one");
        first.proprietary = "X1:100".to_string();
        first.index = 41;
        let segments = vec![
            Segment::new(Some(first), None),
            Segment::new(Some(cue(2, 3, "two")), None),
        ];
        let rendered = render(&segments, &styles().0, &styles().1);
        assert_eq!(rendered[0].index, 1);
        assert_eq!(rendered[1].index, 2);
        assert!(rendered.iter().all(|c| c.proprietary.is_empty()));
    }

    #[test]
    fn test_render_every_cue_separates_primary_from_secondary() {
        let segments = vec![
            Segment::new(Some(cue(1, 2, "a")), Some(cue(1, 2, "b"))),
            Segment::new(Some(cue(2, 3, "a")), None),
            Segment::new(None, Some(cue(3, 4, "b"))),
        ];
        for rendered in render(&segments, &styles().0, &styles().1) {
            assert!(rendered.content.contains('\n'));
        }
    }
}
