//! Subtitle track discovery via ffprobe.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::process::Command;

/// A candidate subtitle track inside a media container.
#[derive(Debug, Clone, Serialize)]
pub struct SubtitleTrack {
    /// Container-global stream index, usable with ffmpeg `-map 0:<index>`.
    pub index: u32,
    /// Subtitle codec (e.g., "subrip", "ass", "mov_text").
    pub codec: String,
    /// Language code (e.g., "eng", "rus").
    pub language: Option<String>,
    /// Track title.
    pub title: Option<String>,
    /// Whether this is the default track.
    pub default: bool,
    /// Whether this is a forced track.
    pub forced: bool,
    /// Whether this is a commentary track.
    pub commentary: bool,
    /// Whether this track is tagged for the hearing impaired.
    pub hearing_impaired: bool,
}

#[derive(Debug, Deserialize)]
struct FfprobeOutput {
    #[serde(default)]
    streams: Vec<FfprobeStream>,
}

#[derive(Debug, Deserialize)]
struct FfprobeStream {
    index: u32,
    codec_name: Option<String>,
    #[serde(default)]
    disposition: FfprobeDisposition,
    #[serde(default)]
    tags: FfprobeTags,
}

#[derive(Debug, Default, Deserialize)]
struct FfprobeDisposition {
    #[serde(default)]
    default: u8,
    #[serde(default)]
    forced: u8,
    #[serde(default)]
    comment: u8,
    #[serde(default)]
    hearing_impaired: u8,
}

#[derive(Debug, Default, Deserialize)]
struct FfprobeTags {
    language: Option<String>,
    title: Option<String>,
}

/// List every subtitle stream in a media file, unfiltered.
pub fn probe_subtitle_streams(path: &Path) -> Result<Vec<SubtitleTrack>> {
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let output = Command::new("ffprobe")
        .args([
            "-v",
            "quiet",
            "-print_format",
            "json",
            "-show_streams",
            "-select_streams",
            "s",
        ])
        .arg(path)
        .output()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::tool_not_found("ffprobe")
            } else {
                Error::Io(e)
            }
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::tool_failed("ffprobe", stderr.to_string()));
    }

    let json_str = String::from_utf8(output.stdout)
        .map_err(|e| Error::parse_error("ffprobe", format!("Invalid UTF-8: {}", e)))?;

    let ff_output: FfprobeOutput = serde_json::from_str(&json_str)?;

    Ok(ff_output.streams.into_iter().map(SubtitleTrack::from).collect())
}

impl From<FfprobeStream> for SubtitleTrack {
    fn from(stream: FfprobeStream) -> Self {
        SubtitleTrack {
            index: stream.index,
            codec: stream.codec_name.unwrap_or_default(),
            language: stream.tags.language,
            title: stream.tags.title,
            default: stream.disposition.default == 1,
            forced: stream.disposition.forced == 1,
            commentary: stream.disposition.comment == 1,
            hearing_impaired: stream.disposition.hearing_impaired == 1,
        }
    }
}

/// Find candidate subtitle tracks per requested language.
///
/// Forced and commentary tracks are dropped; SDH tracks are dropped only when
/// a plain track remains for the same language. Every requested language gets
/// an entry, possibly empty.
pub fn find_subtitle_tracks(
    path: &Path,
    languages: &[&str],
) -> Result<BTreeMap<String, Vec<SubtitleTrack>>> {
    let streams = probe_subtitle_streams(path)?;
    tracing::debug!(
        "{} subtitle stream(s) in {:?}, selecting {:?}",
        streams.len(),
        path,
        languages
    );
    Ok(select_tracks(streams, languages))
}

/// Group tracks by requested language and filter out variants a viewer would
/// not want combined: forced, commentary, and redundant SDH tracks.
fn select_tracks(
    streams: Vec<SubtitleTrack>,
    languages: &[&str],
) -> BTreeMap<String, Vec<SubtitleTrack>> {
    let mut tracks: BTreeMap<String, Vec<SubtitleTrack>> = languages
        .iter()
        .map(|lang| (lang.to_string(), Vec::new()))
        .collect();

    for stream in streams {
        let Some(language) = stream.language.clone() else {
            continue;
        };
        let Some(candidates) = tracks.get_mut(&language) else {
            continue;
        };
        if stream.forced || title_contains(&stream, "forc") {
            continue;
        }
        if stream.commentary || title_contains(&stream, "comm") {
            continue;
        }
        candidates.push(stream);
    }

    // SDH tracks duplicate a plain track's dialogue; keep them only when they
    // are all a language has.
    for candidates in tracks.values_mut() {
        if candidates.iter().any(|t| !is_sdh(t)) {
            candidates.retain(|t| !is_sdh(t));
        }
    }

    tracks
}

fn title_contains(track: &SubtitleTrack, needle: &str) -> bool {
    track
        .title
        .as_deref()
        .is_some_and(|title| title.to_lowercase().contains(needle))
}

fn is_sdh(track: &SubtitleTrack) -> bool {
    track.hearing_impaired || title_contains(track, "sdh")
}
