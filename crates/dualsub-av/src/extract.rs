//! Subtitle stream extraction via ffmpeg.

use crate::{Error, Result};
use std::collections::HashMap;
use std::path::Path;
use std::process::Command;

/// Extract the given subtitle streams as SubRip text, keyed by stream index.
///
/// All requested streams are pulled in a single ffmpeg invocation, each mapped
/// to its own scratch file; the scratch directory is removed when the call
/// returns.
pub fn extract_subtitle_tracks(path: &Path, tracks: &[u32]) -> Result<HashMap<u32, String>> {
    if tracks.is_empty() {
        return Ok(HashMap::new());
    }
    if !path.exists() {
        return Err(Error::file_not_found(path));
    }

    let scratch = tempfile::tempdir()?;

    let mut cmd = Command::new("ffmpeg");
    cmd.args(["-y", "-i"]).arg(path);

    let mut outputs = Vec::with_capacity(tracks.len());
    for &track in tracks {
        let out = scratch.path().join(format!("{track}.srt"));
        cmd.args(["-map", &format!("0:{track}")]).arg(&out);
        outputs.push((track, out));
    }

    tracing::debug!(
        "Extracting {} subtitle stream(s) from {:?}",
        tracks.len(),
        path
    );

    let result = cmd.output().map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::tool_not_found("ffmpeg")
        } else {
            Error::Io(e)
        }
    })?;

    if !result.status.success() {
        let stderr = String::from_utf8_lossy(&result.stderr);
        return Err(Error::tool_failed("ffmpeg", stderr.to_string()));
    }

    let mut extracted = HashMap::with_capacity(outputs.len());
    for (track, out) in outputs {
        let text = std::fs::read_to_string(&out).map_err(|e| {
            Error::tool_failed("ffmpeg", format!("stream {track} produced no output: {e}"))
        })?;
        extracted.insert(track, text);
    }

    Ok(extracted)
}
