//! # dualsub-av
//!
//! Subtitle track probing and extraction for video containers.
//!
//! This crate provides functionality for:
//! - Probing media files for subtitle streams and their tags/dispositions
//! - Selecting candidate tracks per language (skipping forced, commentary,
//!   and redundant SDH variants)
//! - Extracting selected streams as SubRip text
//!
//! Probing and extraction shell out to ffprobe/ffmpeg; nothing here parses
//! container formats directly.
//!
//! ## Example
//!
//! ```no_run
//! use dualsub_av::{extract_subtitle_tracks, find_subtitle_tracks};
//! use std::path::Path;
//!
//! let video = Path::new("/path/to/video.mkv");
//! let tracks = find_subtitle_tracks(video, &["eng", "rus"])?;
//! let indices: Vec<u32> = tracks.values().flatten().map(|t| t.index).collect();
//! let raw = extract_subtitle_tracks(video, &indices)?;
//! # Ok::<(), dualsub_av::Error>(())
//! ```

mod error;
pub mod extract;
pub mod probe;
pub mod tools;

pub use error::{Error, Result};
pub use extract::extract_subtitle_tracks;
pub use probe::{find_subtitle_tracks, probe_subtitle_streams, SubtitleTrack};
pub use tools::{check_tool, check_tools, require_tool, ToolInfo, REQUIRED_TOOLS};
