mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use dualsub::{pipeline, FontStyle};
use dualsub_av::{
    check_tools, extract_subtitle_tracks, find_subtitle_tracks, probe_subtitle_streams,
    SubtitleTrack,
};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::time::Duration;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "dualsub=debug,dualsub_av=debug,dualsub_srt=debug".to_string()
        } else {
            "dualsub=info,dualsub_av=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    match cli.command {
        Commands::Run {
            primary_language,
            secondary_language,
            videos,
            primary_font,
            secondary_font,
            output_language,
            min_len_ms,
        } => {
            let output_language = output_language.unwrap_or_else(|| primary_language.clone());
            let min_len = Duration::from_millis(min_len_ms);
            for video in &videos {
                run_file(
                    video,
                    &primary_language,
                    &secondary_language,
                    &output_language,
                    &primary_font,
                    &secondary_font,
                    min_len,
                )?;
            }
            Ok(())
        }
        Commands::Probe { file, json } => probe_file(&file, json),
        Commands::CheckTools => check_tools_available(),
        Commands::Version => {
            println!("dualsub {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

/// Combine every primary × secondary track pairing found in one video.
fn run_file(
    video: &Path,
    primary_language: &str,
    secondary_language: &str,
    output_language: &str,
    primary_font: &FontStyle,
    secondary_font: &FontStyle,
    min_len: Duration,
) -> Result<()> {
    if !video.exists() {
        bail!("Input file does not exist: {:?}", video);
    }

    tracing::info!("Processing file: {:?}", video);

    let tracks = find_subtitle_tracks(video, &[primary_language, secondary_language])?;
    let primaries = &tracks[primary_language];
    let secondaries = &tracks[secondary_language];
    if primaries.is_empty() {
        bail!("No {primary_language} subtitle track in {:?}", video);
    }
    if secondaries.is_empty() {
        bail!("No {secondary_language} subtitle track in {:?}", video);
    }

    let indices: Vec<u32> = tracks.values().flatten().map(|t| t.index).collect();
    tracing::info!("Extracting subtitle streams {:?}", indices);
    let raw = extract_subtitle_tracks(video, &indices)?;

    for primary in primaries {
        for secondary in secondaries {
            let primary_cues = dualsub_srt::parse(&raw[&primary.index])
                .with_context(|| format!("stream {} of {:?}", primary.index, video))?;
            let secondary_cues = dualsub_srt::parse(&raw[&secondary.index])
                .with_context(|| format!("stream {} of {:?}", secondary.index, video))?;

            let combined = pipeline::produce(
                primary_cues,
                secondary_cues,
                primary_font,
                secondary_font,
                min_len,
            )?;

            let out_path = output_path(video, output_language, primary, secondary);
            std::fs::write(&out_path, dualsub_srt::compose(&combined))
                .with_context(|| format!("writing {:?}", out_path))?;
            tracing::info!("Wrote {:?} ({} cues)", out_path, combined.len());
            println!("{}", out_path.display());
        }
    }

    Ok(())
}

/// Name the combined file after the video, the output language, and the pair
/// of source tracks, e.g. `movie.rus.russian_english_sdh.srt`.
fn output_path(
    video: &Path,
    language: &str,
    primary: &SubtitleTrack,
    secondary: &SubtitleTrack,
) -> PathBuf {
    let non_alnum = Regex::new(r"[^0-9a-z]+").expect("sanitize pattern");
    let label = |track: &SubtitleTrack| {
        let name = track
            .title
            .clone()
            .or_else(|| track.language.clone())
            .unwrap_or_else(|| track.index.to_string());
        non_alnum.replace_all(&name.to_lowercase(), "_").into_owned()
    };

    let stem = video
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    video.with_file_name(format!(
        "{stem}.{language}.{}_{}.srt",
        label(primary),
        label(secondary)
    ))
}

fn probe_file(file: &Path, json: bool) -> Result<()> {
    if !file.exists() {
        bail!("File does not exist: {:?}", file);
    }

    let streams = probe_subtitle_streams(file)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&streams)?);
        return Ok(());
    }

    println!("File: {}", file.display());
    println!("Subtitle Tracks: {}", streams.len());
    for track in &streams {
        print!("  [{}] {}", track.index, track.codec);
        if let Some(ref language) = track.language {
            print!(" ({})", language);
        }
        if let Some(ref title) = track.title {
            print!(" \"{}\"", title);
        }
        if track.forced {
            print!(" [forced]");
        }
        if track.commentary {
            print!(" [commentary]");
        }
        if track.hearing_impaired {
            print!(" [sdh]");
        }
        if track.default {
            print!(" [default]");
        }
        println!();
    }

    Ok(())
}

fn check_tools_available() -> Result<()> {
    println!("Checking external tools...\n");

    let tools = check_tools();
    let mut all_ok = true;

    for tool in &tools {
        let status = if tool.available {
            "✓"
        } else {
            all_ok = false;
            "✗"
        };

        print!("{} {}", status, tool.name);

        if let Some(ref version) = tool.version {
            print!(" ({})", version);
        }

        if let Some(ref path) = tool.path {
            print!(" - {}", path.display());
        }

        println!();
    }

    println!();
    if all_ok {
        println!("All required tools are available!");
    } else {
        println!("Some tools are missing. Install them to enable extraction.");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn track(index: u32, language: &str, title: Option<&str>) -> SubtitleTrack {
        SubtitleTrack {
            index,
            codec: "subrip".to_string(),
            language: Some(language.to_string()),
            title: title.map(|t| t.to_string()),
            default: false,
            forced: false,
            commentary: false,
            hearing_impaired: false,
        }
    }

    #[test]
    fn test_output_path_uses_titles() {
        let path = output_path(
            Path::new("/films/movie.mkv"),
            "rus",
            &track(13, "rus", Some("Russian (Full)")),
            &track(15, "eng", Some("English")),
        );
        assert_eq!(
            path,
            PathBuf::from("/films/movie.rus.russian_full__english.srt")
        );
    }

    #[test]
    fn test_output_path_falls_back_to_language() {
        let path = output_path(
            Path::new("movie.mkv"),
            "rus",
            &track(13, "rus", None),
            &track(15, "eng", None),
        );
        assert_eq!(path, PathBuf::from("movie.rus.rus_eng.srt"));
    }
}
