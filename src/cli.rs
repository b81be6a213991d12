use clap::{Parser, Subcommand};
use dualsub::FontStyle;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dualsub")]
#[command(author, version, about = "Dual-language subtitle extraction and combining tool")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Build combined subtitle files for one or more videos
    Run {
        /// Primary subtitle language (the one being learned)
        primary_language: String,

        /// Secondary subtitle language (the one already understood)
        secondary_language: String,

        /// Video files carrying both subtitle streams
        #[arg(required = true)]
        videos: Vec<PathBuf>,

        /// Font attributes for primary lines, e.g. "size:18"
        #[arg(long, default_value = "size:18", value_parser = parse_font)]
        primary_font: FontStyle,

        /// Font attributes for secondary lines, e.g. "size:15,color:gray"
        #[arg(long, default_value = "size:15,color:gray", value_parser = parse_font)]
        secondary_font: FontStyle,

        /// Language tag used in output file names (defaults to the primary language)
        #[arg(long)]
        output_language: Option<String>,

        /// Shortest segment the smoother keeps, in milliseconds
        #[arg(long, default_value_t = 500)]
        min_len_ms: u64,
    },

    /// List subtitle tracks in a media file
    Probe {
        /// File to probe
        #[arg(required = true)]
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check that required external tools are available
    CheckTools,

    /// Display version information
    Version,
}

fn parse_font(text: &str) -> Result<FontStyle, dualsub::Error> {
    text.parse()
}
