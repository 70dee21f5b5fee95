use clap::{Args, Parser, Subcommand};
use releasekit_engine::ContentType;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "releasekit")]
#[command(author, version, about = "Scene-style release name generator")]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the title and season/episode info from a file name
    Inspect {
        /// File name or path to analyze (the file does not have to exist)
        #[arg(required = true)]
        name: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate the release name for a media file
    Name {
        /// Media file to name
        #[arg(required = true)]
        file: PathBuf,

        #[command(flatten)]
        options: NameArgs,
    },

    /// Rename a media file to its generated release name
    Rename {
        /// Media file to rename
        #[arg(required = true)]
        file: PathBuf,

        #[command(flatten)]
        options: NameArgs,

        /// Show the rename without executing it
        #[arg(long)]
        dry_run: bool,
    },

    /// Check that required external tools are available
    CheckTools,
}

/// Manual overrides for release name generation. Anything left unset is
/// auto-detected from the file name or the mediainfo scan.
#[derive(Args)]
pub struct NameArgs {
    /// Title (default: extracted from the file name)
    #[arg(long)]
    pub title: Option<String>,

    /// Release year
    #[arg(long)]
    pub year: Option<String>,

    /// Source tag (BluRay, WEB-DL, ...)
    #[arg(long)]
    pub source: Option<String>,

    /// Release group (default: detected from the file name, else NOTAG)
    #[arg(long)]
    pub group: Option<String>,

    /// Content type
    #[arg(long, default_value = "movie")]
    pub content_type: ContentType,

    /// Season number
    #[arg(long)]
    pub season: Option<u16>,

    /// Episode number
    #[arg(long)]
    pub episode: Option<u16>,

    /// Tag as a complete season
    #[arg(long)]
    pub complete_season: bool,

    /// Tag as a complete series (iNTEGRALE)
    #[arg(long)]
    pub complete_series: bool,

    /// Tag the episode as final
    #[arg(long)]
    pub final_episode: bool,

    /// Use the E## tag form without a season
    #[arg(long)]
    pub episode_only: bool,

    /// Edition tag (EXTENDED, REMASTERED, ...)
    #[arg(long)]
    pub edition: Option<String>,

    /// Info tag (REPACK, PROPER, ...)
    #[arg(long)]
    pub info: Option<String>,

    /// Language tag, replacing auto-detection
    #[arg(long)]
    pub language: Option<String>,

    /// Read track metadata from a mediainfo JSON report instead of
    /// running mediainfo
    #[arg(long, value_name = "PATH")]
    pub media_json: Option<PathBuf>,
}
