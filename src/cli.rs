use clap_verbosity_flag::{InfoLevel, Verbosity};
use clap::{Args, Parser, Subcommand};

use art_finder::query::{ArtistMbid, ReleaseGroupMbid, ReleaseMbid, TrackMbid};

/// Find cover, artist and track art across MusicBrainz, Last.fm, Spotify and Wikipedia.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// The path to the configuration file to load.
    #[arg(short, long = "config", value_name = "PATH", global = true)]
    pub config_file_path: Option<std::path::PathBuf>,

    #[command(flatten)]
    pub verbose: Verbosity<InfoLevel>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args)]
pub struct Output {
    /// Print each image as a line of JSON.
    #[arg(long)]
    pub json: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Find art for an album.
    Album {
        #[arg(long)]
        artist: String,
        #[arg(long)]
        album: String,
        /// MusicBrainz release group ID; tried before any name search.
        #[arg(long, value_name = "MBID")]
        release_group: Option<ReleaseGroupMbid>,
        /// MusicBrainz release ID; tried before any name search.
        #[arg(long, value_name = "MBID")]
        release: Option<ReleaseMbid>,
        #[command(flatten)]
        output: Output,
    },
    /// Find pictures of an artist.
    Artist {
        #[arg(long)]
        artist: String,
        #[arg(long, value_name = "MBID")]
        artist_id: Option<ArtistMbid>,
        #[command(flatten)]
        output: Output,
    },
    /// Find art for a track, by way of the releases it appears on.
    Track {
        #[arg(long)]
        artist: String,
        #[arg(long)]
        title: String,
        #[arg(long, value_name = "MBID")]
        track_id: Option<TrackMbid>,
        #[command(flatten)]
        output: Output,
    },
    /// Print the Wikipedia summary for an artist.
    Summary {
        #[arg(long)]
        artist: String,
        #[arg(long, value_name = "MBID")]
        artist_id: Option<ArtistMbid>,
    },
    /// Inspect the configuration.
    #[clap(visible_alias("config"))]
    Configure {
        #[command(subcommand)]
        action: ConfigurationAction
    }
}

#[derive(Subcommand)]
pub enum ConfigurationAction {
    /// Print the location of the configuration file that would be used in the current context.
    #[clap(visible_alias("which"))]
    Where {
        /// Explain why the configuration file is being used, and if there were any issues trying to read it.
        /// This will be enabled by default if standard output is detected as a terminal.
        #[arg(short = 'r', long = "reason", aliases = ["why", "explain"])]
        show_reason: Option<bool>,
        /// Escape special characters (such as spaces) in the path.
        #[arg(short, long, default_value = "false")]
        escape: bool,
    },
}
