use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tower_stats_store::DEFAULT_DATA_FILE;

#[derive(Parser)]
#[command(name = "tower-stats")]
#[command(version)]
#[command(about = "Track end-of-run statistics from The Tower")]
pub struct Cli {
    /// Session history JSON document
    #[arg(long, global = true, default_value = DEFAULT_DATA_FILE)]
    pub data: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Add a session from exported stats text
    Add {
        /// Read stats from a file instead of stdin
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Show the most recent session
    Latest,

    /// List all recorded sessions
    List,

    /// Show one session by index
    Show { index: usize },

    /// Compare two sessions by index
    Compare { first: usize, second: usize },

    /// Print the recognized stat labels
    Fields {
        /// Emit JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print version information
    Version,
}
