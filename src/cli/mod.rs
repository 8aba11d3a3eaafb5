//! CLI Module
//!
//! Command-line interface for wavscan.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// wavscan - find audio files and load their samples
#[derive(Parser, Debug)]
#[command(name = "wavscan")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List audio files found in the given files and directories
    #[command(name = "scan")]
    Scan {
        /// Files and/or directories to search
        #[arg(required = true)]
        paths: Vec<PathBuf>,

        /// Accepted filename ending, repeatable (default: .wav)
        #[arg(short, long = "ext")]
        extensions: Vec<String>,

        /// Only look at the top level of each directory
        #[arg(long)]
        no_recursive: bool,

        /// Do not descend into symlinked directories
        #[arg(long)]
        no_follow_symlinks: bool,

        /// JSON file with discovery options
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print the result as a JSON array
        #[arg(long)]
        json: bool,
    },

    /// Load an audio file and print a summary
    #[command(name = "load")]
    Load {
        /// Audio file to load
        path: PathBuf,

        /// Resample to this rate (Hz)
        #[arg(short, long)]
        sample_rate: Option<u32>,

        /// First frame to read; negative counts from the end
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        start: i64,

        /// Frame to stop before; negative counts from the end
        #[arg(long, allow_negative_numbers = true)]
        stop: Option<i64>,

        /// Write the loaded audio to this WAV file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the summary as JSON
        #[arg(long)]
        json: bool,
    },
}
