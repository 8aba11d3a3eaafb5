//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::path::{Path, PathBuf};

use log::info;
use serde::Serialize;

use crate::audio::{load_audio, save_wav, AudioBuffer, FrameRange};
use crate::config::DiscoveryOptions;
use crate::discovery::find_audio_files_in_paths;
use crate::error::Result;

/// Discovery flags given on the command line
#[derive(Debug, Clone, Default)]
pub struct ScanArgs {
    pub extensions: Vec<String>,
    pub no_recursive: bool,
    pub no_follow_symlinks: bool,
    pub config: Option<PathBuf>,
}

/// Summary of a loaded file, as printed by `load`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LoadSummary {
    pub path: String,
    pub channels: u16,
    pub sample_rate: u32,
    pub frames: usize,
    pub duration_secs: f64,
    pub peak: f32,
}

impl LoadSummary {
    pub fn new(path: &Path, buffer: &AudioBuffer) -> Self {
        LoadSummary {
            path: path.display().to_string(),
            channels: buffer.channels(),
            sample_rate: buffer.sample_rate(),
            frames: buffer.num_frames(),
            duration_secs: buffer.duration(),
            peak: buffer.peak(),
        }
    }
}

/// Combine the config file (if any) with command-line overrides.
pub fn build_options(args: &ScanArgs) -> Result<DiscoveryOptions> {
    let mut options = match &args.config {
        Some(path) => {
            info!("Loading discovery options from: {}", path.display());
            DiscoveryOptions::load(path)?
        }
        None => DiscoveryOptions::default(),
    };

    if !args.extensions.is_empty() {
        options.extensions = args.extensions.clone();
    }
    if args.no_recursive {
        options.traverse_subdirectories = false;
    }
    if args.no_follow_symlinks {
        options.follow_symlinks = false;
    }

    Ok(options)
}

/// List the audio files found in `paths`.
pub fn scan(paths: &[PathBuf], args: &ScanArgs, json: bool) -> Result<Vec<PathBuf>> {
    let options = build_options(args)?;
    info!(
        "Scanning {} path(s) for {:?} (recursive: {}, follow symlinks: {})",
        paths.len(),
        options.extensions,
        options.traverse_subdirectories,
        options.follow_symlinks
    );

    let files = find_audio_files_in_paths(paths, &options)?;
    info!("Found {} audio file(s)", files.len());

    if json {
        println!("{}", serde_json::to_string_pretty(&files)?);
    } else {
        for file in &files {
            println!("{}", file.display());
        }
    }

    Ok(files)
}

/// Load a file, print its summary and optionally write it back out.
pub fn load(
    path: &Path,
    sample_rate: Option<u32>,
    range: FrameRange,
    output: Option<&Path>,
    json: bool,
) -> Result<LoadSummary> {
    info!("Loading audio: {}", path.display());

    let buffer = load_audio(path, sample_rate, range)?;
    let summary = LoadSummary::new(path, &buffer);

    if let Some(output) = output {
        save_wav(&buffer, output)?;
        info!("Wrote {} frames to {}", buffer.num_frames(), output.display());
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("File: {}", summary.path);
        println!("Channels: {}", summary.channels);
        println!("Sample rate: {} Hz", summary.sample_rate);
        println!("Frames: {}", summary.frames);
        println!("Duration: {:.3}s", summary.duration_secs);
        println!("Peak: {:.4}", summary.peak);
    }

    Ok(summary)
}
