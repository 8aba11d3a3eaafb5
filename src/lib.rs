//! wavscan - Audio File Discovery and Loading
//!
//! wavscan finds audio files under a set of roots and loads their samples:
//! 1. Discovery - resolve mixed file/directory inputs into a deterministic,
//!    sorted list of matching files
//! 2. Loading - decode a file (or a frame range of it) and optionally
//!    resample it to a target rate
//!
//! ```no_run
//! use wavscan::{find_audio_files_in_paths, load_audio, DiscoveryOptions, FrameRange};
//!
//! let files = find_audio_files_in_paths(["recordings", "extra/take.wav"], &DiscoveryOptions::default())?;
//! for file in &files {
//!     let audio = load_audio(file, Some(16000), FrameRange::full())?;
//!     println!("{}: {} frames", file.display(), audio.num_frames());
//! }
//! # Ok::<(), wavscan::WavscanError>(())
//! ```

pub mod audio;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;

pub use audio::{load_audio, AudioBuffer, FrameRange};
pub use config::{DiscoveryOptions, SUPPORTED_EXTENSIONS};
pub use discovery::{find_audio_files, find_audio_files_in_path, find_audio_files_in_paths};
pub use error::{Result, WavscanError};
