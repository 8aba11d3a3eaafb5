//! Audio buffer and I/O utilities
//!
//! This module provides the decoded audio type, WAV decoding and writing,
//! resampling, and the combined loader.

mod buffer;
pub mod io;
pub mod loader;
pub mod resample;

pub use buffer::AudioBuffer;
pub use io::{decode, save_wav, FrameRange};
pub use loader::load_audio;
pub use resample::resample;
