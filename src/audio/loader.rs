//! Audio loading
//!
//! Decodes a file (optionally a frame range of it) and resamples the result
//! when a different target rate is requested.

use std::path::Path;

use log::debug;

use crate::audio::io::{decode, FrameRange};
use crate::audio::resample::resample;
use crate::audio::AudioBuffer;
use crate::error::{Result, WavscanError};

/// Load an audio file.
///
/// `range` selects frames of the source file before any resampling. When
/// `sample_rate` is given the returned buffer is converted to it; otherwise
/// it keeps the file's own rate. Either way the buffer reports its rate.
pub fn load_audio<P: AsRef<Path>>(
    path: P,
    sample_rate: Option<u32>,
    range: FrameRange,
) -> Result<AudioBuffer> {
    let path = path.as_ref();

    if sample_rate == Some(0) {
        return Err(WavscanError::InvalidSampleRate { rate: 0 });
    }

    let buffer = decode(path, range)?;

    match sample_rate {
        Some(target) if target != buffer.sample_rate() => {
            debug!(
                "Resampling {} from {} Hz to {} Hz",
                path.display(),
                buffer.sample_rate(),
                target
            );
            resample(&buffer, target)
        }
        _ => Ok(buffer),
    }
}
