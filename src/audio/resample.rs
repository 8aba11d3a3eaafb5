//! Sample rate conversion
//!
//! Uses per-channel linear interpolation. Output length is
//! `ceil(frames * target_rate / source_rate)`.

use crate::audio::AudioBuffer;
use crate::error::{Result, WavscanError};

/// Resample a buffer to `target_rate`.
///
/// Returns a copy when the rates already match.
pub fn resample(buffer: &AudioBuffer, target_rate: u32) -> Result<AudioBuffer> {
    if target_rate == 0 {
        return Err(WavscanError::InvalidSampleRate { rate: target_rate });
    }

    let source_rate = buffer.sample_rate();
    if source_rate == target_rate {
        return Ok(buffer.clone());
    }

    let resampled: Vec<Vec<f32>> = buffer
        .to_channels()
        .iter()
        .map(|channel| resample_linear(channel, source_rate, target_rate))
        .collect();

    AudioBuffer::from_channels(&resampled, target_rate)
}

/// Linear interpolation resampling of a single channel
fn resample_linear(samples: &[f32], source_rate: u32, target_rate: u32) -> Vec<f32> {
    if samples.is_empty() {
        return Vec::new();
    }

    let source_len = samples.len();
    let target_len = output_length(source_len, source_rate, target_rate);
    let step = source_rate as f64 / target_rate as f64;
    let mut output = Vec::with_capacity(target_len);

    for i in 0..target_len {
        // Map output index to source position
        let src_pos = i as f64 * step;
        let src_idx = src_pos.floor() as usize;
        let frac = (src_pos - src_idx as f64) as f32;

        let sample = if src_idx + 1 < source_len {
            samples[src_idx] * (1.0 - frac) + samples[src_idx + 1] * frac
        } else if src_idx < source_len {
            samples[src_idx]
        } else {
            samples[source_len - 1]
        };

        output.push(sample);
    }

    output
}

/// `ceil(frames * target / source)` in integer arithmetic
fn output_length(frames: usize, source_rate: u32, target_rate: u32) -> usize {
    let numerator = frames as u64 * target_rate as u64;
    let source = source_rate as u64;
    ((numerator + source - 1) / source) as usize
}
