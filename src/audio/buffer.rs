//! Audio buffer implementation
//!
//! AudioBuffer holds decoded samples together with the rate they were
//! sampled at. It is produced once per load and owned by the caller.

use crate::error::{Result, WavscanError};

/// Audio sample data with metadata
#[derive(Debug, Clone, PartialEq)]
pub struct AudioBuffer {
    /// Interleaved audio samples normalized to -1.0..1.0
    samples: Vec<f32>,
    /// Number of audio channels (1 = mono, 2 = stereo)
    channels: u16,
    /// Sample rate in Hz
    sample_rate: u32,
}

impl AudioBuffer {
    /// Create a new audio buffer from interleaved samples.
    ///
    /// An empty sample vector is allowed and describes zero frames.
    pub fn new(samples: Vec<f32>, channels: u16, sample_rate: u32) -> Result<Self> {
        if channels == 0 {
            return Err(WavscanError::UnsupportedFormat {
                details: "audio with zero channels".to_string(),
            });
        }
        if sample_rate == 0 {
            return Err(WavscanError::InvalidSampleRate { rate: sample_rate });
        }
        if samples.len() % channels as usize != 0 {
            return Err(WavscanError::UnsupportedFormat {
                details: format!(
                    "Sample count {} is not divisible by channel count {}",
                    samples.len(),
                    channels
                ),
            });
        }
        Ok(Self {
            samples,
            channels,
            sample_rate,
        })
    }

    /// Build a buffer from per-channel sample vectors of equal length
    pub fn from_channels(channel_data: &[Vec<f32>], sample_rate: u32) -> Result<Self> {
        let channels = u16::try_from(channel_data.len()).map_err(|_| {
            WavscanError::UnsupportedFormat {
                details: format!("{} channels", channel_data.len()),
            }
        })?;
        let frames = channel_data.first().map_or(0, Vec::len);
        if channel_data.iter().any(|ch| ch.len() != frames) {
            return Err(WavscanError::UnsupportedFormat {
                details: "channels have different lengths".to_string(),
            });
        }

        let mut samples = Vec::with_capacity(frames * channel_data.len());
        for frame in 0..frames {
            for channel in channel_data {
                samples.push(channel[frame]);
            }
        }

        Self::new(samples, channels, sample_rate)
    }

    /// Create a sine wave test tone
    pub fn sine_wave(frequency: f32, duration_secs: f32, sample_rate: u32) -> Self {
        let num_samples = (duration_secs * sample_rate as f32) as usize;
        let angular_freq = 2.0 * std::f32::consts::PI * frequency / sample_rate as f32;

        let samples = (0..num_samples)
            .map(|i| (angular_freq * i as f32).sin())
            .collect();

        Self {
            samples,
            channels: 1,
            sample_rate,
        }
    }

    /// Get a reference to the interleaved samples
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Get the number of channels
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Get the sample rate
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Get the number of frames (samples per channel)
    pub fn num_frames(&self) -> usize {
        self.samples.len() / self.channels as usize
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Get the duration in seconds
    pub fn duration(&self) -> f64 {
        self.num_frames() as f64 / self.sample_rate as f64
    }

    /// Get samples for a specific channel (0-indexed)
    pub fn channel_samples(&self, channel: u16) -> Vec<f32> {
        if channel >= self.channels {
            return Vec::new();
        }
        self.samples
            .iter()
            .skip(channel as usize)
            .step_by(self.channels as usize)
            .copied()
            .collect()
    }

    /// Split into one vector per channel
    pub fn to_channels(&self) -> Vec<Vec<f32>> {
        (0..self.channels).map(|ch| self.channel_samples(ch)).collect()
    }

    /// Peak absolute sample value (0.0 for an empty buffer)
    pub fn peak(&self) -> f32 {
        self.samples.iter().map(|s| s.abs()).fold(0.0, f32::max)
    }
}
