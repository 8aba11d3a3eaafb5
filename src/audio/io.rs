//! Audio file I/O operations
//!
//! Decodes WAV files with the hound crate, optionally restricted to a range
//! of frames, and writes buffers back out as 32-bit float WAV.

use std::io::Read;
use std::path::Path;

use hound::{SampleFormat, WavReader, WavSpec, WavWriter};
use log::debug;

use crate::audio::AudioBuffer;
use crate::error::{Result, WavscanError};

/// A range of frames to read from a file.
///
/// Follows slice semantics over the file's frames: negative positions count
/// back from the end, positions past either end are clamped, and a `stop`
/// at or before `start` selects nothing. `stop: None` reads to the end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameRange {
    pub start: i64,
    pub stop: Option<i64>,
}

impl FrameRange {
    /// The whole file
    pub fn full() -> Self {
        Self::default()
    }

    pub fn new(start: i64, stop: Option<i64>) -> Self {
        FrameRange { start, stop }
    }

    /// Resolve against a file of `total_frames` frames, giving the
    /// half-open frame interval `(start, stop)` with `start <= stop`.
    pub fn resolve(&self, total_frames: u64) -> (u64, u64) {
        let start = clamp_position(self.start, total_frames);
        let stop = self
            .stop
            .map_or(total_frames, |stop| clamp_position(stop, total_frames));
        (start, stop.max(start))
    }
}

fn clamp_position(position: i64, total_frames: u64) -> u64 {
    if position < 0 {
        total_frames.saturating_sub(position.unsigned_abs())
    } else {
        (position as u64).min(total_frames)
    }
}

/// Decode a WAV file, or a frame range of it, into an AudioBuffer.
///
/// Integer PCM (8, 16, 24, 32-bit) is scaled to -1.0..1.0; 32-bit float
/// is passed through. The buffer keeps the file's sample rate.
pub fn decode<P: AsRef<Path>>(path: P, range: FrameRange) -> Result<AudioBuffer> {
    let path = path.as_ref();
    let mut reader = WavReader::open(path).map_err(|e| read_error(path, e))?;

    let spec = reader.spec();
    let total_frames = u64::from(reader.duration());
    let (start, stop) = range.resolve(total_frames);
    let frame_count = (stop - start) as usize;

    debug!(
        "Decoding {}: {} Hz, {} ch, {}-bit {:?}, frames {}..{} of {}",
        path.display(),
        spec.sample_rate,
        spec.channels,
        spec.bits_per_sample,
        spec.sample_format,
        start,
        stop,
        total_frames
    );

    let kind = SampleKind::from_spec(&spec)?;

    if start > 0 {
        // start <= total_frames, which hound reports as u32
        reader.seek(start as u32)?;
    }

    let samples = read_samples_as_f32(
        &mut reader,
        kind,
        frame_count * spec.channels as usize,
        path,
    )?;

    AudioBuffer::new(samples, spec.channels, spec.sample_rate)
}

/// Save an AudioBuffer to a WAV file (32-bit float)
pub fn save_wav<P: AsRef<Path>>(buffer: &AudioBuffer, path: P) -> Result<()> {
    let path = path.as_ref();
    let spec = WavSpec {
        channels: buffer.channels(),
        sample_rate: buffer.sample_rate(),
        bits_per_sample: 32,
        sample_format: SampleFormat::Float,
    };

    let mut writer = WavWriter::create(path, spec).map_err(|e| write_error(path, e))?;

    for &sample in buffer.samples() {
        writer
            .write_sample(sample)
            .map_err(|e| write_error(path, e))?;
    }

    writer.finalize().map_err(|e| write_error(path, e))?;

    Ok(())
}

// ============================================================================
// Internal helper functions
// ============================================================================

/// Sample encodings the decoder can scale to f32
#[derive(Debug, Clone, Copy, PartialEq)]
enum SampleKind {
    Float,
    Int8,
    Int16,
    /// 24-bit stored as i32 in hound
    Int24,
    Int32,
}

impl SampleKind {
    fn from_spec(spec: &WavSpec) -> Result<Self> {
        match (spec.sample_format, spec.bits_per_sample) {
            (SampleFormat::Float, 32) => Ok(SampleKind::Float),
            (SampleFormat::Int, 8) => Ok(SampleKind::Int8),
            (SampleFormat::Int, 16) => Ok(SampleKind::Int16),
            (SampleFormat::Int, 24) => Ok(SampleKind::Int24),
            (SampleFormat::Int, 32) => Ok(SampleKind::Int32),
            (format, bits) => Err(WavscanError::UnsupportedFormat {
                details: format!("{}-bit {:?} audio", bits, format),
            }),
        }
    }
}

/// Read up to `count` samples from the reader's current position as f32
fn read_samples_as_f32<R: Read>(
    reader: &mut WavReader<R>,
    kind: SampleKind,
    count: usize,
    path: &Path,
) -> Result<Vec<f32>> {
    match kind {
        SampleKind::Float => collect_samples(reader.samples::<f32>().take(count), path),
        SampleKind::Int8 => collect_samples(
            reader
                .samples::<i8>()
                .take(count)
                .map(|s| s.map(|v| v as f32 / 128.0)),
            path,
        ),
        SampleKind::Int16 => collect_samples(
            reader
                .samples::<i16>()
                .take(count)
                .map(|s| s.map(|v| v as f32 / 32768.0)),
            path,
        ),
        SampleKind::Int24 => collect_samples(
            reader
                .samples::<i32>()
                .take(count)
                .map(|s| s.map(|v| v as f32 / 8388608.0)),
            path,
        ),
        SampleKind::Int32 => collect_samples(
            reader
                .samples::<i32>()
                .take(count)
                .map(|s| s.map(|v| v as f32 / 2147483648.0)),
            path,
        ),
    }
}

fn collect_samples<I>(samples: I, path: &Path) -> Result<Vec<f32>>
where
    I: Iterator<Item = hound::Result<f32>>,
{
    samples
        .collect::<std::result::Result<Vec<f32>, _>>()
        .map_err(|e| read_error(path, e))
}

fn read_error(path: &Path, source: hound::Error) -> WavscanError {
    WavscanError::AudioReadError {
        path: path.display().to_string(),
        source,
    }
}

fn write_error(path: &Path, source: hound::Error) -> WavscanError {
    WavscanError::AudioWriteError {
        path: path.display().to_string(),
        source,
    }
}

// ============================================================================
// Tests
// ============================================================================
