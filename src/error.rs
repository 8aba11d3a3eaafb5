//! Error handling for wavscan
//!
//! Discovery itself is permissive and almost never fails; the errors here
//! come from decoding, writing, and configuration loading.

use thiserror::Error;

/// Result type alias for wavscan operations
pub type Result<T> = std::result::Result<T, WavscanError>;

/// Main error type for wavscan operations
#[derive(Error, Debug)]
pub enum WavscanError {
    // Audio I/O errors
    #[error("Failed to read audio file: {path}")]
    AudioReadError {
        path: String,
        #[source]
        source: hound::Error,
    },

    #[error("Failed to write audio file: {path}")]
    AudioWriteError {
        path: String,
        #[source]
        source: hound::Error,
    },

    #[error("Unsupported audio format: {details}")]
    UnsupportedFormat { details: String },

    #[error("Invalid sample rate: {rate} Hz")]
    InvalidSampleRate { rate: u32 },

    // Generic I/O
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl WavscanError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::AudioReadError { .. } => "AUDIO_READ_ERROR",
            Self::AudioWriteError { .. } => "AUDIO_WRITE_ERROR",
            Self::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            Self::InvalidSampleRate { .. } => "INVALID_SAMPLE_RATE",
            Self::IoError(_) => "IO_ERROR",
            Self::SerializationError(_) => "SERIALIZATION_ERROR",
        }
    }

    /// Returns a suggested recovery action for this error
    pub fn recovery_hint(&self) -> &'static str {
        match self {
            Self::AudioReadError { .. } => "Check that the file exists and is a valid WAV file",
            Self::AudioWriteError { .. } => "Check that the output directory exists and is writable",
            Self::UnsupportedFormat { .. } => "Convert to WAV format (8/16/24/32-bit PCM or 32-bit float)",
            Self::InvalidSampleRate { .. } => "Use a positive target sample rate such as 16000 or 44100",
            Self::SerializationError(_) => "Check the config file is valid JSON",
            _ => "Check the error details and try again",
        }
    }
}
