//! Error types for the synthesizer.

use thiserror::Error;

/// Result type for synthesizer operations.
pub type SynthResult<T> = Result<T, SynthError>;

/// Errors that can occur while rendering or encoding audio.
///
/// Scheduling itself never fails; these cover offline rendering setup and
/// file output.
#[derive(Debug, Error)]
pub enum SynthError {
    /// Invalid sample rate.
    #[error("invalid sample rate: {rate}")]
    InvalidSampleRate {
        /// The invalid sample rate.
        rate: u32,
    },

    /// Invalid frequency.
    #[error("invalid frequency: {freq} Hz")]
    InvalidFrequency {
        /// The invalid frequency.
        freq: f64,
    },

    /// Unrecognised playback mode name.
    #[error("unknown playback mode '{name}' (expected 'melodic' or 'harmonic')")]
    UnknownPlaybackMode {
        /// The name that failed to parse.
        name: String,
    },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SynthError {
    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            SynthError::InvalidSampleRate { .. } => "SYNTH_001",
            SynthError::InvalidFrequency { .. } => "SYNTH_002",
            SynthError::Io(_) => "SYNTH_003",
            SynthError::UnknownPlaybackMode { .. } => "SYNTH_004",
        }
    }

    /// Error category for grouping related errors.
    pub fn category(&self) -> &'static str {
        "synth"
    }
}
