//! Eartrain Tone Synthesizer
//!
//! Renders interval questions as sound. Each call to [`ToneSynth::play`]
//! builds a private voice (a sine partial at the requested frequency plus a
//! quieter triangle partial an octave above, shaped by an ADSR gain timeline)
//! and schedules it on a shared [`AudioOutput`] bus.
//!
//! # Scheduling model
//!
//! Nothing blocks. `play` and `play_pair` only enqueue voices with absolute
//! start and stop times relative to the bus clock. The bus clock advances as
//! samples are rendered, and a voice is dropped once its stop time has
//! passed. Overlapping calls never share state.
//!
//! The bus starts suspended: voices can be scheduled but render as silence
//! until [`AudioOutput::resume`] completes. Resuming is idempotent.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use eartrain_synth::{AudioOutput, PlaybackMode, ToneSynth};
//!
//! let output = Arc::new(AudioOutput::running(8000));
//! let synth = ToneSynth::new(output.clone());
//! synth.play_pair(440.0, 554.37, PlaybackMode::Melodic);
//!
//! let samples = output.render(PlaybackMode::Melodic.total_duration());
//! assert!(samples.iter().any(|s| s.abs() > 0.1));
//! ```
//!
//! # Crate Structure
//!
//! - [`oscillator`] - Sine and triangle waveforms
//! - [`envelope`] - ADSR parameters and the gain automation timeline
//! - [`voice`] - One scheduled tone
//! - [`output`] - The shared, lazily created output bus
//! - [`tone`] - `play` / `play_pair` scheduling and offline rendering
//! - [`wav`] - 16-bit PCM WAV encoding

pub mod envelope;
pub mod error;
pub mod oscillator;
pub mod output;
pub mod tone;
pub mod voice;
pub mod wav;

// Re-export main types at crate root
pub use envelope::{AdsrParams, GainTimeline};
pub use error::{SynthError, SynthResult};
pub use output::{AudioOutput, OutputState, DEFAULT_SAMPLE_RATE};
pub use tone::{render_pair, render_question, PlaybackMode, ToneSchedule, ToneSynth};
pub use voice::Voice;
pub use wav::WavResult;
