//! Tone scheduling and offline rendering.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use eartrain_theory::Question;
use serde::{Deserialize, Serialize};

use crate::envelope::AdsrParams;
use crate::error::{SynthError, SynthResult};
use crate::output::AudioOutput;
use crate::voice::{Voice, STOP_TAIL};

/// Duration of a single [`ToneSynth::play_note`].
pub const DEFAULT_TONE_DURATION: f64 = 0.8;

/// Duration of each tone in a melodic pair.
pub const MELODIC_TONE_DURATION: f64 = 0.7;

/// Offset of the second tone in a melodic pair.
pub const MELODIC_SECOND_OFFSET: f64 = 0.75;

/// Duration of both tones in a harmonic pair.
pub const HARMONIC_TONE_DURATION: f64 = 1.2;

/// How the two notes of a question are played.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackMode {
    /// One after the other.
    #[default]
    Melodic,
    /// Both at once.
    Harmonic,
}

impl PlaybackMode {
    /// The two tones played for `freq1` and `freq2`, with offsets relative to now.
    pub fn schedule(self, freq1: f64, freq2: f64) -> [ToneSchedule; 2] {
        match self {
            PlaybackMode::Melodic => [
                ToneSchedule::new(freq1, 0.0, MELODIC_TONE_DURATION),
                ToneSchedule::new(freq2, MELODIC_SECOND_OFFSET, MELODIC_TONE_DURATION),
            ],
            PlaybackMode::Harmonic => [
                ToneSchedule::new(freq1, 0.0, HARMONIC_TONE_DURATION),
                ToneSchedule::new(freq2, 0.0, HARMONIC_TONE_DURATION),
            ],
        }
    }

    /// Time from the first onset until the last generator stops.
    pub fn total_duration(self) -> f64 {
        self.schedule(0.0, 0.0)
            .iter()
            .map(|tone| tone.start + tone.duration + STOP_TAIL)
            .fold(0.0, f64::max)
    }
}

impl fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            PlaybackMode::Melodic => "melodic",
            PlaybackMode::Harmonic => "harmonic",
        })
    }
}

impl FromStr for PlaybackMode {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "melodic" => Ok(PlaybackMode::Melodic),
            "harmonic" => Ok(PlaybackMode::Harmonic),
            other => Err(SynthError::UnknownPlaybackMode {
                name: other.to_string(),
            }),
        }
    }
}

/// When and how long a tone plays.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ToneSchedule {
    /// Frequency in Hz.
    pub frequency: f64,
    /// Start time in seconds (an offset, or an absolute bus time for voices).
    pub start: f64,
    /// Nominal duration in seconds.
    pub duration: f64,
}

impl ToneSchedule {
    /// Creates a schedule entry.
    pub fn new(frequency: f64, start: f64, duration: f64) -> Self {
        Self {
            frequency,
            start,
            duration,
        }
    }
}

impl From<&Voice> for ToneSchedule {
    fn from(voice: &Voice) -> Self {
        Self::new(voice.frequency(), voice.start(), voice.duration())
    }
}

/// Schedules tones on an [`AudioOutput`].
///
/// Every call builds its own [`Voice`]; the synth keeps no per-tone state.
#[derive(Debug, Clone)]
pub struct ToneSynth {
    output: Arc<AudioOutput>,
    params: AdsrParams,
}

impl ToneSynth {
    /// Creates a synth that plays into `output`.
    pub fn new(output: Arc<AudioOutput>) -> Self {
        Self {
            output,
            params: AdsrParams::default(),
        }
    }

    /// Creates a synth on the process-wide output.
    pub fn shared() -> Self {
        Self::new(AudioOutput::shared())
    }

    /// Replaces the envelope parameters used for subsequent tones.
    pub fn with_envelope(mut self, params: AdsrParams) -> Self {
        self.params = params;
        self
    }

    /// The output this synth plays into.
    pub fn output(&self) -> &Arc<AudioOutput> {
        &self.output
    }

    /// Envelope parameters applied to every tone.
    pub fn envelope(&self) -> &AdsrParams {
        &self.params
    }

    /// Schedules a tone `start_offset` seconds from the current bus time.
    pub fn play(&self, frequency: f64, duration: f64, start_offset: f64) {
        let start = self.output.current_time() + start_offset;
        self.output
            .schedule(Voice::tone(frequency, start, duration, &self.params));
    }

    /// Schedules a tone of the default duration right now.
    pub fn play_note(&self, frequency: f64) {
        self.play(frequency, DEFAULT_TONE_DURATION, 0.0);
    }

    /// Schedules two tones according to `mode`.
    pub fn play_pair(&self, freq1: f64, freq2: f64, mode: PlaybackMode) {
        log::debug!("play_pair {:.2} Hz / {:.2} Hz ({})", freq1, freq2, mode);
        for tone in mode.schedule(freq1, freq2) {
            self.play(tone.frequency, tone.duration, tone.start);
        }
    }

    /// Schedules both notes of a question.
    pub fn play_question(&self, question: &Question, mode: PlaybackMode) {
        self.play_pair(question.base_frequency(), question.second_frequency(), mode);
    }

    /// Resumes the underlying output.
    pub async fn resume(&self) {
        self.output.resume().await;
    }
}

fn check_frequency(freq: f64) -> SynthResult<()> {
    if freq.is_finite() && freq > 0.0 {
        Ok(())
    } else {
        Err(SynthError::InvalidFrequency { freq })
    }
}

/// Renders a pair of tones to a standalone mono buffer.
///
/// The buffer covers the full schedule including the stop tail.
pub fn render_pair(
    freq1: f64,
    freq2: f64,
    mode: PlaybackMode,
    sample_rate: u32,
) -> SynthResult<Vec<f64>> {
    if sample_rate == 0 {
        return Err(SynthError::InvalidSampleRate { rate: sample_rate });
    }
    check_frequency(freq1)?;
    check_frequency(freq2)?;

    let output = Arc::new(AudioOutput::running(sample_rate));
    let synth = ToneSynth::new(output.clone());
    synth.play_pair(freq1, freq2, mode);
    Ok(output.render(mode.total_duration()))
}

/// Renders a question's two notes to a standalone mono buffer.
pub fn render_question(
    question: &Question,
    mode: PlaybackMode,
    sample_rate: u32,
) -> SynthResult<Vec<f64>> {
    render_pair(
        question.base_frequency(),
        question.second_frequency(),
        mode,
        sample_rate,
    )
}
