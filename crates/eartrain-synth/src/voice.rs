//! A single scheduled tone.
//!
//! A voice is the private synthesis graph of one `play` call: two partials
//! mixed through their own gains, then shaped by the voice's envelope.

use crate::envelope::{AdsrParams, GainTimeline};
use crate::oscillator::{phase_at, Waveform};

/// Gain of the fundamental (sine) partial.
pub const FUNDAMENTAL_GAIN: f64 = 0.6;

/// Gain of the octave (triangle) partial.
pub const OCTAVE_GAIN: f64 = 0.15;

/// Time the generators keep running after the nominal end of the tone.
pub const STOP_TAIL: f64 = 0.1;

/// One oscillator with its mix gain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Partial {
    /// Waveform of the oscillator.
    pub waveform: Waveform,
    /// Frequency in Hz.
    pub frequency: f64,
    /// Mix gain applied before the envelope.
    pub gain: f64,
}

/// A tone scheduled at absolute times on the output bus.
#[derive(Debug, Clone, PartialEq)]
pub struct Voice {
    partials: [Partial; 2],
    envelope: GainTimeline,
    start: f64,
    duration: f64,
    stop: f64,
}

impl Voice {
    /// Builds the two-partial tone for `frequency`, starting at absolute
    /// time `start` and lasting `duration` seconds.
    pub fn tone(frequency: f64, start: f64, duration: f64, params: &AdsrParams) -> Self {
        let duration = duration.max(0.0);
        Self {
            partials: [
                Partial {
                    waveform: Waveform::Sine,
                    frequency,
                    gain: FUNDAMENTAL_GAIN,
                },
                Partial {
                    waveform: Waveform::Triangle,
                    frequency: frequency * 2.0,
                    gain: OCTAVE_GAIN,
                },
            ],
            envelope: params.timeline(start, duration),
            start,
            duration,
            stop: start + duration + STOP_TAIL,
        }
    }

    /// Fundamental frequency in Hz.
    pub fn frequency(&self) -> f64 {
        self.partials[0].frequency
    }

    /// The voice's partials.
    pub fn partials(&self) -> &[Partial; 2] {
        &self.partials
    }

    /// The voice's gain automation.
    pub fn envelope(&self) -> &GainTimeline {
        &self.envelope
    }

    /// Absolute start time in seconds.
    pub fn start(&self) -> f64 {
        self.start
    }

    /// Nominal duration in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Absolute time the generators stop.
    pub fn stop(&self) -> f64 {
        self.stop
    }

    /// Returns true if the generators are running at time `t`.
    pub fn is_sounding(&self, t: f64) -> bool {
        t >= self.start && t < self.stop
    }

    /// Output sample at absolute time `t`; silent outside the running window.
    pub fn sample_at(&self, t: f64) -> f64 {
        if !self.is_sounding(t) {
            return 0.0;
        }
        let elapsed = t - self.start;
        let mix: f64 = self
            .partials
            .iter()
            .map(|p| p.waveform.sample(phase_at(p.frequency, elapsed)) * p.gain)
            .sum();
        mix * self.envelope.value_at(t)
    }
}
