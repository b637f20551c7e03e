//! Periodic waveform generators.
//!
//! Phases are measured in cycles, so `0.0..1.0` covers one period.

use std::f64::consts::TAU;

/// Waveform of a voice partial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Waveform {
    /// Sine wave.
    Sine,
    /// Triangle wave, rising from zero at phase 0.
    Triangle,
}

impl Waveform {
    /// Value of the waveform at `phase` cycles, in `[-1.0, 1.0]`.
    pub fn sample(&self, phase: f64) -> f64 {
        match self {
            Waveform::Sine => sine(phase),
            Waveform::Triangle => triangle(phase),
        }
    }
}

/// Sine of a phase given in cycles.
pub fn sine(phase: f64) -> f64 {
    (phase * TAU).sin()
}

/// Triangle wave of a phase given in cycles.
pub fn triangle(phase: f64) -> f64 {
    let p = phase.rem_euclid(1.0);
    if p < 0.25 {
        4.0 * p
    } else if p < 0.75 {
        2.0 - 4.0 * p
    } else {
        4.0 * p - 4.0
    }
}

/// Phase in cycles reached after `elapsed` seconds at `frequency` Hz.
pub fn phase_at(frequency: f64, elapsed: f64) -> f64 {
    (frequency * elapsed).rem_euclid(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sine_quarter_points() {
        assert!(sine(0.0).abs() < 1e-12);
        assert!((sine(0.25) - 1.0).abs() < 1e-12);
        assert!(sine(0.5).abs() < 1e-12);
        assert!((sine(0.75) + 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_triangle_shape() {
        assert_eq!(triangle(0.0), 0.0);
        assert_eq!(triangle(0.25), 1.0);
        assert_eq!(triangle(0.5), 0.0);
        assert_eq!(triangle(0.75), -1.0);
        assert!((triangle(0.125) - 0.5).abs() < 1e-12);
        assert!((triangle(1.125) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_waveforms_stay_in_range() {
        for i in 0..1000 {
            let phase = i as f64 / 997.0;
            for waveform in [Waveform::Sine, Waveform::Triangle] {
                let v = waveform.sample(phase);
                assert!((-1.0..=1.0).contains(&v));
            }
        }
    }

    #[test]
    fn test_phase_at_wraps() {
        assert!((phase_at(440.0, 1.0 / 880.0) - 0.5).abs() < 1e-9);
        assert!(phase_at(440.0, 1.0) < 1e-9);
    }
}
