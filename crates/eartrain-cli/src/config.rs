//! Trainer configuration.
//!
//! A [`TrainerConfig`] comes from an optional JSON file; command-line flags
//! are applied on top with the `with_*` methods, and the result is checked
//! with [`TrainerConfig::validate`] before any command runs.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use eartrain_synth::{PlaybackMode, DEFAULT_SAMPLE_RATE};
use eartrain_theory::{NoteRange, DEFAULT_CHROMATIC_MAX, DEFAULT_CHROMATIC_MIN};
use serde::{Deserialize, Serialize};

/// Lowest MIDI note of the default stage range (A3).
pub const DEFAULT_RANGE_START: i32 = 57;

/// Highest MIDI note of the default stage range (A5).
pub const DEFAULT_RANGE_END: i32 = 81;

const MIDI_MAX: i32 = 127;

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrainerConfig {
    /// Lowest MIDI note for stage questions.
    pub range_start: i32,
    /// Highest MIDI note for stage questions.
    pub range_end: i32,
    /// Lowest base note for chromatic questions.
    pub chromatic_min: i32,
    /// Highest base note for chromatic questions.
    pub chromatic_max: i32,
    /// How question pairs are played.
    pub playback: PlaybackMode,
    /// Sample rate for rendered audio.
    pub sample_rate: u32,
    /// Fixed seed; a random one is drawn when absent.
    pub seed: Option<u32>,
    /// Complete each stage after a single correct answer.
    pub test_mode: bool,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            range_start: DEFAULT_RANGE_START,
            range_end: DEFAULT_RANGE_END,
            chromatic_min: DEFAULT_CHROMATIC_MIN,
            chromatic_max: DEFAULT_CHROMATIC_MAX,
            playback: PlaybackMode::Melodic,
            sample_rate: DEFAULT_SAMPLE_RATE,
            seed: None,
            test_mode: false,
        }
    }
}

impl TrainerConfig {
    /// Parses a configuration from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).context("Failed to parse trainer config")
    }

    /// Reads a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_json_str(&text)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Reads `path` if given, otherwise returns the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Overrides the stage range bounds that are given.
    pub fn with_range(mut self, start: Option<i32>, end: Option<i32>) -> Self {
        self.range_start = start.unwrap_or(self.range_start);
        self.range_end = end.unwrap_or(self.range_end);
        self
    }

    /// Overrides the chromatic bounds that are given.
    pub fn with_chromatic(mut self, min: Option<i32>, max: Option<i32>) -> Self {
        self.chromatic_min = min.unwrap_or(self.chromatic_min);
        self.chromatic_max = max.unwrap_or(self.chromatic_max);
        self
    }

    /// Overrides the seed if one is given.
    pub fn with_seed(mut self, seed: Option<u32>) -> Self {
        self.seed = seed.or(self.seed);
        self
    }

    /// Overrides the playback mode if one is given.
    pub fn with_playback(mut self, playback: Option<PlaybackMode>) -> Self {
        self.playback = playback.unwrap_or(self.playback);
        self
    }

    /// Stage question range.
    pub fn range(&self) -> NoteRange {
        NoteRange::new(self.range_start, self.range_end)
    }

    /// Checks bounds and the sample rate.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("range_start", self.range_start),
            ("range_end", self.range_end),
            ("chromatic_min", self.chromatic_min),
            ("chromatic_max", self.chromatic_max),
        ] {
            if !(0..=MIDI_MAX).contains(&value) {
                bail!("{} must be a MIDI note in 0..={}, got {}", field, MIDI_MAX, value);
            }
        }
        if self.range_start > self.range_end {
            bail!(
                "range_start ({}) must not exceed range_end ({})",
                self.range_start,
                self.range_end
            );
        }
        if self.sample_rate == 0 {
            bail!("sample_rate must be positive");
        }
        Ok(())
    }

    /// The configured seed, or a freshly drawn one.
    pub fn resolve_seed(&self) -> u32 {
        match self.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random();
                log::info!("no seed configured, using {}", seed);
                seed
            }
        }
    }
}
