//! Scale families and directional stage variants.

use serde::{Deserialize, Serialize};

use super::descriptor::ScaleDirection;
use super::pitch_set::PitchClassSet;

/// The four scale families, in stage progression order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleFamily {
    /// A minor pentatonic.
    Pentatonic,
    /// A natural minor.
    NaturalMinor,
    /// A harmonic minor.
    HarmonicMinor,
    /// All twelve pitch classes.
    Chromatic,
}

impl ScaleFamily {
    /// All families in progression order.
    pub const ALL: [ScaleFamily; 4] = [
        ScaleFamily::Pentatonic,
        ScaleFamily::NaturalMinor,
        ScaleFamily::HarmonicMinor,
        ScaleFamily::Chromatic,
    ];

    /// Id prefix used in stage ids.
    pub fn prefix(&self) -> &'static str {
        match self {
            ScaleFamily::Pentatonic => "penta",
            ScaleFamily::NaturalMinor => "minor",
            ScaleFamily::HarmonicMinor => "harmonic",
            ScaleFamily::Chromatic => "chromatic",
        }
    }

    /// Display name of the scale.
    pub fn name(&self) -> &'static str {
        match self {
            ScaleFamily::Pentatonic => "A Minor Pentatonic",
            ScaleFamily::NaturalMinor => "A Natural Minor",
            ScaleFamily::HarmonicMinor => "A Harmonic Minor",
            ScaleFamily::Chromatic => "Chromatic",
        }
    }

    /// Tonic pitch class. Every family is rooted on A.
    pub fn root(&self) -> i32 {
        9
    }

    /// Offsets from the root that belong to the scale.
    pub fn semitones(&self) -> PitchClassSet {
        match self {
            ScaleFamily::Pentatonic => PitchClassSet::from_offsets(&[0, 3, 5, 7, 10]),
            ScaleFamily::NaturalMinor => PitchClassSet::from_offsets(&[0, 2, 3, 5, 7, 8, 10]),
            ScaleFamily::HarmonicMinor => PitchClassSet::from_offsets(&[0, 2, 3, 5, 7, 8, 11]),
            ScaleFamily::Chromatic => PitchClassSet::CHROMATIC,
        }
    }

    /// Looks a family up by its id prefix.
    pub fn from_prefix(prefix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.prefix() == prefix)
    }
}

/// Direction and root constraint applied to a scale within one octave span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageVariant {
    /// Ascending, always starting from the tonic.
    RootUp,
    /// Ascending from any scale note.
    AnyUp,
    /// Descending from any scale note.
    Down,
    /// Either direction, chosen per question.
    Both,
}

impl StageVariant {
    /// All variants in progression order.
    pub const ALL: [StageVariant; 4] = [
        StageVariant::RootUp,
        StageVariant::AnyUp,
        StageVariant::Down,
        StageVariant::Both,
    ];

    /// Id suffix used in stage ids.
    pub fn suffix(&self) -> &'static str {
        match self {
            StageVariant::RootUp => "root-up",
            StageVariant::AnyUp => "any-up",
            StageVariant::Down => "down",
            StageVariant::Both => "both",
        }
    }

    /// Direction constraint of the variant.
    pub fn direction(&self) -> ScaleDirection {
        match self {
            StageVariant::RootUp | StageVariant::AnyUp => ScaleDirection::Up,
            StageVariant::Down => ScaleDirection::Down,
            StageVariant::Both => ScaleDirection::Both,
        }
    }

    /// Whether the first note must be a tonic.
    pub fn start_from_root(&self) -> bool {
        matches!(self, StageVariant::RootUp)
    }

    /// Looks a variant up by its id suffix.
    pub fn from_suffix(suffix: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.suffix() == suffix)
    }
}
