//! Scale descriptors and in-range note enumeration.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::pitch::pitch_class;

use super::family::{ScaleFamily, StageVariant};
use super::pitch_set::PitchClassSet;
use super::stage_id::StageId;

/// Which ordered note pairs a stage allows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaleDirection {
    /// Second note strictly higher than the first.
    Up,
    /// Second note strictly lower than the first.
    Down,
    /// Either, decided per question.
    Both,
}

impl fmt::Display for ScaleDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ScaleDirection::Up => "up",
            ScaleDirection::Down => "down",
            ScaleDirection::Both => "both",
        })
    }
}

/// One exercise stage: a scale plus the constraints applied to its questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScaleDescriptor {
    /// Stable id, `<family>-<octaves>-<variant>` for catalog stages.
    pub id: String,
    /// Display name of the scale.
    pub name: String,
    /// Tonic pitch class (0-11).
    pub root: i32,
    /// Offsets from the root that belong to the scale.
    pub semitones: PitchClassSet,
    /// Octave span of the stage (1 or 2).
    pub octaves: u8,
    /// Direction constraint.
    pub direction: ScaleDirection,
    /// Whether the first note of every question must be a tonic.
    pub start_from_root: bool,
    /// Correct answers needed to complete the stage.
    pub required_correct: u32,
    /// Largest interval allowed, in semitones.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_interval: Option<u32>,
}

impl ScaleDescriptor {
    /// Builds the catalog descriptor for a stage id.
    pub fn for_stage(stage: StageId) -> Self {
        let StageId {
            family,
            octaves,
            variant,
        } = stage;

        Self {
            id: stage.to_string(),
            name: family.name().to_string(),
            root: family.root(),
            semitones: family.semitones(),
            octaves,
            direction: variant.direction(),
            start_from_root: variant.start_from_root(),
            required_correct: if octaves == 1 { 5 } else { 3 },
            max_interval: (octaves == 2).then_some(12),
        }
    }

    /// Creates an ad hoc single-octave scale with no root or size constraint.
    ///
    /// Useful for custom drills; chain the `with_*` methods to add constraints.
    pub fn custom(
        id: impl Into<String>,
        root: i32,
        semitones: PitchClassSet,
        direction: ScaleDirection,
    ) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            root: pitch_class(root),
            semitones,
            octaves: 1,
            direction,
            start_from_root: false,
            required_correct: 5,
            max_interval: None,
        }
    }

    /// Requires every question to start on a tonic.
    pub fn with_start_from_root(mut self, start_from_root: bool) -> Self {
        self.start_from_root = start_from_root;
        self
    }

    /// Caps the interval size in semitones.
    pub fn with_max_interval(mut self, max_interval: u32) -> Self {
        self.max_interval = Some(max_interval);
        self
    }

    /// Parses the descriptor's id, if it is a catalog-style id.
    pub fn stage_id(&self) -> Option<StageId> {
        self.id.parse().ok()
    }

    /// Family of a catalog stage.
    pub fn family(&self) -> Option<ScaleFamily> {
        self.stage_id().map(|s| s.family)
    }

    /// Variant of a catalog stage.
    pub fn variant(&self) -> Option<StageVariant> {
        self.stage_id().map(|s| s.variant)
    }

    /// Returns true if the MIDI note belongs to this scale.
    pub fn contains(&self, midi: i32) -> bool {
        self.semitones
            .contains(pitch_class(pitch_class(midi) - pitch_class(self.root)))
    }

    /// Returns true if the MIDI note is a tonic of this scale.
    pub fn is_root(&self, midi: i32) -> bool {
        pitch_class(midi) == self.root
    }

    /// Correct answers needed, with test mode lowering the threshold to one.
    pub fn required_correct_for(&self, test_mode: bool) -> u32 {
        if test_mode {
            1
        } else {
            self.required_correct
        }
    }
}

/// Every MIDI note in `start..=end` that belongs to the scale, ascending.
pub fn scale_notes(scale: &ScaleDescriptor, start: i32, end: i32) -> Vec<i32> {
    (start..=end).filter(|&midi| scale.contains(midi)).collect()
}

/// Every MIDI note in `start..=end` whose pitch class is `root`, ascending.
pub fn root_notes(root: i32, start: i32, end: i32) -> Vec<i32> {
    (start..=end)
        .filter(|&midi| pitch_class(midi) == root)
        .collect()
}
