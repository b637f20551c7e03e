//! Question value types.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::interval::Interval;
use crate::pitch::{frequency_of, note_name_of};

use super::pairs::NotePair;

/// Direction actually used by a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Second note higher than the first.
    Up,
    /// Second note lower than the first.
    Down,
}

impl Direction {
    /// The opposite direction.
    pub fn flipped(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Returns true if moving from `base` to `second` goes this way.
    ///
    /// Equal notes never match either direction.
    pub fn matches(self, base: i32, second: i32) -> bool {
        match self {
            Direction::Up => second > base,
            Direction::Down => second < base,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
        })
    }
}

/// Inclusive range of MIDI notes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NoteRange {
    /// Lowest MIDI note.
    pub start: i32,
    /// Highest MIDI note.
    pub end: i32,
}

impl NoteRange {
    /// Creates a range covering `start..=end`.
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Returns true if `midi` lies in the range.
    pub fn contains(&self, midi: i32) -> bool {
        (self.start..=self.end).contains(&midi)
    }

    /// Number of MIDI notes covered.
    pub fn len(&self) -> usize {
        if self.end < self.start {
            0
        } else {
            (self.end - self.start) as usize + 1
        }
    }

    /// Returns true if the range covers no notes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for NoteRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", note_name_of(self.start), note_name_of(self.end))
    }
}

/// A generated interval question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    /// First note played (MIDI).
    pub base_note: i32,
    /// Second note played (MIDI).
    pub second_note: i32,
    /// Interval between the two notes.
    pub interval: Interval,
    /// Direction from the first to the second note.
    pub direction: Direction,
}

impl Question {
    /// Builds a question from a pair, resolving the interval from its size.
    pub fn from_pair(base_note: i32, second_note: i32) -> Self {
        let direction = if second_note < base_note {
            Direction::Down
        } else {
            Direction::Up
        };
        Self {
            base_note,
            second_note,
            interval: Interval::from_semitones(base_note.abs_diff(second_note)),
            direction,
        }
    }

    /// The `(base, second)` pair.
    pub fn pair(&self) -> NotePair {
        (self.base_note, self.second_note)
    }

    /// Returns true if this question plays the same two notes in the same order.
    pub fn is_same_pair(&self, other: &Question) -> bool {
        self.pair() == other.pair()
    }

    /// Frequency of the first note in Hz.
    pub fn base_frequency(&self) -> f64 {
        frequency_of(self.base_note)
    }

    /// Frequency of the second note in Hz.
    pub fn second_frequency(&self) -> f64 {
        frequency_of(self.second_note)
    }
}

impl fmt::Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({}, {})",
            note_name_of(self.base_note),
            note_name_of(self.second_note),
            self.interval.short_name,
            self.direction
        )
    }
}
