//! The chromatic interval catalog.
//!
//! The twelve intervals from a minor second to an octave are a fixed table
//! keyed by semitone count. Sizes outside the table get a generic descriptor
//! built by [`Interval::generic`].

use std::borrow::Cow;
use std::fmt;

use serde::Serialize;

/// An interval between two notes, measured in semitones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Interval {
    /// Size in semitones.
    pub semitones: u32,
    /// Display name (e.g. "Perfect 5th").
    pub name: Cow<'static, str>,
    /// Canonical short code (e.g. "P5"), used as the translation key.
    pub short_name: Cow<'static, str>,
}

impl Interval {
    const fn known(semitones: u32, name: &'static str, short_name: &'static str) -> Self {
        Self {
            semitones,
            name: Cow::Borrowed(name),
            short_name: Cow::Borrowed(short_name),
        }
    }

    /// Builds the descriptor for a size with no catalog entry.
    pub fn generic(semitones: u32) -> Self {
        Self {
            semitones,
            name: Cow::Owned(format!("{} semitones", semitones)),
            short_name: Cow::Owned(format!("{}st", semitones)),
        }
    }

    /// Looks up `semitones` in the catalog, falling back to [`Interval::generic`].
    pub fn from_semitones(semitones: u32) -> Self {
        interval_by_semitones(semitones)
            .cloned()
            .unwrap_or_else(|| Self::generic(semitones))
    }

    /// Returns true if this interval is one of the twelve catalog entries.
    pub fn is_catalogued(&self) -> bool {
        interval_by_semitones(self.semitones).is_some_and(|known| known == self)
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_name)
    }
}

/// All 12 chromatic intervals, ordered by size.
pub static INTERVALS: [Interval; 12] = [
    Interval::known(1, "Minor 2nd", "m2"),
    Interval::known(2, "Major 2nd", "M2"),
    Interval::known(3, "Minor 3rd", "m3"),
    Interval::known(4, "Major 3rd", "M3"),
    Interval::known(5, "Perfect 4th", "P4"),
    Interval::known(6, "Tritone", "TT"),
    Interval::known(7, "Perfect 5th", "P5"),
    Interval::known(8, "Minor 6th", "m6"),
    Interval::known(9, "Major 6th", "M6"),
    Interval::known(10, "Minor 7th", "m7"),
    Interval::known(11, "Major 7th", "M7"),
    Interval::known(12, "Octave", "P8"),
];

/// Finds the catalog entry with exactly `semitones` semitones.
pub fn interval_by_semitones(semitones: u32) -> Option<&'static Interval> {
    INTERVALS.iter().find(|i| i.semitones == semitones)
}
