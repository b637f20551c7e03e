//! Compact set of pitch-class offsets.

use std::fmt;

use serde::{Serialize, Serializer};

/// A set of pitch-class offsets in `0..12`, stored as a 12-bit mask.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PitchClassSet(u16);

impl PitchClassSet {
    /// The set containing all twelve pitch classes.
    pub const CHROMATIC: PitchClassSet = PitchClassSet(0x0fff);

    /// Builds a set from offsets; values are reduced modulo 12.
    pub const fn from_offsets(offsets: &[u8]) -> Self {
        let mut mask = 0u16;
        let mut i = 0;
        while i < offsets.len() {
            mask |= 1u16 << (offsets[i] % 12) as u32;
            i += 1;
        }
        Self(mask)
    }

    /// Returns true if `offset` (already reduced to `0..12`) is in the set.
    pub fn contains(&self, offset: i32) -> bool {
        (0..12).contains(&offset) && self.0 & (1u16 << offset as u32) != 0
    }

    /// Number of pitch classes in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterates the offsets in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0u8..12).filter(move |&o| self.0 & (1u16 << o as u32) != 0)
    }
}

impl fmt::Debug for PitchClassSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl Serialize for PitchClassSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}
