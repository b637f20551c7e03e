//! Structured stage identifiers (`<family>-<octaves>-<variant>`).

use std::fmt;
use std::str::FromStr;

use crate::error::TheoryError;

use super::catalog::OCTAVE_SPANS;
use super::family::{ScaleFamily, StageVariant};

/// Parsed form of a stage id such as `"penta-1-root-up"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StageId {
    /// Scale family.
    pub family: ScaleFamily,
    /// Octave span (1 or 2).
    pub octaves: u8,
    /// Direction/root variant.
    pub variant: StageVariant,
}

impl StageId {
    /// Creates a stage id.
    pub fn new(family: ScaleFamily, octaves: u8, variant: StageVariant) -> Self {
        Self {
            family,
            octaves,
            variant,
        }
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}-{}",
            self.family.prefix(),
            self.octaves,
            self.variant.suffix()
        )
    }
}

impl FromStr for StageId {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.splitn(3, '-');
        let (Some(prefix), Some(octaves), Some(suffix)) = (parts.next(), parts.next(), parts.next())
        else {
            return Err(TheoryError::invalid_stage_id(
                s,
                "expected <family>-<octaves>-<variant>",
            ));
        };

        let family = ScaleFamily::from_prefix(prefix).ok_or_else(|| {
            TheoryError::invalid_stage_id(s, format!("unknown scale family '{}'", prefix))
        })?;

        let octaves: u8 = octaves
            .parse()
            .ok()
            .filter(|o| OCTAVE_SPANS.contains(o))
            .ok_or_else(|| TheoryError::invalid_stage_id(s, "octaves must be 1 or 2"))?;

        let variant = StageVariant::from_suffix(suffix).ok_or_else(|| {
            TheoryError::invalid_stage_id(s, format!("unknown stage variant '{}'", suffix))
        })?;

        Ok(Self::new(family, octaves, variant))
    }
}
