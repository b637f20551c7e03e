//! The fixed, ordered list of exercise stages.

use std::sync::OnceLock;

use crate::error::{TheoryError, TheoryResult};

use super::descriptor::ScaleDescriptor;
use super::family::{ScaleFamily, StageVariant};
use super::stage_id::StageId;

/// Octave spans, in progression order.
pub const OCTAVE_SPANS: [u8; 2] = [1, 2];

/// Number of stages in the catalog.
pub const STAGE_COUNT: usize = ScaleFamily::ALL.len() * OCTAVE_SPANS.len() * StageVariant::ALL.len();

static CATALOG: OnceLock<Vec<ScaleDescriptor>> = OnceLock::new();

/// Builds the stage list: family, then octave span, then variant.
///
/// The iteration order is the stage progression order.
pub fn build_catalog() -> Vec<ScaleDescriptor> {
    let mut stages = Vec::with_capacity(STAGE_COUNT);
    for family in ScaleFamily::ALL {
        for octaves in OCTAVE_SPANS {
            for variant in StageVariant::ALL {
                stages.push(ScaleDescriptor::for_stage(StageId::new(
                    family, octaves, variant,
                )));
            }
        }
    }
    stages
}

/// The process-wide stage catalog, built on first use.
pub fn catalog() -> &'static [ScaleDescriptor] {
    CATALOG.get_or_init(build_catalog)
}

/// The stage at `index`, or `None` past the end.
pub fn stage(index: usize) -> Option<&'static ScaleDescriptor> {
    catalog().get(index)
}

/// The stage with the given id.
pub fn find_stage(id: &str) -> TheoryResult<&'static ScaleDescriptor> {
    catalog()
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| TheoryError::UnknownStage { id: id.to_string() })
}

/// Index of the stage after `index`, staying on the last stage once reached.
pub fn next_stage_index(index: usize) -> usize {
    (index + 1).min(STAGE_COUNT - 1)
}
