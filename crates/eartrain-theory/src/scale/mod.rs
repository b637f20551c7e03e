//! Scale families, stage variants and the ordered stage catalog.
//!
//! A stage is one exercise configuration: a scale family, an octave span and a
//! direction/root variant. The catalog holds every combination in progression
//! order and is built once per process.

mod catalog;
mod descriptor;
mod family;
mod pitch_set;
mod stage_id;


pub use catalog::{
    build_catalog, catalog, find_stage, next_stage_index, stage, OCTAVE_SPANS, STAGE_COUNT,
};
pub use descriptor::{root_notes, scale_notes, ScaleDescriptor, ScaleDirection};
pub use family::{ScaleFamily, StageVariant};
pub use pitch_set::PitchClassSet;
pub use stage_id::StageId;
