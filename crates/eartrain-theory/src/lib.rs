//! Eartrain Theory Core
//!
//! This crate implements the pure, synchronous half of the ear-training
//! engine: pitch arithmetic, the interval catalog, the ordered list of
//! exercise stages, and the interval question generator.
//!
//! # Overview
//!
//! A stage index selects a [`ScaleDescriptor`] from the fixed [`catalog()`].
//! The descriptor and a note range are handed to a [`QuestionGenerator`],
//! which returns a [`Question`] holding two MIDI notes, the interval between
//! them and both frequencies.
//!
//! # Sampling
//!
//! Questions are drawn interval-first: every legal `(base, second)` pair is
//! grouped by its size in semitones, a size is chosen uniformly among the
//! sizes present, and only then is a pair chosen within that size. Sampling
//! pairs directly would favour the short intervals, which have many more
//! pairs in any bounded range.
//!
//! # Determinism
//!
//! All randomness flows through an injected [`rand::Rng`]. The default
//! generator uses PCG32 seeded via [`rng::create_rng`], so a given seed always
//! yields the same question sequence.
//!
//! # Example
//!
//! ```
//! use eartrain_theory::{stage, NoteRange, QuestionGenerator};
//!
//! let scale = stage(0).unwrap();
//! let mut generator = QuestionGenerator::seeded(42);
//! let question = generator.generate(scale, NoteRange::new(57, 69), None).unwrap();
//!
//! assert_eq!(question.base_note, 57);
//! assert_eq!(question.interval.semitones, (question.second_note - question.base_note).unsigned_abs());
//! ```
//!
//! # Crate Structure
//!
//! - [`pitch`] - MIDI, frequency and note-name conversion
//! - [`interval`] - The 12-entry chromatic interval catalog
//! - [`scale`] - Scale families, stage variants and the stage catalog
//! - [`question`] - Interval question generation
//! - [`rng`] - Deterministic RNG with seed derivation
//! - [`error`] - Error taxonomy for generation and catalog lookups

pub mod error;
pub mod interval;
pub mod pitch;
pub mod question;
pub mod rng;
pub mod scale;

// Re-export main types at crate root
pub use error::{TheoryError, TheoryResult};
pub use interval::{interval_by_semitones, Interval, INTERVALS};
pub use pitch::{frequency_of, note_name_of, pitch_class};
pub use question::{
    candidate_pairs, Direction, NoteRange, Question, QuestionGenerator, DEFAULT_CHROMATIC_MAX,
    DEFAULT_CHROMATIC_MIN,
};
pub use scale::{
    catalog, find_stage, next_stage_index, root_notes, scale_notes, stage, ScaleDescriptor,
    ScaleDirection, ScaleFamily, StageId, StageVariant, STAGE_COUNT,
};
