//! Interval question generation.
//!
//! [`QuestionGenerator::generate`] draws a question for a stage and a note
//! range; [`QuestionGenerator::generate_chromatic`] is the simpler drill over
//! the bare interval catalog.

mod generator;
mod pairs;
mod types;

#[cfg(test)]
mod tests;

pub use generator::{QuestionGenerator, DEFAULT_CHROMATIC_MAX, DEFAULT_CHROMATIC_MIN};
pub use pairs::{candidate_pairs, group_by_size, NotePair};
pub use types::{Direction, NoteRange, Question};
