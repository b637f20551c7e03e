//! Error types for the theory core.

use thiserror::Error;

use crate::question::Direction;

/// Result type for theory operations.
pub type TheoryResult<T> = Result<T, TheoryError>;

/// Errors that can occur while generating questions or looking up stages.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TheoryError {
    /// Fewer than two in-scale notes fall inside the requested range.
    #[error("only {found} note(s) of scale '{scale_id}' lie in MIDI range {start}..={end}; at least 2 are required")]
    InsufficientRange {
        /// Scale id the range was checked against.
        scale_id: String,
        /// First MIDI note of the range.
        start: i32,
        /// Last MIDI note of the range.
        end: i32,
        /// Number of in-scale notes found.
        found: usize,
    },

    /// Direction, root, size and repeat filtering left no candidate pairs.
    #[error("no valid interval pairs for scale '{scale_id}' (last direction tried: {direction})")]
    NoValidPairs {
        /// Scale id the pairs were built for.
        scale_id: String,
        /// Direction used for the final attempt.
        direction: Direction,
    },

    /// A stage id does not follow `<family>-<octaves>-<variant>`.
    #[error("invalid stage id '{id}': {message}")]
    InvalidStageId {
        /// The offending id.
        id: String,
        /// What is wrong with it.
        message: String,
    },

    /// No stage in the catalog carries this id.
    #[error("unknown stage '{id}'")]
    UnknownStage {
        /// The id that was looked up.
        id: String,
    },
}

impl TheoryError {
    /// Creates an invalid stage id error.
    pub fn invalid_stage_id(id: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidStageId {
            id: id.into(),
            message: message.into(),
        }
    }

    /// Stable error code for reporting.
    pub fn code(&self) -> &'static str {
        match self {
            TheoryError::InsufficientRange { .. } => "THEORY_001",
            TheoryError::NoValidPairs { .. } => "THEORY_002",
            TheoryError::InvalidStageId { .. } => "THEORY_003",
            TheoryError::UnknownStage { .. } => "THEORY_004",
        }
    }

    /// Error category for grouping related errors.
    pub fn category(&self) -> &'static str {
        "theory"
    }
}
