//! The interval question generator.

use rand::Rng;
use rand_pcg::Pcg32;

use crate::error::{TheoryError, TheoryResult};
use crate::interval::INTERVALS;
use crate::rng::create_rng;
use crate::scale::{scale_notes, ScaleDescriptor, ScaleDirection};

use super::pairs::{build_pairs, group_by_size};
use super::types::{Direction, NoteRange, Question};

/// Default lowest base note for chromatic drills (C3).
pub const DEFAULT_CHROMATIC_MIN: i32 = 48;

/// Default highest base note for chromatic drills (C5).
pub const DEFAULT_CHROMATIC_MAX: i32 = 72;

const MAX_CHROMATIC_BASE: i32 = i32::MAX - 12;

/// Draws interval questions using an injected randomness source.
#[derive(Debug, Clone)]
pub struct QuestionGenerator<R = Pcg32> {
    rng: R,
}

impl QuestionGenerator<Pcg32> {
    /// Creates a generator on a seeded PCG32 stream.
    pub fn seeded(seed: u32) -> Self {
        Self::new(create_rng(seed))
    }
}

impl<R: Rng> QuestionGenerator<R> {
    /// Creates a generator drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Mutable access to the randomness source.
    pub fn rng_mut(&mut self) -> &mut R {
        &mut self.rng
    }

    /// Consumes the generator, returning its randomness source.
    pub fn into_rng(self) -> R {
        self.rng
    }

    /// Generates a question for `scale` within `range`.
    ///
    /// The size class is chosen uniformly among the interval sizes that have
    /// at least one legal pair, then a pair is chosen uniformly within that
    /// size. When `previous` is given and more than one pair is legal, its
    /// exact pair is excluded.
    ///
    /// # Errors
    /// * [`TheoryError::InsufficientRange`] if fewer than two scale notes lie in `range`
    /// * [`TheoryError::NoValidPairs`] if filtering leaves no pair
    pub fn generate(
        &mut self,
        scale: &ScaleDescriptor,
        range: NoteRange,
        previous: Option<&Question>,
    ) -> TheoryResult<Question> {
        let notes = scale_notes(scale, range.start, range.end);
        if notes.len() < 2 {
            return Err(TheoryError::InsufficientRange {
                scale_id: scale.id.clone(),
                start: range.start,
                end: range.end,
                found: notes.len(),
            });
        }

        let mut direction = match scale.direction {
            ScaleDirection::Up => Direction::Up,
            ScaleDirection::Down => Direction::Down,
            ScaleDirection::Both => {
                if self.rng.gen_bool(0.5) {
                    Direction::Up
                } else {
                    Direction::Down
                }
            }
        };

        let mut pairs = build_pairs(scale, range, &notes, direction);

        // A one-sided range can leave the drawn direction empty; try the other once.
        if pairs.is_empty() && scale.direction == ScaleDirection::Both {
            log::debug!(
                "no {} pairs for '{}' in {}, flipping direction",
                direction,
                scale.id,
                range
            );
            direction = direction.flipped();
            pairs = build_pairs(scale, range, &notes, direction);
        }

        if let Some(previous) = previous {
            if pairs.len() > 1 {
                pairs.retain(|&pair| pair != previous.pair());
            }
        }

        if pairs.is_empty() {
            return Err(TheoryError::NoValidPairs {
                scale_id: scale.id.clone(),
                direction,
            });
        }

        let groups: Vec<_> = group_by_size(&pairs).into_iter().collect();
        let (size, group) = &groups[self.rng.gen_range(0..groups.len())];
        let (base_note, second_note) = group[self.rng.gen_range(0..group.len())];

        log::debug!(
            "'{}' {}: {} pairs in {} size classes, chose size {} ({} pairs)",
            scale.id,
            direction,
            pairs.len(),
            groups.len(),
            size,
            group.len()
        );

        Ok(Question {
            direction,
            ..Question::from_pair(base_note, second_note)
        })
    }

    /// Generates an ascending question from the bare interval catalog.
    ///
    /// The base note is uniform in `min..=max` (the bounds may be given in
    /// either order) and the interval is uniform over the 12 catalog entries.
    /// No scale, direction or repeat constraint applies. Base notes are capped
    /// at `i32::MAX - 12` so the second note always fits.
    pub fn generate_chromatic(&mut self, min: i32, max: i32) -> Question {
        let (low, high) = if min <= max { (min, max) } else { (max, min) };
        let high = high.min(MAX_CHROMATIC_BASE);
        let low = low.min(high);
        let base_note = self.rng.gen_range(low..=high);
        let interval = INTERVALS[self.rng.gen_range(0..INTERVALS.len())].clone();
        let second_note = base_note + interval.semitones as i32;

        Question {
            base_note,
            second_note,
            interval,
            direction: Direction::Up,
        }
    }

    /// [`generate_chromatic`](Self::generate_chromatic) over C3..=C5.
    pub fn generate_chromatic_default(&mut self) -> Question {
        self.generate_chromatic(DEFAULT_CHROMATIC_MIN, DEFAULT_CHROMATIC_MAX)
    }
}
