//! Candidate pair enumeration and grouping by interval size.

use std::collections::BTreeMap;

use crate::scale::{root_notes, scale_notes, ScaleDescriptor};

use super::types::{Direction, NoteRange};

/// An ordered `(base, second)` pair of MIDI notes.
pub type NotePair = (i32, i32);

/// Every legal pair for `scale` in `range` going in `direction`.
///
/// Base notes are the in-range tonics when the scale starts from the root and
/// every in-scale note otherwise. Pairs wider than the scale's
/// `max_interval` are dropped.
pub fn candidate_pairs(
    scale: &ScaleDescriptor,
    range: NoteRange,
    direction: Direction,
) -> Vec<NotePair> {
    let notes = scale_notes(scale, range.start, range.end);
    build_pairs(scale, range, &notes, direction)
}

pub(super) fn build_pairs(
    scale: &ScaleDescriptor,
    range: NoteRange,
    notes: &[i32],
    direction: Direction,
) -> Vec<NotePair> {
    let roots;
    let bases: &[i32] = if scale.start_from_root {
        roots = root_notes(scale.root, range.start, range.end);
        &roots
    } else {
        notes
    };

    let mut pairs = Vec::new();
    for &base in bases {
        for &second in notes {
            if !direction.matches(base, second) {
                continue;
            }
            if let Some(max) = scale.max_interval {
                if base.abs_diff(second) > max {
                    continue;
                }
            }
            pairs.push((base, second));
        }
    }

    log::trace!(
        "{} pairs for '{}' going {} from {} base note(s)",
        pairs.len(),
        scale.id,
        direction,
        bases.len()
    );
    pairs
}

/// Groups pairs by size in semitones, in ascending size order.
pub fn group_by_size(pairs: &[NotePair]) -> BTreeMap<u32, Vec<NotePair>> {
    let mut groups: BTreeMap<u32, Vec<NotePair>> = BTreeMap::new();
    for &(base, second) in pairs {
        groups
            .entry(base.abs_diff(second))
            .or_default()
            .push((base, second));
    }
    groups
}
