//! Question constraint checks.

use eartrain_theory::{Question, ScaleDescriptor, ScaleDirection};
use eartrain_theory::{Direction, NoteRange};

/// Returns every constraint of `scale` and `range` that `question` breaks.
///
/// An empty list means the question is legal for the stage.
pub fn violations(scale: &ScaleDescriptor, range: NoteRange, question: &Question) -> Vec<String> {
    let mut problems = Vec::new();
    let (base, second) = question.pair();

    for (label, note) in [("base", base), ("second", second)] {
        if !range.contains(note) {
            problems.push(format!("{} note {} outside {}", label, note, range));
        }
        if !scale.contains(note) {
            problems.push(format!("{} note {} not in {}", label, note, scale.id));
        }
    }
    if base == second {
        problems.push("unison pair".to_string());
    }
    if !question.direction.matches(base, second) {
        problems.push(format!("pair does not go {}", question.direction));
    }
    let allowed = match scale.direction {
        ScaleDirection::Up => question.direction == Direction::Up,
        ScaleDirection::Down => question.direction == Direction::Down,
        ScaleDirection::Both => true,
    };
    if !allowed {
        problems.push(format!("direction {} not allowed", question.direction));
    }
    if scale.start_from_root && !scale.is_root(base) {
        problems.push(format!("base {} is not a tonic", base));
    }
    if let Some(max) = scale.max_interval {
        if question.interval.semitones > max {
            problems.push(format!("{} semitones exceeds {}", question.interval.semitones, max));
        }
    }
    if question.interval.semitones != base.abs_diff(second) {
        problems.push("interval size does not match pair".to_string());
    }
    problems
}
