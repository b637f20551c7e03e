//! Tests for interval question generation.

use std::collections::{BTreeMap, BTreeSet};

use pretty_assertions::assert_eq;

use super::*;
use crate::pitch::frequency_of;
use crate::scale::{catalog, find_stage, stage, PitchClassSet, ScaleDescriptor, ScaleDirection};
use crate::TheoryError;

const A3_A4: NoteRange = NoteRange { start: 57, end: 69 };
const A3_A5: NoteRange = NoteRange { start: 57, end: 81 };

fn size_histogram(
    generator: &mut QuestionGenerator,
    scale: &ScaleDescriptor,
    range: NoteRange,
    draws: usize,
) -> BTreeMap<u32, usize> {
    let mut counts = BTreeMap::new();
    for _ in 0..draws {
        let q = generator.generate(scale, range, None).unwrap();
        *counts.entry(q.interval.semitones).or_insert(0) += 1;
    }
    counts
}

// =========================================================================
// Candidate pairs
// =========================================================================

#[test]
fn test_root_up_candidates_a3_a4() {
    let scale = stage(0).unwrap();
    let pairs = candidate_pairs(scale, A3_A4, Direction::Up);
    assert_eq!(pairs, vec![(57, 60), (57, 62), (57, 64), (57, 67), (57, 69)]);

    let sizes: Vec<u32> = group_by_size(&pairs).into_keys().collect();
    assert_eq!(sizes, vec![3, 5, 7, 10, 12]);
}

#[test]
fn test_candidates_never_include_unison() {
    let scale = find_stage("chromatic-1-any-up").unwrap();
    for direction in [Direction::Up, Direction::Down] {
        for (base, second) in candidate_pairs(scale, A3_A4, direction) {
            assert_ne!(base, second);
        }
    }
}

#[test]
fn test_two_octave_candidates_respect_max_interval() {
    let scale = find_stage("minor-2-any-up").unwrap();
    let pairs = candidate_pairs(scale, A3_A5, Direction::Up);
    assert!(!pairs.is_empty());
    assert!(pairs.iter().all(|&(b, s)| s > b && s - b <= 12));

    let unbounded = find_stage("minor-1-any-up").unwrap();
    let wide = candidate_pairs(unbounded, A3_A5, Direction::Up);
    assert!(wide.iter().any(|&(b, s)| s - b > 12));
}

#[test]
fn test_group_by_size_counts() {
    let scale = find_stage("penta-1-any-up").unwrap();
    let groups = group_by_size(&candidate_pairs(scale, A3_A4, Direction::Up));
    let counts: Vec<(u32, usize)> = groups.iter().map(|(&k, v)| (k, v.len())).collect();
    assert_eq!(
        counts,
        vec![(2, 3), (3, 2), (4, 1), (5, 3), (7, 3), (9, 1), (10, 1), (12, 1)]
    );
}

// =========================================================================
// Generation constraints
// =========================================================================

#[test]
fn test_root_up_scenario_a3_a4() {
    let scale = stage(0).unwrap();
    let mut generator = QuestionGenerator::seeded(1);
    for _ in 0..200 {
        let q = generator.generate(scale, A3_A4, None).unwrap();
        assert_eq!(q.base_note, 57);
        assert!([60, 62, 64, 67, 69].contains(&q.second_note));
        assert_eq!(q.direction, Direction::Up);
    }
}

#[test]
fn test_every_stage_respects_its_constraints() {
    let mut generator = QuestionGenerator::seeded(2024);
    for scale in catalog() {
        let mut previous: Option<Question> = None;
        for _ in 0..100 {
            let q = generator
                .generate(scale, A3_A5, previous.as_ref())
                .unwrap_or_else(|e| panic!("{}: {}", scale.id, e));

            let diff = q.second_note - q.base_note;
            match scale.direction {
                ScaleDirection::Up => assert!(diff > 0, "{}: {}", scale.id, q),
                ScaleDirection::Down => assert!(diff < 0, "{}: {}", scale.id, q),
                ScaleDirection::Both => assert_ne!(diff, 0, "{}: {}", scale.id, q),
            }
            assert!(q.direction.matches(q.base_note, q.second_note));
            if scale.start_from_root {
                assert!(scale.is_root(q.base_note), "{}: {}", scale.id, q);
            }
            if let Some(max) = scale.max_interval {
                assert!(diff.unsigned_abs() <= max, "{}: {}", scale.id, q);
            }
            assert!(scale.contains(q.base_note) && scale.contains(q.second_note));
            assert!(A3_A5.contains(q.base_note) && A3_A5.contains(q.second_note));
            assert_eq!(q.interval.semitones, diff.unsigned_abs());

            previous = Some(q);
        }
    }
}

#[test]
fn test_frequencies_follow_notes() {
    let mut generator = QuestionGenerator::seeded(9);
    let q = generator
        .generate(find_stage("harmonic-1-down").unwrap(), A3_A4, None)
        .unwrap();
    assert_eq!(q.base_frequency(), frequency_of(q.base_note));
    assert_eq!(q.second_frequency(), frequency_of(q.second_note));
}

#[test]
fn test_both_direction_uses_both_ways() {
    let scale = find_stage("penta-1-both").unwrap();
    let mut generator = QuestionGenerator::seeded(5);
    let directions: BTreeSet<_> = (0..100)
        .map(|_| generator.generate(scale, A3_A4, None).unwrap().direction)
        .collect();
    assert_eq!(directions.len(), 2);
}

#[test]
fn test_both_direction_flips_when_one_side_is_empty() {
    // The only tonic in range is the top note, so nothing ascends from it.
    let scale = ScaleDescriptor::custom(
        "penta-top-root",
        9,
        PitchClassSet::from_offsets(&[0, 3, 5, 7, 10]),
        ScaleDirection::Both,
    )
    .with_start_from_root(true);
    let range = NoteRange::new(60, 69);

    for seed in 0..50 {
        let q = QuestionGenerator::seeded(seed)
            .generate(&scale, range, None)
            .unwrap();
        assert_eq!(q.base_note, 69);
        assert_eq!(q.direction, Direction::Down);
    }
}

#[test]
fn test_both_direction_fails_after_single_retry() {
    let scale = ScaleDescriptor::custom(
        "narrow",
        9,
        PitchClassSet::from_offsets(&[0, 3, 5, 7, 10]),
        ScaleDirection::Both,
    )
    .with_start_from_root(true)
    .with_max_interval(2);

    let err = QuestionGenerator::seeded(3)
        .generate(&scale, NoteRange::new(57, 60), None)
        .unwrap_err();
    assert!(matches!(err, TheoryError::NoValidPairs { .. }));
}

#[test]
fn test_root_up_without_tonic_in_range_has_no_pairs() {
    let scale = stage(0).unwrap();
    let err = QuestionGenerator::seeded(3)
        .generate(scale, NoteRange::new(60, 67), None)
        .unwrap_err();
    assert_eq!(
        err,
        TheoryError::NoValidPairs {
            scale_id: "penta-1-root-up".to_string(),
            direction: Direction::Up,
        }
    );
}

#[test]
fn test_single_note_range_is_insufficient() {
    let scale = stage(0).unwrap();
    let err = QuestionGenerator::seeded(0)
        .generate(scale, NoteRange::new(57, 57), None)
        .unwrap_err();
    assert_eq!(
        err,
        TheoryError::InsufficientRange {
            scale_id: "penta-1-root-up".to_string(),
            start: 57,
            end: 57,
            found: 1,
        }
    );

    let err = QuestionGenerator::seeded(0)
        .generate(scale, NoteRange::new(58, 59), None)
        .unwrap_err();
    assert!(matches!(err, TheoryError::InsufficientRange { found: 0, .. }));
}

// =========================================================================
// Repeat avoidance
// =========================================================================

#[test]
fn test_previous_pair_is_never_repeated() {
    let scale = stage(0).unwrap();
    let previous = Question::from_pair(57, 60);
    let mut generator = QuestionGenerator::seeded(11);
    for _ in 0..500 {
        let q = generator.generate(scale, A3_A4, Some(&previous)).unwrap();
        assert!(!q.is_same_pair(&previous));
    }
}

#[test]
fn test_repeat_allowed_when_only_one_pair_exists() {
    let scale = stage(0).unwrap();
    let range = NoteRange::new(57, 60);
    let previous = Question::from_pair(57, 60);
    let q = QuestionGenerator::seeded(4)
        .generate(scale, range, Some(&previous))
        .unwrap();
    assert_eq!(q.pair(), (57, 60));
}

#[test]
fn test_chained_questions_never_repeat() {
    let scale = find_stage("minor-1-both").unwrap();
    let mut generator = QuestionGenerator::seeded(77);
    let mut previous = generator.generate(scale, A3_A4, None).unwrap();
    for _ in 0..300 {
        let q = generator.generate(scale, A3_A4, Some(&previous)).unwrap();
        assert!(!q.is_same_pair(&previous));
        previous = q;
    }
}

// =========================================================================
// Distribution
// =========================================================================

#[test]
fn test_root_up_sizes_are_uniform() {
    let scale = stage(0).unwrap();
    let mut generator = QuestionGenerator::seeded(123);
    let counts = size_histogram(&mut generator, scale, A3_A4, 5000);

    assert_eq!(counts.keys().copied().collect::<Vec<_>>(), vec![3, 5, 7, 10, 12]);
    for (size, count) in counts {
        assert!((850..=1150).contains(&count), "size {} drawn {} times", size, count);
    }
}

#[test]
fn test_sampling_is_uniform_over_sizes_not_pairs() {
    // 15 pairs over 8 sizes; size 4 owns a single pair and size 2 owns three.
    let scale = find_stage("penta-1-any-up").unwrap();
    let mut generator = QuestionGenerator::seeded(456);
    let counts = size_histogram(&mut generator, scale, A3_A4, 8000);

    assert_eq!(counts.len(), 8);
    for (size, count) in &counts {
        assert!((850..=1150).contains(count), "size {} drawn {} times", size, count);
    }
}

#[test]
fn test_pairs_uniform_within_size() {
    let scale = find_stage("penta-1-any-up").unwrap();
    let mut generator = QuestionGenerator::seeded(789);
    let mut size_two = BTreeMap::new();
    for _ in 0..9000 {
        let q = generator.generate(scale, A3_A4, None).unwrap();
        if q.interval.semitones == 2 {
            *size_two.entry(q.pair()).or_insert(0usize) += 1;
        }
    }
    // Size 2 pairs: (60,62), (62,64), (67,69); ~1125 draws shared three ways.
    assert_eq!(size_two.len(), 3);
    for (pair, count) in size_two {
        assert!((270..=480).contains(&count), "pair {:?} drawn {} times", pair, count);
    }
}

#[test]
fn test_same_seed_same_sequence() {
    let scale = find_stage("chromatic-2-both").unwrap();
    let mut a = QuestionGenerator::seeded(99);
    let mut b = QuestionGenerator::seeded(99);
    for _ in 0..50 {
        assert_eq!(
            a.generate(scale, A3_A5, None).unwrap(),
            b.generate(scale, A3_A5, None).unwrap()
        );
    }
}

// =========================================================================
// Chromatic drill
// =========================================================================

#[test]
fn test_chromatic_questions() {
    let mut generator = QuestionGenerator::seeded(8);
    let mut seen = BTreeSet::new();
    for _ in 0..600 {
        let q = generator.generate_chromatic_default();
        assert!((DEFAULT_CHROMATIC_MIN..=DEFAULT_CHROMATIC_MAX).contains(&q.base_note));
        assert_eq!(q.second_note, q.base_note + q.interval.semitones as i32);
        assert!(q.interval.is_catalogued());
        assert_eq!(q.direction, Direction::Up);
        seen.insert(q.interval.semitones);
    }
    assert_eq!(seen.len(), 12);
}

#[test]
fn test_chromatic_accepts_reversed_bounds() {
    let mut generator = QuestionGenerator::seeded(8);
    for _ in 0..50 {
        let q = generator.generate_chromatic(62, 60);
        assert!((60..=62).contains(&q.base_note));
    }
}

#[test]
fn test_chromatic_caps_base_near_integer_limit() {
    let mut generator = QuestionGenerator::seeded(8);
    for _ in 0..50 {
        let q = generator.generate_chromatic(i32::MAX - 1, i32::MAX);
        assert_eq!(q.base_note, i32::MAX - 12);
        assert_eq!(q.second_note, q.base_note + q.interval.semitones as i32);
    }
}

// =========================================================================
// Question helpers
// =========================================================================

#[test]
fn test_question_from_pair() {
    let q = Question::from_pair(69, 62);
    assert_eq!(q.direction, Direction::Down);
    assert_eq!(q.interval.short_name, "P5");
    assert_eq!(q.to_string(), "A4 -> D4 (P5, down)");
}

#[test]
fn test_note_range_len() {
    assert_eq!(A3_A4.len(), 13);
    assert!(NoteRange::new(60, 59).is_empty());
    assert_eq!(A3_A4.to_string(), "A3..=A4");
}
