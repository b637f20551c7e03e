//! End-to-end tests: stage question to WAV bytes.

use pretty_assertions::assert_eq;

use eartrain_cli::commands::{drill, render};
use eartrain_cli::config::TrainerConfig;
use eartrain_synth::wav::{compute_pcm_hash, extract_pcm_data};
use eartrain_synth::{render_question, PlaybackMode, WavResult};
use eartrain_tests::determinism::verify_determinism;
use eartrain_theory::{stage, NoteRange, QuestionGenerator};

fn config() -> TrainerConfig {
    TrainerConfig {
        sample_rate: 8000,
        seed: Some(31),
        ..TrainerConfig::default()
    }
}

#[test]
fn rendered_question_is_deterministic() {
    let result = verify_determinism(
        || {
            let scale = stage(20).unwrap();
            let question = QuestionGenerator::seeded(8)
                .generate(scale, NoteRange::new(57, 81), None)
                .unwrap();
            let samples = render_question(&question, PlaybackMode::Melodic, 8000).unwrap();
            WavResult::from_mono(&samples, 8000).wav_data
        },
        3,
    );
    assert!(result.is_deterministic, "{:?}", result.first_diff);
}

#[test]
fn wav_payload_matches_sample_count() {
    let (report, wav) = render::render(&config(), "penta-1-root-up").unwrap();
    assert_eq!(report.stage, 0);

    let pcm = extract_pcm_data(&wav.wav_data).unwrap();
    assert_eq!(pcm.len(), wav.num_samples * 2);
    assert_eq!(wav.num_samples, 12400);
    assert_eq!(compute_pcm_hash(&wav.wav_data), Some(wav.pcm_hash.clone()));
}

#[test]
fn render_command_writes_wav_file() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("q.wav");
    let harmonic = config().with_playback(Some(PlaybackMode::Harmonic));

    render::run(&harmonic, "9", &out).unwrap();

    let bytes = std::fs::read(&out).unwrap();
    assert_eq!(&bytes[0..4], b"RIFF");
    assert_eq!(&bytes[8..12], b"WAVE");
    assert_eq!(extract_pcm_data(&bytes).unwrap().len(), 10400 * 2);
}

#[test]
fn drill_command_renders_every_question() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("drill.wav");

    drill::run(&config(), "minor-1-both", 4, Some(out.as_path()), true).unwrap();

    let bytes = std::fs::read(&out).unwrap();
    let per_question = ((1.55 + drill::QUESTION_GAP) * 8000.0_f64).round() as usize;
    assert_eq!(extract_pcm_data(&bytes).unwrap().len(), 4 * per_question * 2);
}

#[test]
fn config_file_drives_commands() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trainer.json");
    std::fs::write(
        &path,
        serde_json::json!({
            "range_start": 45,
            "range_end": 69,
            "seed": 4,
            "sample_rate": 8000
        })
        .to_string(),
    )
    .unwrap();

    let config = TrainerConfig::load(&path).unwrap();
    config.validate().unwrap();
    let report = drill::drill(&config, "chromatic-2-both", 25).unwrap();
    for question in &report.questions {
        assert!(NoteRange::new(45, 69).contains(question.base_note));
        assert!(question.interval.semitones <= 12);
    }
}
