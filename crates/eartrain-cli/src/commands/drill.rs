//! Drill command implementation
//!
//! Runs a sequence of questions on one stage. Each question excludes the
//! previous one's pair and draws from its own derived seed, so question `i`
//! of a drill can be reproduced from the drill seed alone.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use eartrain_synth::{AudioOutput, PlaybackMode, ToneSynth, WavResult};
use eartrain_theory::rng::create_question_rng;
use eartrain_theory::{Question, QuestionGenerator};
use futures::executor::block_on;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;

use crate::config::TrainerConfig;

use super::resolve_stage;

/// Silence appended after each question when rendering a drill.
pub const QUESTION_GAP: f64 = 0.5;

/// Outcome of a drill.
#[derive(Debug, Clone, Serialize)]
pub struct DrillReport {
    pub stage: usize,
    pub stage_id: String,
    pub seed: u32,
    pub questions: Vec<Question>,
    /// Questions per interval size in semitones.
    pub histogram: BTreeMap<u32, usize>,
}

/// Generates `count` chained questions for `stage_arg`.
pub fn drill(config: &TrainerConfig, stage_arg: &str, count: u32) -> Result<DrillReport> {
    if count == 0 {
        bail!("drill count must be at least 1");
    }
    let (index, scale) = resolve_stage(stage_arg)?;
    let seed = config.resolve_seed();
    let range = config.range();

    let mut questions: Vec<Question> = Vec::with_capacity(count as usize);
    for i in 0..count {
        let mut generator = QuestionGenerator::new(create_question_rng(seed, i));
        let question = generator
            .generate(scale, range, questions.last())
            .with_context(|| format!("Failed to generate question {} of stage {}", i, scale.id))?;
        questions.push(question);
    }

    let mut histogram = BTreeMap::new();
    for question in &questions {
        *histogram.entry(question.interval.semitones).or_insert(0) += 1;
    }

    Ok(DrillReport {
        stage: index,
        stage_id: scale.id.clone(),
        seed,
        questions,
        histogram,
    })
}

/// Plays every question through one output bus and collects the audio.
pub fn render_drill(questions: &[Question], mode: PlaybackMode, sample_rate: u32) -> Vec<f64> {
    let output = Arc::new(AudioOutput::new(sample_rate));
    block_on(output.resume());
    let synth = ToneSynth::new(output.clone());

    let mut samples = Vec::new();
    for question in questions {
        synth.play_question(question, mode);
        samples.extend(output.render(mode.total_duration() + QUESTION_GAP));
    }
    samples
}

/// Run the drill command
pub fn run(
    config: &TrainerConfig,
    stage_arg: &str,
    count: u32,
    out: Option<&Path>,
    json: bool,
) -> Result<ExitCode> {
    let report = drill(config, stage_arg, count)?;

    if let Some(out) = out {
        let samples = render_drill(&report.questions, config.playback, config.sample_rate);
        WavResult::from_mono(&samples, config.sample_rate)
            .save(out)
            .with_context(|| format!("Failed to write WAV file: {}", out.display()))?;
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!(
        "{} {} {}",
        "Drill".cyan().bold(),
        report.stage,
        format!("({}, seed {})", report.stage_id, report.seed).dimmed()
    );
    for (i, question) in report.questions.iter().enumerate() {
        println!("  {:>3}. {}", i + 1, question);
    }
    println!();
    println!("{}", "Interval sizes:".bold());
    for (size, n) in &report.histogram {
        println!("  {:>2}st {:>4} {}", size, n, "#".repeat(*n).green());
    }
    if let Some(out) = out {
        println!("{} {}", "Wrote".green().bold(), out.display());
    }
    Ok(ExitCode::SUCCESS)
}
