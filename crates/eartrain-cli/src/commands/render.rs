//! Render command implementation
//!
//! Generates a question and writes its audio to a WAV file.

use anyhow::{Context, Result};
use colored::Colorize;
use eartrain_synth::{render_question, WavResult};
use std::path::Path;
use std::process::ExitCode;

use crate::config::TrainerConfig;

use super::question::{self, QuestionReport};

/// Generates the question for `stage_arg` and encodes its audio.
pub fn render(config: &TrainerConfig, stage_arg: &str) -> Result<(QuestionReport, WavResult)> {
    let report = question::generate(config, stage_arg)?;
    let samples = render_question(&report.question, config.playback, config.sample_rate)
        .context("Failed to render question audio")?;
    Ok((report, WavResult::from_mono(&samples, config.sample_rate)))
}

/// Run the render command
pub fn run(config: &TrainerConfig, stage_arg: &str, out: &Path) -> Result<ExitCode> {
    let (report, wav) = render(config, stage_arg)?;
    wav.save(out)
        .with_context(|| format!("Failed to write WAV file: {}", out.display()))?;

    report.print();
    println!(
        "{} {} {}",
        "Wrote".green().bold(),
        out.display(),
        format!(
            "({}, {:.2}s, {} Hz, pcm {})",
            config.playback,
            wav.duration_seconds(),
            wav.sample_rate,
            &wav.pcm_hash[..16]
        )
        .dimmed()
    );
    Ok(ExitCode::SUCCESS)
}
