//! Question command implementation
//!
//! Draws one interval question for a stage.

use anyhow::{Context, Result};
use colored::Colorize;
use eartrain_theory::{note_name_of, Question, QuestionGenerator};
use serde::Serialize;
use std::process::ExitCode;

use crate::config::TrainerConfig;

use super::resolve_stage;

/// A generated question with the context needed to reproduce it.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionReport {
    pub stage: usize,
    pub stage_id: String,
    pub seed: u32,
    pub question: Question,
    pub base_frequency: f64,
    pub second_frequency: f64,
}

impl QuestionReport {
    pub(crate) fn new(stage: usize, stage_id: &str, seed: u32, question: Question) -> Self {
        Self {
            stage,
            stage_id: stage_id.to_string(),
            seed,
            base_frequency: question.base_frequency(),
            second_frequency: question.second_frequency(),
            question,
        }
    }

    pub(crate) fn print(&self) {
        println!(
            "{} {} {}",
            "Stage".cyan().bold(),
            self.stage,
            format!("({}, seed {})", self.stage_id, self.seed).dimmed()
        );
        println!(
            "  {} {:>4} {}",
            "first ".bold(),
            note_name_of(self.question.base_note),
            format!("{:.2} Hz", self.base_frequency).dimmed()
        );
        println!(
            "  {} {:>4} {}",
            "second".bold(),
            note_name_of(self.question.second_note),
            format!("{:.2} Hz", self.second_frequency).dimmed()
        );
        println!(
            "  {} {} ({}, {})",
            "answer".bold(),
            self.question.interval.short_name.green(),
            self.question.interval.name,
            self.question.direction
        );
    }
}

/// Generates the question for `stage_arg` with the configured range and seed.
pub fn generate(config: &TrainerConfig, stage_arg: &str) -> Result<QuestionReport> {
    let (index, scale) = resolve_stage(stage_arg)?;
    let seed = config.resolve_seed();
    let mut generator = QuestionGenerator::seeded(seed);
    let question = generator
        .generate(scale, config.range(), None)
        .with_context(|| format!("Failed to generate a question for stage {}", scale.id))?;
    Ok(QuestionReport::new(index, &scale.id, seed, question))
}

/// Run the question command
pub fn run(config: &TrainerConfig, stage_arg: &str, json: bool) -> Result<ExitCode> {
    let report = generate(config, stage_arg)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        report.print();
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(seed: u32) -> TrainerConfig {
        TrainerConfig::default().with_seed(Some(seed))
    }

    #[test]
    fn test_generate_is_reproducible() {
        let a = generate(&config(11), "3").unwrap();
        let b = generate(&config(11), "penta-1-both").unwrap();
        assert_eq!(a.stage, 3);
        assert_eq!(b.stage, 3);
        assert_eq!(a.question, b.question);
        assert_eq!(a.seed, 11);
    }

    #[test]
    fn test_generate_respects_root_up_stage() {
        for seed in 0..20 {
            let report = generate(&config(seed), "0").unwrap();
            let q = &report.question;
            assert_eq!(q.base_note.rem_euclid(12), 9);
            assert!(q.second_note > q.base_note);
            assert!((report.base_frequency - q.base_frequency()).abs() < 1e-12);
        }
    }

    #[test]
    fn test_generate_reports_insufficient_range() {
        let narrow = config(1).with_range(Some(58), Some(59));
        let err = generate(&narrow, "0").unwrap_err();
        assert!(format!("{:#}", err).contains("penta-1-root-up"));
    }
}
