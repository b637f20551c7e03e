//! Chromatic command implementation
//!
//! Draws a question from the bare interval catalog, ignoring scales.

use anyhow::Result;
use colored::Colorize;
use eartrain_theory::{note_name_of, Question, QuestionGenerator};
use std::process::ExitCode;

use crate::config::TrainerConfig;

/// Generates a chromatic question within the configured base-note bounds.
pub fn generate(config: &TrainerConfig, seed: u32) -> Question {
    QuestionGenerator::seeded(seed).generate_chromatic(config.chromatic_min, config.chromatic_max)
}

/// Run the chromatic command
pub fn run(config: &TrainerConfig) -> Result<ExitCode> {
    let seed = config.resolve_seed();
    let question = generate(config, seed);

    println!(
        "{} {}",
        "Chromatic".cyan().bold(),
        format!(
            "({}..={}, seed {})",
            note_name_of(config.chromatic_min),
            note_name_of(config.chromatic_max),
            seed
        )
        .dimmed()
    );
    println!("  {}", question);
    println!(
        "  {} {} ({})",
        "answer".bold(),
        question.interval.short_name.green(),
        question.interval.name
    );
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eartrain_theory::Direction;

    #[test]
    fn test_chromatic_bounds() {
        let config = TrainerConfig::default().with_chromatic(Some(60), Some(62));
        for seed in 0..50 {
            let q = generate(&config, seed);
            assert!((60..=62).contains(&q.base_note));
            assert_eq!(q.direction, Direction::Up);
            assert_eq!(q.second_note - q.base_note, q.interval.semitones as i32);
        }
    }
}
