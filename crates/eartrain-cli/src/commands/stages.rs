//! Stages command implementation
//!
//! Lists the stage catalog in progression order.

use anyhow::Result;
use colored::Colorize;
use eartrain_theory::{catalog, ScaleDirection};
use serde::Serialize;
use std::process::ExitCode;

use crate::config::TrainerConfig;

/// One row of the stage listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StageRow {
    pub index: usize,
    pub id: String,
    pub name: String,
    pub direction: ScaleDirection,
    pub start_from_root: bool,
    pub required_correct: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_interval: Option<u32>,
}

/// Builds the listing, applying the test-mode completion rule.
pub fn stage_rows(test_mode: bool) -> Vec<StageRow> {
    catalog()
        .iter()
        .enumerate()
        .map(|(index, scale)| StageRow {
            index,
            id: scale.id.clone(),
            name: scale.name.clone(),
            direction: scale.direction,
            start_from_root: scale.start_from_root,
            required_correct: scale.required_correct_for(test_mode),
            max_interval: scale.max_interval,
        })
        .collect()
}

/// Run the stages command
pub fn run(config: &TrainerConfig, json: bool) -> Result<ExitCode> {
    let rows = stage_rows(config.test_mode);

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(ExitCode::SUCCESS);
    }

    println!("{}", "Stages".cyan().bold());
    for row in &rows {
        let max = row
            .max_interval
            .map(|m| format!(" max {}st", m))
            .unwrap_or_default();
        println!(
            "  {:>2}  {:<22} {:<18} {:>5}  x{}{}",
            row.index.to_string().dimmed(),
            row.id.bold(),
            row.name,
            row.direction.to_string(),
            row.required_correct,
            max.dimmed()
        );
    }
    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_rows() {
        let rows = stage_rows(false);
        assert_eq!(rows.len(), 32);
        assert_eq!(rows[0].id, "penta-1-root-up");
        assert!(rows[0].start_from_root);
        assert_eq!(rows[0].required_correct, 5);
        assert_eq!(rows[4].required_correct, 3);
        assert_eq!(rows[4].max_interval, Some(12));
        assert_eq!(rows[31].id, "chromatic-2-both");
    }

    #[test]
    fn test_stage_rows_test_mode() {
        assert!(stage_rows(true).iter().all(|r| r.required_correct == 1));
    }

    #[test]
    fn test_stage_rows_json() {
        let json = serde_json::to_value(stage_rows(false)).unwrap();
        assert_eq!(json[2]["direction"], "down");
        assert!(json[0].get("max_interval").is_none());
    }
}
