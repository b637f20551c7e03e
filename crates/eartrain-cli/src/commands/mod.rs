//! CLI command implementations

pub mod chromatic;
pub mod drill;
pub mod question;
pub mod render;
pub mod stages;

use anyhow::{anyhow, Result};
use eartrain_theory::{catalog, find_stage, ScaleDescriptor, STAGE_COUNT};

/// Resolves a `--stage` argument given as an index or a stage id.
pub fn resolve_stage(arg: &str) -> Result<(usize, &'static ScaleDescriptor)> {
    if let Ok(index) = arg.parse::<usize>() {
        let scale = catalog().get(index).ok_or_else(|| {
            anyhow!("stage {} out of range (0..{})", index, STAGE_COUNT)
        })?;
        return Ok((index, scale));
    }

    let scale = find_stage(arg)?;
    let index = catalog()
        .iter()
        .position(|s| s.id == scale.id)
        .ok_or_else(|| anyhow!("stage '{}' missing from catalog", arg))?;
    Ok((index, scale))
}
