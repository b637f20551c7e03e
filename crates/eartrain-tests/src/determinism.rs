//! Repeated-run output comparison.

/// Result of running a generator several times.
#[derive(Debug, Clone)]
pub struct DeterminismResult {
    /// Whether every run matched the first.
    pub is_deterministic: bool,
    /// Number of runs performed.
    pub runs: usize,
    /// BLAKE3 hex hash of the first run.
    pub hash: String,
    /// `(run, byte offset)` of the first mismatch.
    pub first_diff: Option<(usize, usize)>,
}

/// Runs `generate_fn` `runs` times and compares every output to the first.
pub fn verify_determinism<F, O>(generate_fn: F, runs: usize) -> DeterminismResult
where
    F: Fn() -> O,
    O: AsRef<[u8]>,
{
    assert!(runs >= 2, "Must run at least 2 times to verify determinism");

    let reference = generate_fn();
    let reference = reference.as_ref();
    let hash = blake3::hash(reference).to_hex().to_string();

    for run in 1..runs {
        let output = generate_fn();
        let output = output.as_ref();
        if output != reference {
            let offset = reference
                .iter()
                .zip(output)
                .position(|(a, b)| a != b)
                .unwrap_or_else(|| reference.len().min(output.len()));
            return DeterminismResult {
                is_deterministic: false,
                runs,
                hash,
                first_diff: Some((run, offset)),
            };
        }
    }

    DeterminismResult {
        is_deterministic: true,
        runs,
        hash,
        first_diff: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_identical_runs() {
        let result = verify_determinism(|| vec![1u8, 2, 3], 3);
        assert!(result.is_deterministic);
        assert_eq!(result.runs, 3);
        assert!(result.first_diff.is_none());
    }

    #[test]
    fn test_reports_first_difference() {
        let counter = Cell::new(0u8);
        let result = verify_determinism(
            || {
                counter.set(counter.get() + 1);
                vec![0u8, 0, counter.get()]
            },
            2,
        );
        assert!(!result.is_deterministic);
        assert_eq!(result.first_diff, Some((1, 2)));
    }
}
