//! Eartrain integration test infrastructure
//!
//! Shared helpers for the cross-crate suites under `tests/`:
//!
//! - [`determinism`]: repeated-run byte comparison for rendered audio
//! - [`fixtures`]: question constraint checks shared by property tests
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p eartrain-tests
//! ```

pub mod determinism;
pub mod fixtures;
