//! Eartrain CLI library.
//!
//! Configuration loading, logger setup and the subcommand implementations
//! behind the `eartrain` binary.

pub mod commands;
pub mod config;
pub mod logging;
