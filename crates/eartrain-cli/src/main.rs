//! Eartrain CLI - interval ear-training from the command line
//!
//! Lists stages, generates questions and renders them to WAV.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

use eartrain_cli::commands;
use eartrain_cli::config::TrainerConfig;
use eartrain_cli::logging;

mod cli_args;

use cli_args::{Cli, Commands};

fn dispatch(cli: Cli) -> Result<ExitCode> {
    let config = TrainerConfig::load_or_default(cli.config.as_deref())?;

    let config = match &cli.command {
        Commands::Stages { .. } => config,
        Commands::Question {
            start, end, seed, ..
        } => config.with_range(*start, *end).with_seed(*seed),
        Commands::Chromatic { min, max, seed } => {
            config.with_chromatic(*min, *max).with_seed(*seed)
        }
        Commands::Render { mode, seed, .. } => config.with_playback(*mode).with_seed(*seed),
        Commands::Drill { mode, seed, .. } => config.with_playback(*mode).with_seed(*seed),
    };
    config.validate()?;

    match cli.command {
        Commands::Stages { json } => commands::stages::run(&config, json),
        Commands::Question { stage, json, .. } => commands::question::run(&config, &stage, json),
        Commands::Chromatic { .. } => commands::chromatic::run(&config),
        Commands::Render { stage, out, .. } => commands::render::run(&config, &stage, &out),
        Commands::Drill {
            stage,
            count,
            out,
            json,
            ..
        } => commands::drill::run(&config, &stage, count, out.as_deref(), json),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match dispatch(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}
