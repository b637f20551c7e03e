//! CLI argument definitions for the eartrain command-line interface.

use clap::{Parser, Subcommand};
use eartrain_synth::PlaybackMode;
use std::path::PathBuf;

/// Eartrain - interval ear-training drills and tone rendering
#[derive(Parser)]
#[command(name = "eartrain")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub(crate) struct Cli {
    /// Path to a JSON trainer config
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// List the stages in progression order
    Stages {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate one interval question for a stage
    Question {
        /// Stage index (0-31) or stage id such as penta-1-both
        #[arg(short, long)]
        stage: String,

        /// Lowest MIDI note of the range
        #[arg(long)]
        start: Option<i32>,

        /// Highest MIDI note of the range
        #[arg(long)]
        end: Option<i32>,

        /// RNG seed
        #[arg(long)]
        seed: Option<u32>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a question from the bare interval catalog
    Chromatic {
        /// Lowest base note (MIDI)
        #[arg(long)]
        min: Option<i32>,

        /// Highest base note (MIDI)
        #[arg(long)]
        max: Option<i32>,

        /// RNG seed
        #[arg(long)]
        seed: Option<u32>,
    },

    /// Render a stage question to a WAV file
    Render {
        /// Stage index (0-31) or stage id
        #[arg(short, long)]
        stage: String,

        /// Output WAV path
        #[arg(short, long)]
        out: PathBuf,

        /// Playback mode (melodic or harmonic)
        #[arg(short, long)]
        mode: Option<PlaybackMode>,

        /// RNG seed
        #[arg(long)]
        seed: Option<u32>,
    },

    /// Run a chained sequence of questions on one stage
    Drill {
        /// Stage index (0-31) or stage id
        #[arg(short, long)]
        stage: String,

        /// Number of questions
        #[arg(short, long, default_value_t = 10)]
        count: u32,

        /// RNG seed
        #[arg(long)]
        seed: Option<u32>,

        /// Also render the whole drill to this WAV file
        #[arg(short, long)]
        out: Option<PathBuf>,

        /// Playback mode for the rendered drill
        #[arg(short, long)]
        mode: Option<PlaybackMode>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_stages() {
        let cli = Cli::try_parse_from(["eartrain", "stages", "--json"]).unwrap();
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
        match cli.command {
            Commands::Stages { json } => assert!(json),
            _ => panic!("expected stages command"),
        }
    }

    #[test]
    fn test_cli_parses_question_with_globals() {
        let cli = Cli::try_parse_from([
            "eartrain",
            "question",
            "--stage",
            "penta-1-both",
            "--start",
            "48",
            "--seed",
            "7",
            "-v",
            "--config",
            "trainer.json",
        ])
        .unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.config, Some(PathBuf::from("trainer.json")));
        match cli.command {
            Commands::Question {
                stage,
                start,
                end,
                seed,
                json,
            } => {
                assert_eq!(stage, "penta-1-both");
                assert_eq!(start, Some(48));
                assert_eq!(end, None);
                assert_eq!(seed, Some(7));
                assert!(!json);
            }
            _ => panic!("expected question command"),
        }
    }

    #[test]
    fn test_cli_parses_render_mode() {
        let cli = Cli::try_parse_from([
            "eartrain", "render", "-s", "3", "-o", "out.wav", "--mode", "harmonic",
        ])
        .unwrap();
        match cli.command {
            Commands::Render { stage, out, mode, seed } => {
                assert_eq!(stage, "3");
                assert_eq!(out, PathBuf::from("out.wav"));
                assert_eq!(mode, Some(PlaybackMode::Harmonic));
                assert_eq!(seed, None);
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_mode() {
        assert!(Cli::try_parse_from([
            "eartrain", "render", "-s", "3", "-o", "out.wav", "--mode", "arpeggio",
        ])
        .is_err());
    }

    #[test]
    fn test_cli_drill_defaults() {
        let cli = Cli::try_parse_from(["eartrain", "drill", "--stage", "0"]).unwrap();
        match cli.command {
            Commands::Drill {
                count, out, mode, json, ..
            } => {
                assert_eq!(count, 10);
                assert!(out.is_none());
                assert!(mode.is_none());
                assert!(!json);
            }
            _ => panic!("expected drill command"),
        }
    }

    #[test]
    fn test_cli_requires_stage() {
        assert!(Cli::try_parse_from(["eartrain", "question"]).is_err());
    }
}
