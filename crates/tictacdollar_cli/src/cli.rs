//! Command-line interface for tictacdollar.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictacdollar::{Difficulty, Side};

/// Tictacdollar - connect three on a 5x5 board, paying for every move
#[derive(Parser, Debug)]
#[command(name = "tictacdollar")]
#[command(about = "Connect-three with an economy, in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a match config file (TOML). Defaults apply when absent.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a match in the terminal
    Play {
        /// Difficulty tier (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,

        /// Let the computer play this side (first, second)
        #[arg(long, conflicts_with = "pvp")]
        vs_computer: Option<Side>,

        /// Two humans at one keyboard
        #[arg(long)]
        pvp: bool,

        /// Seed for reproducible play
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Run computer-vs-computer matches and print a JSON report
    Simulate {
        /// Number of matches to play
        #[arg(short, long, default_value = "100")]
        matches: u32,

        /// Seed of the first match; match i uses seed + i
        #[arg(long, default_value = "0")]
        seed: u64,

        /// Difficulty tier (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },

    /// Print the effective configuration as TOML
    ShowConfig,

    /// Print the rules with the configured numbers
    Rules,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_play() {
        let cli = Cli::parse_from([
            "tictacdollar",
            "play",
            "--difficulty",
            "hard",
            "--vs-computer",
            "first",
        ]);
        match cli.command {
            Command::Play {
                difficulty,
                vs_computer,
                pvp,
                seed,
            } => {
                assert_eq!(difficulty, Some(Difficulty::Hard));
                assert_eq!(vs_computer, Some(Side::First));
                assert!(!pvp);
                assert_eq!(seed, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_simulate_defaults() {
        let cli = Cli::parse_from(["tictacdollar", "--config", "match.toml", "simulate"]);
        assert_eq!(cli.config, Some(PathBuf::from("match.toml")));
        match cli.command {
            Command::Simulate { matches, seed, difficulty } => {
                assert_eq!(matches, 100);
                assert_eq!(seed, 0);
                assert_eq!(difficulty, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_rules() {
        let cli = Cli::parse_from(["tictacdollar", "rules"]);
        assert!(matches!(cli.command, Command::Rules));
    }

    #[test]
    fn test_pvp_conflicts_with_vs_computer() {
        let result = Cli::try_parse_from([
            "tictacdollar",
            "play",
            "--pvp",
            "--vs-computer",
            "second",
        ]);
        assert!(result.is_err());
    }
}
