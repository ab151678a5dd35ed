//! Tictacdollar - terminal entry point.

#![warn(missing_docs)]

use anyhow::Result;
use clap::Parser;
use tictacdollar_cli::cli::{Cli, Command};
use tictacdollar_cli::{
    MatchConfig, ModeKind, Session, SessionEvent, render, simulate, spawn_line_reader,
};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Command::Play {
            difficulty,
            vs_computer,
            pvp,
            seed,
        } => {
            let mut config = config;
            if let Some(difficulty) = difficulty {
                config = config.with_difficulty(difficulty);
            }
            if let Some(side) = vs_computer {
                config = config.with_computer_side(side);
            }
            if pvp {
                config = config.with_mode(ModeKind::Pvp);
            }
            if let Some(seed) = seed {
                config = config.with_seed(seed);
            }
            run_play(config).await
        }
        Command::Simulate {
            matches,
            seed,
            difficulty,
        } => {
            let config = match difficulty {
                Some(difficulty) => config.with_difficulty(difficulty),
                None => config,
            };
            let report = simulate(&config, matches, seed).await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(())
        }
        Command::ShowConfig => {
            print!("{}", config.to_toml()?);
            Ok(())
        }
        Command::Rules => {
            println!("{}", render::rules(&config.tuning_table()));
            Ok(())
        }
    }
}

fn load_config(path: Option<&std::path::Path>) -> Result<MatchConfig> {
    match path {
        Some(path) => Ok(MatchConfig::from_file(path)?),
        None => {
            debug!("No config file given, using defaults");
            Ok(MatchConfig::default())
        }
    }
}

/// Plays one interactive session on stdin/stdout.
#[instrument(skip(config), fields(mode = %config.mode(), difficulty = %config.difficulty()))]
async fn run_play(config: MatchConfig) -> Result<()> {
    info!("Starting interactive session");

    let input = spawn_line_reader(std::io::BufReader::new(std::io::stdin()));

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let ui = tokio::spawn(async move {
        while let Some(event) = event_rx.recv().await {
            print_event(&event);
        }
    });

    let mut session = Session::from_config(&config, input, event_tx);
    let summary = session.run().await?;
    drop(session);
    ui.await?;

    if summary.quit {
        println!("Bye.");
    }
    debug!(?summary, "Session finished");
    Ok(())
}

fn print_event(event: &SessionEvent) {
    for line in render::describe(event) {
        println!("{}", line);
    }
    if let Some(state) = render::snapshot(event) {
        println!();
        print!("{}", render::board(state));
        println!("{}", render::status(state));
    }
}
