//! Unattended computer-vs-computer matches.

use crate::config::{Delays, MatchConfig, ModeKind};
use crate::session::{Session, SessionSummary};
use anyhow::Result;
use serde::Serialize;
use std::sync::Arc;
use tictacdollar::{Difficulty, Outcome, Side};
use tokio::sync::{Mutex, mpsc};
use tracing::{debug, info, instrument};

/// Aggregate results of a batch of matches.
///
/// Two advisors rarely bankrupt each other: each takes every completing
/// cell it sees and the reward outpaces the move cost. Most matches
/// therefore end at the configured move cap and count as `unfinished`.
/// That is the normal ending here, not a failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimulationReport {
    /// Matches played.
    pub matches: u32,
    /// Difficulty they were played at.
    pub difficulty: Difficulty,
    /// Matches won by the first side.
    pub first_wins: u32,
    /// Matches won by the second side.
    pub second_wins: u32,
    /// Matches that hit the move cap, usually most of them.
    pub unfinished: u32,
    /// Ties resolved across all matches.
    pub ties_resolved: u32,
    /// Board clears across all matches.
    pub refills: u32,
    /// Moves across all matches.
    pub total_moves: u64,
    /// Mean moves per match.
    pub average_moves: f64,
}

impl SimulationReport {
    fn record(&mut self, summary: &SessionSummary) {
        self.matches += 1;
        match summary.outcome {
            Outcome::Winner(Side::First) => self.first_wins += 1,
            Outcome::Winner(Side::Second) => self.second_wins += 1,
            Outcome::Undecided | Outcome::Tie => self.unfinished += 1,
        }
        self.ties_resolved += summary.ties_resolved;
        self.refills += summary.fill_count;
        self.total_moves += summary.moves as u64;
        self.average_moves = self.total_moves as f64 / f64::from(self.matches);
    }
}

/// Plays `matches` computer-vs-computer matches with no pauses.
///
/// Match `i` uses seed `base_seed + i`, so a batch is reproducible.
#[instrument(skip(config))]
pub async fn simulate(
    config: &MatchConfig,
    matches: u32,
    base_seed: u64,
) -> Result<SimulationReport> {
    let mut report = SimulationReport {
        difficulty: *config.difficulty(),
        ..SimulationReport::default()
    };

    // No human ever reads from this.
    let (_input_tx, input_rx) = mpsc::unbounded_channel();
    let input = Arc::new(Mutex::new(input_rx));

    for i in 0..matches {
        let match_config = config
            .clone()
            .with_mode(ModeKind::Autoplay)
            .with_delays(Delays::zero())
            .with_seed(base_seed.wrapping_add(u64::from(i)));

        // Dropping the receiver makes every emit a no-op.
        let (event_tx, _) = mpsc::unbounded_channel();
        let mut session = Session::from_config(&match_config, input.clone(), event_tx);
        let summary = session.run().await?;
        debug!(
            match_index = i,
            outcome = %summary.outcome,
            moves = summary.moves,
            "Match complete"
        );
        report.record(&summary);
    }

    info!(
        matches = report.matches,
        first_wins = report.first_wins,
        second_wins = report.second_wins,
        unfinished = report.unfinished,
        "Simulation complete"
    );
    Ok(report)
}
