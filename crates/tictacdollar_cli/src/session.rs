//! Match orchestration between two players.
//!
//! The engine never waits; every pause a human would notice (computer
//! thinking, connection highlight, tie announcement) lives here.

use crate::config::{Delays, MatchConfig};
use crate::players::{AdvisorPlayer, Command, HumanPlayer, InputLines, Player};
use anyhow::Result;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use std::time::Duration;
use tictacdollar::{
    MatchEvent, MatchState, Outcome, Position, Purse, RejectReason, Side, Sides, Tuning,
};
use tokio::sync::mpsc;
use tracing::{debug, info, instrument};

/// Messages sent from the session to the UI.
#[derive(Debug, Clone)]
pub enum SessionEvent {
    /// A match started, either fresh or after a restart.
    Started(MatchState),
    /// A human is expected to type a move.
    AwaitingInput {
        /// Name of the side to act.
        name: String,
    },
    /// A match was decided; a human may start another.
    PlayAgain {
        /// Name of the human being asked.
        name: String,
    },
    /// A computer player is choosing.
    Thinking {
        /// Name of the side to act.
        name: String,
    },
    /// A move was accepted.
    Moved {
        /// What the engine reported, in order.
        events: Vec<MatchEvent>,
        /// State after the move.
        state: MatchState,
    },
    /// The connection highlight expired.
    HighlightCleared(MatchState),
    /// A move was refused; the state is unchanged.
    Rejected {
        /// Name of the side that tried to move.
        name: String,
        /// Why.
        reason: RejectReason,
    },
    /// Input that is neither a position nor a command.
    Unrecognized(String),
    /// A player asked for the rules.
    Help(Tuning),
    /// A tie was turned into continued play.
    TieResolved(MatchState),
    /// The move cap was reached before anyone went bankrupt.
    Abandoned {
        /// Moves played when the match was abandoned.
        moves: usize,
    },
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Final outcome of the last match.
    pub outcome: Outcome,
    /// Name of the winner, if any.
    pub winner: Option<String>,
    /// Outcome of every match decided in this session, oldest first.
    pub results: Vec<Outcome>,
    /// Moves played in the last match.
    pub moves: usize,
    /// Final purses of the last match.
    pub purses: Sides<Purse>,
    /// Ties turned into continued play.
    pub ties_resolved: u32,
    /// Times the board was cleared after filling up.
    pub fill_count: u32,
    /// Fresh matches started by a restart command, mid-match or after a result.
    pub restarts: u32,
    /// The move cap ended the match.
    pub abandoned: bool,
    /// A player quit.
    pub quit: bool,
}

/// Orchestrates a match between two players.
pub struct Session {
    state: MatchState,
    players: Sides<Box<dyn Player>>,
    delays: Delays,
    max_moves: u32,
    rng: StdRng,
    restarts: u32,
    results: Vec<Outcome>,
    event_tx: mpsc::UnboundedSender<SessionEvent>,
}

impl Session {
    /// Creates a session around an already started match.
    pub fn new(
        state: MatchState,
        players: Sides<Box<dyn Player>>,
        delays: Delays,
        max_moves: u32,
        rng: StdRng,
        event_tx: mpsc::UnboundedSender<SessionEvent>,
    ) -> Self {
        Self {
            state,
            players,
            delays,
            max_moves,
            rng,
            restarts: 0,
            results: Vec::new(),
            event_tx,
        }
    }

    /// Builds a session from configuration.
    ///
    /// Computer sides get an [`AdvisorPlayer`] with its own generator
    /// split off the configured one; human sides read from `input`.
    #[instrument(skip_all)]
    pub fn from_config(
        config: &MatchConfig,
        input: InputLines,
        event_tx: mpsc::UnboundedSender<SessionEvent>,
    ) -> Self {
        let mut rng = config.rng();
        let state = MatchState::new(config.setup(), config.tuning_table(), &mut rng);
        let mode = config.game_mode();

        let mut player_for = |side: Side| -> Box<dyn Player> {
            let name = state.contestant(side).name().clone();
            if mode.is_computer(side) {
                let seed: u64 = rng.random();
                Box::new(AdvisorPlayer::new(
                    name,
                    StdRng::seed_from_u64(seed),
                    config.delays().think(),
                ))
            } else {
                Box::new(HumanPlayer::new(name, input.clone()))
            }
        };
        let players = Sides::new(player_for(Side::First), player_for(Side::Second));

        Self::new(
            state,
            players,
            *config.delays(),
            *config.max_moves(),
            rng,
            event_tx,
        )
    }

    /// Current state.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Runs until a player quits, the move cap hits, or a match is
    /// decided with no human left to offer a rematch to.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<SessionSummary> {
        info!(opener = %self.state.to_move(), "Starting match");
        self.emit(SessionEvent::Started(self.state.clone()));

        let mut quit = false;
        let mut abandoned = false;

        loop {
            let side = if self.state.is_over() {
                if self.state.outcome().is_tie() {
                    pause(self.delays.tie()).await;
                    self.state = self.state.clone().resolve_tie();
                    self.emit(SessionEvent::TieResolved(self.state.clone()));
                    continue;
                }
                let Some(side) = self.rematch_side() else {
                    break;
                };
                let name = self.players[side].name().to_string();
                self.emit(SessionEvent::PlayAgain { name });
                side
            } else {
                let moves = self.state.history().len();
                if moves >= self.max_moves as usize {
                    info!(moves, "Move cap reached, abandoning match");
                    self.emit(SessionEvent::Abandoned { moves });
                    abandoned = true;
                    break;
                }

                let side = self.state.to_move();
                let name = self.players[side].name().to_string();
                if self.players[side].is_human() {
                    self.emit(SessionEvent::AwaitingInput { name });
                } else {
                    self.emit(SessionEvent::Thinking { name });
                }
                side
            };

            let name = self.players[side].name().to_string();
            debug!(player = %name, "Waiting for command");
            let command = self.players[side].choose(&self.state).await?;

            match command {
                Command::Play(position) => self.play(&name, position).await,
                Command::Restart => {
                    info!(player = %name, "Restarting match");
                    self.state = self.state.restart(&mut self.rng);
                    self.restarts += 1;
                    self.emit(SessionEvent::Started(self.state.clone()));
                }
                Command::Quit => {
                    info!(player = %name, "Player quit");
                    quit = true;
                    break;
                }
                Command::Help => self.emit(SessionEvent::Help(*self.state.tuning())),
                Command::Unrecognized(input) => {
                    self.emit(SessionEvent::Unrecognized(input));
                }
            }
        }

        Ok(self.summary(quit, abandoned))
    }

    /// Human asked about a rematch: the side to act if human, else the other.
    fn rematch_side(&self) -> Option<Side> {
        let first = self.state.to_move();
        [first, first.opponent()]
            .into_iter()
            .find(|&side| self.players[side].is_human())
    }

    async fn play(&mut self, name: &str, position: Position) {
        match self.state.play(position) {
            Ok(report) => {
                let scored = report.scored();
                let events = report.events().to_vec();
                self.state = report.into_state();
                if self.state.outcome().winner().is_some() {
                    self.results.push(self.state.outcome());
                }
                self.emit(SessionEvent::Moved {
                    events,
                    state: self.state.clone(),
                });

                if scored {
                    pause(self.delays.highlight()).await;
                    self.state = self.state.clone().clear_highlight();
                    self.emit(SessionEvent::HighlightCleared(self.state.clone()));
                }
            }
            Err(reason) => {
                debug!(player = %name, %reason, "Move rejected");
                self.emit(SessionEvent::Rejected {
                    name: name.to_string(),
                    reason,
                });
            }
        }
    }

    fn summary(&self, quit: bool, abandoned: bool) -> SessionSummary {
        let outcome = self.state.outcome();
        SessionSummary {
            outcome,
            winner: outcome
                .winner()
                .map(|side| self.state.contestant(side).name().clone()),
            results: self.results.clone(),
            moves: self.state.history().len(),
            purses: self.state.purses(),
            ties_resolved: self.state.ties_resolved(),
            fill_count: self.state.fill_count(),
            restarts: self.restarts,
            abandoned,
            quit,
        }
    }

    fn emit(&self, event: SessionEvent) {
        if self.event_tx.send(event).is_err() {
            debug!("UI receiver closed, event dropped");
        }
    }
}

async fn pause(duration: Duration) {
    if !duration.is_zero() {
        tokio::time::sleep(duration).await;
    }
}
