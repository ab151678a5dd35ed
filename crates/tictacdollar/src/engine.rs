//! State transitions for a match.
//!
//! Every transition takes the current [`MatchState`] and produces the
//! next one. Nothing here blocks, sleeps or touches global state; the
//! only randomness is the injected generator used to pick who opens.

use super::action::{Move, RejectReason};
use super::contracts::{Contract, MoveContract};
use super::rules::{evaluate, find_connection, is_full};
use super::state::{Contestant, MatchSetup, MatchState, Outcome};
use super::tuning::Tuning;
use super::types::{Board, Cell, Side, Sides};
use super::Position;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Something a front end may want to react to, such as playing a sound.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchEvent {
    /// A marker was placed.
    Placed(Move),
    /// The move completed a connection; positions in row-major order.
    Connected(Vec<Position>),
    /// The board filled up and was cleared.
    BoardRefilled {
        /// Fill count after this clear.
        fill_count: u32,
    },
    /// The match ended with this outcome.
    Finished(Outcome),
}

/// An accepted move: the next state plus what happened on the way.
#[derive(Debug, Clone)]
pub struct MoveReport {
    state: MatchState,
    events: Vec<MatchEvent>,
}

impl MoveReport {
    /// The state after the move.
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Events in the order they occurred.
    pub fn events(&self) -> &[MatchEvent] {
        &self.events
    }

    /// Whether the move scored a connection.
    pub fn scored(&self) -> bool {
        self.events
            .iter()
            .any(|event| matches!(event, MatchEvent::Connected(_)))
    }

    /// Consumes the report, returning the next state.
    pub fn into_state(self) -> MatchState {
        self.state
    }
}

impl MatchState {
    /// Starts a match.
    ///
    /// Both sides get the starting balance for the setup's difficulty.
    /// The opening side is drawn from `rng` with even odds.
    #[instrument(skip(setup, rng), fields(difficulty = %setup.difficulty(), mode = ?setup.mode()))]
    pub fn new<R: Rng + ?Sized>(setup: MatchSetup, tuning: Tuning, rng: &mut R) -> Self {
        let difficulty = *setup.difficulty();
        let mode = *setup.mode();
        let balance = tuning.starting_balance(difficulty);
        let to_move = if rng.random_bool(0.5) {
            Side::First
        } else {
            Side::Second
        };

        let contestants = Sides::new(
            Contestant::new(setup.first(), balance, mode.is_computer(Side::First)),
            Contestant::new(setup.second(), balance, mode.is_computer(Side::Second)),
        );

        info!(balance, opener = %to_move, "Match initialized");

        Self {
            board: Board::new(),
            contestants,
            to_move,
            difficulty,
            mode,
            tuning,
            history: Vec::new(),
            highlight: None,
            fill_count: 0,
            cleared_at: 0,
            ties_resolved: 0,
            over: false,
            outcome: Outcome::Undecided,
        }
    }

    /// Starts a fresh match with the same contestants, mode and tuning.
    #[instrument(skip(self, rng))]
    pub fn restart<R: Rng + ?Sized>(&self, rng: &mut R) -> Self {
        Self::new(self.setup(), self.tuning, rng)
    }

    /// Plays the side to act at `position`.
    ///
    /// Returns the unchanged state if the move is rejected.
    #[instrument(skip(self), fields(side = %self.to_move))]
    pub fn apply_move(self, position: Position) -> Self {
        match self.play(position) {
            Ok(report) => report.into_state(),
            Err(reason) => {
                debug!(%reason, "Move rejected");
                self
            }
        }
    }

    /// Plays the side to act at `position`, reporting what happened.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectReason`] if the match is over, the cell is
    /// taken or the mover is bankrupt. `self` is never modified.
    pub fn play(&self, position: Position) -> Result<MoveReport, RejectReason> {
        self.submit(Move::new(self.to_move, position))
    }

    /// Applies a move on behalf of a specific side.
    ///
    /// Like [`MatchState::play`], but also rejects a move from the side
    /// that is not currently acting.
    ///
    /// # Errors
    ///
    /// Returns the [`RejectReason`] for the first failed precondition.
    #[instrument(skip(self), fields(mov = %action))]
    pub fn submit(&self, action: Move) -> Result<MoveReport, RejectReason> {
        MoveContract::pre(self, &action)?;

        let side = action.side;
        let tuning = self.tuning;
        let mut next = self.clone();
        let mut events = vec![MatchEvent::Placed(action)];

        next.board.set(action.position, Cell::Occupied(side));
        next.history.push(action);
        next.contestants[side].purse_mut().charge(tuning.move_cost());

        if let Some(run) = find_connection(&next.board, action.position, side) {
            next.contestants[side].purse_mut().score(tuning.reward());
            info!(%side, cells = run.len(), "Connection scored");
            events.push(MatchEvent::Connected(run.clone()));
            next.highlight = Some(run);
        }

        if is_full(&next.board) {
            next.clear_board();
            info!(fill_count = next.fill_count, "Board full, cleared");
            events.push(MatchEvent::BoardRefilled {
                fill_count: next.fill_count,
            });
        }

        next.to_move = side.opponent();

        next.outcome = evaluate(next.purses());
        next.over = next.outcome != Outcome::Undecided;
        if next.over {
            info!(outcome = %next.outcome, "Match finished");
            events.push(MatchEvent::Finished(next.outcome));
        }

        #[cfg(debug_assertions)]
        MoveContract::post(self, &next)?;

        Ok(MoveReport {
            state: next,
            events,
        })
    }

    /// Turns a tie into continued play.
    ///
    /// Both sides receive the tie bonus, the board is cleared and the
    /// match resumes. Any other outcome is left untouched.
    #[instrument(skip(self), fields(outcome = %self.outcome))]
    pub fn resolve_tie(mut self) -> Self {
        if !self.outcome.is_tie() {
            debug!("No tie to resolve");
            return self;
        }

        let bonus = self.tuning.tie_bonus();
        for side in Side::BOTH {
            self.contestants[side].purse_mut().credit(bonus);
        }
        self.clear_board();
        self.ties_resolved += 1;
        self.over = false;
        self.outcome = Outcome::Undecided;

        info!(bonus, ties_resolved = self.ties_resolved, "Tie resolved, play continues");
        self
    }

    /// Drops the connection highlight.
    #[instrument(skip(self))]
    pub fn clear_highlight(mut self) -> Self {
        self.highlight = None;
        self
    }

    fn clear_board(&mut self) {
        self.board = Board::new();
        self.fill_count += 1;
        self.cleared_at = self.history.len();
    }
}
