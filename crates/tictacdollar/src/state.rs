//! Match state: contestants, purses, board and terminal fields.

use super::action::Move;
use super::tuning::{Difficulty, Tuning};
use super::types::{Board, Side, Sides};
use super::Position;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Who controls each side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameMode {
    /// Two humans share the board.
    #[default]
    HumanVsHuman,
    /// The given side is played by the move advisor.
    VsComputer(Side),
    /// Both sides are played by the move advisor.
    ComputerVsComputer,
}

impl GameMode {
    /// Whether `side` is computer-controlled in this mode.
    pub fn is_computer(self, side: Side) -> bool {
        match self {
            GameMode::HumanVsHuman => false,
            GameMode::VsComputer(computer) => computer == side,
            GameMode::ComputerVsComputer => true,
        }
    }
}

/// How a match stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Play continues.
    #[default]
    Undecided,
    /// The given side won.
    Winner(Side),
    /// Both sides went bankrupt with equal stars.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Outcome::Winner(side) => Some(*side),
            Outcome::Undecided | Outcome::Tie => None,
        }
    }

    /// Returns true for a tie.
    pub fn is_tie(&self) -> bool {
        matches!(self, Outcome::Tie)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "Undecided"),
            Outcome::Winner(side) => write!(f, "Side {} wins", side),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// A side's money and score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Purse {
    balance: i32,
    stars: u32,
}

impl Purse {
    /// Creates a purse.
    pub const fn new(balance: i32, stars: u32) -> Self {
        Self { balance, stars }
    }

    /// Remaining money; zero or below means bankrupt.
    pub const fn balance(&self) -> i32 {
        self.balance
    }

    /// Number of connections scored.
    pub const fn stars(&self) -> u32 {
        self.stars
    }

    /// Balance at or below zero.
    pub const fn is_bankrupt(&self) -> bool {
        self.balance <= 0
    }

    pub(crate) fn charge(&mut self, amount: i32) {
        self.balance -= amount;
    }

    pub(crate) fn score(&mut self, reward: i32) {
        self.balance += reward;
        self.stars += 1;
    }

    pub(crate) fn credit(&mut self, amount: i32) {
        self.balance += amount;
    }
}

/// Name and marker chosen for one side before the match starts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_new::new)]
pub struct ContestantSetup {
    /// Display name.
    #[new(into)]
    name: String,
    /// Symbol shown on the board.
    #[new(into)]
    marker: String,
}

/// Everything needed to start a match.
///
/// Markers are expected to be non-empty and distinct. That is the
/// caller's contract; the engine does not check it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct MatchSetup {
    /// First slot's name and marker.
    first: ContestantSetup,
    /// Second slot's name and marker.
    second: ContestantSetup,
    /// Tier fixing the starting balance.
    difficulty: Difficulty,
    /// Who is computer-controlled.
    mode: GameMode,
}

/// One side of a running match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Contestant {
    /// Display name.
    name: String,
    /// Symbol shown on the board.
    marker: String,
    /// Balance and stars.
    purse: Purse,
    /// Played by the move advisor.
    computer: bool,
}

impl Contestant {
    pub(crate) fn new(setup: &ContestantSetup, balance: i32, computer: bool) -> Self {
        Self {
            name: setup.name.clone(),
            marker: setup.marker.clone(),
            purse: Purse::new(balance, 0),
            computer,
        }
    }

    pub(crate) fn purse_mut(&mut self) -> &mut Purse {
        &mut self.purse
    }

    pub(crate) fn setup(&self) -> ContestantSetup {
        ContestantSetup::new(self.name.clone(), self.marker.clone())
    }
}

/// Complete match state.
///
/// Created by [`MatchState::new`], replaced wholesale by every
/// transition, never mutated in place by callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub(crate) board: Board,
    pub(crate) contestants: Sides<Contestant>,
    pub(crate) to_move: Side,
    pub(crate) difficulty: Difficulty,
    pub(crate) mode: GameMode,
    pub(crate) tuning: Tuning,
    pub(crate) history: Vec<Move>,
    pub(crate) highlight: Option<Vec<Position>>,
    pub(crate) fill_count: u32,
    pub(crate) cleared_at: usize,
    pub(crate) ties_resolved: u32,
    pub(crate) over: bool,
    pub(crate) outcome: Outcome,
}

impl MatchState {
    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns both contestants.
    pub fn contestants(&self) -> &Sides<Contestant> {
        &self.contestants
    }

    /// Returns one contestant.
    pub fn contestant(&self, side: Side) -> &Contestant {
        &self.contestants[side]
    }

    /// Both purses, by side.
    pub fn purses(&self) -> Sides<Purse> {
        self.contestants.map(|c| c.purse)
    }

    /// The side whose turn it is.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// The difficulty the match was started with.
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Who is computer-controlled.
    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The tuning table in force.
    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Every accepted move, oldest first. Never truncated.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Moves placed since the board was last cleared.
    pub fn moves_on_board(&self) -> &[Move] {
        self.history.get(self.cleared_at..).unwrap_or_default()
    }

    /// Positions of the most recent scoring connection, until cleared.
    pub fn highlight(&self) -> Option<&[Position]> {
        self.highlight.as_deref()
    }

    /// How many times the board has been cleared mid-match.
    pub fn fill_count(&self) -> u32 {
        self.fill_count
    }

    /// How many ties have been resolved into continued play.
    pub fn ties_resolved(&self) -> u32 {
        self.ties_resolved
    }

    /// Whether the match has ended.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Current outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Whether the side to act is computer-controlled and may move.
    pub fn awaiting_computer(&self) -> bool {
        !self.over && self.contestants[self.to_move].computer
    }

    /// Reconstructs the setup this match was started from.
    pub fn setup(&self) -> MatchSetup {
        MatchSetup::new(
            self.contestants[Side::First].setup(),
            self.contestants[Side::Second].setup(),
            self.difficulty,
            self.mode,
        )
    }
}
