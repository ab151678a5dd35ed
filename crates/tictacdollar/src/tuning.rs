//! Difficulty tiers and the economic constants of a match.

use serde::{Deserialize, Serialize};

/// Difficulty tier; fixes both sides' starting balance.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Difficulty {
    /// Largest starting balance.
    Easy,
    /// Middle starting balance.
    #[default]
    Medium,
    /// Smallest starting balance.
    Hard,
}

/// The numbers a match is played with.
///
/// A match keeps one `Tuning` for its whole lifetime, including restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tuning {
    easy: i32,
    medium: i32,
    hard: i32,
    move_cost: i32,
    reward: i32,
    tie_bonus: i32,
}

impl Tuning {
    /// The canonical table: 20 / 15 / 10.
    pub const fn standard() -> Self {
        Self {
            easy: 20,
            medium: 15,
            hard: 10,
            move_cost: 1,
            reward: 5,
            tie_bonus: 10,
        }
    }

    /// The longer-running table: 30 / 20 / 15.
    pub const fn generous() -> Self {
        Self {
            easy: 30,
            medium: 20,
            hard: 15,
            ..Self::standard()
        }
    }

    /// Starting balance for both sides at the given tier.
    pub const fn starting_balance(&self, difficulty: Difficulty) -> i32 {
        match difficulty {
            Difficulty::Easy => self.easy,
            Difficulty::Medium => self.medium,
            Difficulty::Hard => self.hard,
        }
    }

    /// Charged to the mover for every accepted move.
    pub const fn move_cost(&self) -> i32 {
        self.move_cost
    }

    /// Paid to the mover when the move completes a connection.
    pub const fn reward(&self) -> i32 {
        self.reward
    }

    /// Paid to both sides when a tie is resolved.
    pub const fn tie_bonus(&self) -> i32 {
        self.tie_bonus
    }
}

impl Default for Tuning {
    fn default() -> Self {
        Self::standard()
    }
}

/// Named tuning tables.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum TuningPreset {
    /// [`Tuning::standard`].
    #[default]
    Standard,
    /// [`Tuning::generous`].
    Generous,
}

impl TuningPreset {
    /// Returns the table this preset names.
    pub const fn tuning(self) -> Tuning {
        match self {
            TuningPreset::Standard => Tuning::standard(),
            TuningPreset::Generous => Tuning::generous(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table() {
        let tuning = Tuning::standard();
        assert_eq!(tuning.starting_balance(Difficulty::Easy), 20);
        assert_eq!(tuning.starting_balance(Difficulty::Medium), 15);
        assert_eq!(tuning.starting_balance(Difficulty::Hard), 10);
        assert_eq!(tuning.reward(), 5);
        assert_eq!(tuning.tie_bonus(), 10);
    }

    #[test]
    fn test_generous_only_changes_balances() {
        let tuning = TuningPreset::Generous.tuning();
        assert_eq!(tuning.starting_balance(Difficulty::Easy), 30);
        assert_eq!(tuning.starting_balance(Difficulty::Medium), 20);
        assert_eq!(tuning.starting_balance(Difficulty::Hard), 15);
        assert_eq!(tuning.reward(), Tuning::standard().reward());
        assert_eq!(tuning.tie_bonus(), Tuning::standard().tie_bonus());
    }

    #[test]
    fn test_difficulty_parses() {
        assert_eq!("HARD".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(Difficulty::default(), Difficulty::Medium);
    }
}
