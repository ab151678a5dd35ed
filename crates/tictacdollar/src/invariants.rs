//! First-class invariants for match state.
//!
//! Invariants are logical properties that must hold after every
//! accepted transition. They are testable independently and are
//! checked as move postconditions in debug builds.

pub mod alternating_turn;
pub mod board_history;
pub mod purse_ledger;

pub use alternating_turn::AlternatingTurnInvariant;
pub use board_history::BoardMatchesHistoryInvariant;
pub use purse_ledger::PurseLedgerInvariant;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implemented for tuples, so sets compose without boxing.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        if !I3::holds(state) {
            violations.push(InvariantViolation::new(I3::description()));
        }
        collect(violations)
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }
        collect(violations)
    }
}

/// All match invariants as a composable set.
pub type MatchInvariants = (
    BoardMatchesHistoryInvariant,
    AlternatingTurnInvariant,
    PurseLedgerInvariant,
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fresh_match, pos};
    use crate::{Cell, Side};

    #[test]
    fn test_invariant_set_holds_for_fresh_match() {
        let state = fresh_match(Side::First);
        assert!(MatchInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let state = fresh_match(Side::First)
            .apply_move(pos(0, 0))
            .apply_move(pos(4, 4))
            .apply_move(pos(0, 1));
        assert_eq!(state.history().len(), 3);
        assert!(MatchInvariants::check_all(&state).is_ok());
    }

    #[test]
    fn test_invariant_set_reports_every_violation() {
        let mut state = fresh_match(Side::First).apply_move(pos(2, 2));
        state.board.set(pos(0, 0), Cell::Occupied(Side::Second));
        state.contestants[Side::Second].purse_mut().charge(3);

        let violations = MatchInvariants::check_all(&state).unwrap_err();
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_two_invariants_as_set() {
        type TwoInvariants = (BoardMatchesHistoryInvariant, AlternatingTurnInvariant);
        let state = fresh_match(Side::Second).apply_move(pos(1, 1));
        assert!(TwoInvariants::check_all(&state).is_ok());
    }
}
