//! Contract-based validation for moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! `{P} move {Q}`. A failed precondition is a rejection, never a panic.

use super::MatchState;
use super::action::{Move, RejectReason};
use super::invariants::{InvariantSet, MatchInvariants};
use tracing::{error, instrument};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), RejectReason>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), RejectReason>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the match has not ended.
pub struct MatchLive;

impl MatchLive {
    /// Rejects with [`RejectReason::MatchOver`] once the match is over.
    #[instrument(skip(state))]
    pub fn check(state: &MatchState) -> Result<(), RejectReason> {
        if state.is_over() {
            Err(RejectReason::MatchOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: the move belongs to the side whose turn it is.
pub struct SideToAct;

impl SideToAct {
    /// Rejects with [`RejectReason::WrongTurn`] for the idle side.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &MatchState) -> Result<(), RejectReason> {
        if mov.side != state.to_move() {
            Err(RejectReason::WrongTurn(mov.side))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the target cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects with [`RejectReason::CellOccupied`].
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &MatchState) -> Result<(), RejectReason> {
        if !state.board().is_empty(mov.position) {
            Err(RejectReason::CellOccupied(mov.position))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the mover can pay for the move.
pub struct MoverSolvent;

impl MoverSolvent {
    /// Rejects with [`RejectReason::Bankrupt`] at a balance of zero or less.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &MatchState) -> Result<(), RejectReason> {
        if state.contestant(mov.side).purse().is_bankrupt() {
            Err(RejectReason::Bankrupt(mov.side))
        } else {
            Ok(())
        }
    }
}

/// Composite precondition: every check above, in order.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    #[instrument(skip(state))]
    pub fn check(mov: &Move, state: &MatchState) -> Result<(), RejectReason> {
        MatchLive::check(state)?;
        SideToAct::check(mov, state)?;
        CellIsEmpty::check(mov, state)?;
        MoverSolvent::check(mov, state)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for move actions.
///
/// Preconditions: [`LegalMove`].
///
/// Postconditions: every invariant in [`MatchInvariants`].
pub struct MoveContract;

impl Contract<MatchState, Move> for MoveContract {
    fn pre(state: &MatchState, action: &Move) -> Result<(), RejectReason> {
        LegalMove::check(action, state)
    }

    fn post(_before: &MatchState, after: &MatchState) -> Result<(), RejectReason> {
        MatchInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            error!(%descriptions, "Move postcondition failed");
            RejectReason::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fresh_match, pos};
    use crate::{Cell, Side};

    #[test]
    fn test_precondition_empty_cell() {
        let state = fresh_match(Side::First);
        let action = Move::new(Side::First, pos(2, 2));
        assert!(MoveContract::pre(&state, &action).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let state = fresh_match(Side::First).apply_move(pos(2, 2));
        let action = Move::new(Side::Second, pos(2, 2));
        assert_eq!(
            MoveContract::pre(&state, &action),
            Err(RejectReason::CellOccupied(pos(2, 2)))
        );
    }

    #[test]
    fn test_precondition_wrong_turn() {
        let state = fresh_match(Side::First);
        let action = Move::new(Side::Second, pos(2, 2));
        assert_eq!(
            MoveContract::pre(&state, &action),
            Err(RejectReason::WrongTurn(Side::Second))
        );
    }

    #[test]
    fn test_precondition_bankrupt() {
        let mut state = fresh_match(Side::First);
        state.contestants[Side::First].purse_mut().charge(15);
        let action = Move::new(Side::First, pos(2, 2));
        assert_eq!(
            MoveContract::pre(&state, &action),
            Err(RejectReason::Bankrupt(Side::First))
        );
    }

    #[test]
    fn test_precondition_match_over_checked_first() {
        let mut state = fresh_match(Side::First).apply_move(pos(2, 2));
        state.over = true;
        let action = Move::new(Side::First, pos(2, 2));
        assert_eq!(
            MoveContract::pre(&state, &action),
            Err(RejectReason::MatchOver)
        );
    }

    #[test]
    fn test_postcondition_holds_after_move() {
        let before = fresh_match(Side::First);
        let after = before.clone().apply_move(pos(0, 0));
        assert!(MoveContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_corruption() {
        let before = fresh_match(Side::First);
        let mut after = before.clone().apply_move(pos(0, 0));
        after.board.set(pos(4, 4), Cell::Occupied(Side::Second));
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(RejectReason::InvariantViolation(_))
        ));
    }
}
