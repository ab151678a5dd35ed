//! Purse ledger invariant: balances are fully explained by the history.

use super::super::{MatchState, Side};
use super::Invariant;

/// Invariant: for each side,
/// `balance = start - cost * moves + reward * stars + bonus * ties_resolved`.
pub struct PurseLedgerInvariant;

impl PurseLedgerInvariant {
    /// The balance `side` should hold according to the ledger.
    pub fn expected_balance(state: &MatchState, side: Side) -> i64 {
        let tuning = state.tuning;
        let moves = state.history.iter().filter(|m| m.side == side).count() as i64;
        let stars = i64::from(state.contestants[side].purse().stars());

        i64::from(tuning.starting_balance(state.difficulty))
            - i64::from(tuning.move_cost()) * moves
            + i64::from(tuning.reward()) * stars
            + i64::from(tuning.tie_bonus()) * i64::from(state.ties_resolved)
    }
}

impl Invariant<MatchState> for PurseLedgerInvariant {
    fn holds(state: &MatchState) -> bool {
        Side::BOTH.into_iter().all(|side| {
            i64::from(state.contestants[side].purse().balance())
                == Self::expected_balance(state, side)
        })
    }

    fn description() -> &'static str {
        "Balances match moves, stars and tie bonuses"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{fresh_match, pos};

    #[test]
    fn test_fresh_match_holds() {
        let state = fresh_match(Side::First);
        assert!(PurseLedgerInvariant::holds(&state));
        assert_eq!(PurseLedgerInvariant::expected_balance(&state, Side::First), 15);
    }

    #[test]
    fn test_holds_through_a_scoring_move() {
        let state = fresh_match(Side::First)
            .apply_move(pos(0, 0))
            .apply_move(pos(4, 4))
            .apply_move(pos(0, 1))
            .apply_move(pos(4, 3))
            .apply_move(pos(0, 2));
        assert_eq!(state.contestant(Side::First).purse().stars(), 1);
        assert!(PurseLedgerInvariant::holds(&state));
    }

    #[test]
    fn test_unexplained_credit_violates() {
        let mut state = fresh_match(Side::First).apply_move(pos(0, 0));
        state.contestants[Side::First].purse_mut().credit(1);
        assert!(!PurseLedgerInvariant::holds(&state));
    }
}
