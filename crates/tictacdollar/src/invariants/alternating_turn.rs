//! Alternating turn invariant.

use super::super::MatchState;
use super::Invariant;

/// Invariant: sides alternate, and the side to act is the opponent of
/// the last mover.
///
/// The first mover is random, so only alternation is checked, never
/// which side opened.
pub struct AlternatingTurnInvariant;

impl Invariant<MatchState> for AlternatingTurnInvariant {
    fn holds(state: &MatchState) -> bool {
        if state
            .history
            .windows(2)
            .any(|pair| pair[0].side == pair[1].side)
        {
            return false;
        }

        match state.history.last() {
            Some(last) => state.to_move == last.side.opponent(),
            None => true,
        }
    }

    fn description() -> &'static str {
        "Sides alternate turns"
    }
}
