//! End-of-match evaluation.

use super::super::{Outcome, Purse, Side, Sides};
use std::cmp::Ordering;
use tracing::instrument;

/// Decides the outcome from both purses.
///
/// One bankrupt side loses outright. Two bankrupt sides are ranked by
/// stars, with equal stars a tie. Otherwise the match is undecided.
#[instrument]
pub fn evaluate(purses: Sides<Purse>) -> Outcome {
    let first = purses[Side::First];
    let second = purses[Side::Second];

    match (first.is_bankrupt(), second.is_bankrupt()) {
        (false, false) => Outcome::Undecided,
        (true, false) => Outcome::Winner(Side::Second),
        (false, true) => Outcome::Winner(Side::First),
        (true, true) => match first.stars().cmp(&second.stars()) {
            Ordering::Greater => Outcome::Winner(Side::First),
            Ordering::Less => Outcome::Winner(Side::Second),
            Ordering::Equal => Outcome::Tie,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_solvent_undecided() {
        let purses = Sides::new(Purse::new(1, 0), Purse::new(12, 4));
        assert_eq!(evaluate(purses), Outcome::Undecided);
    }

    #[test]
    fn test_single_bankruptcy_loses_regardless_of_stars() {
        let purses = Sides::new(Purse::new(0, 9), Purse::new(3, 0));
        assert_eq!(evaluate(purses), Outcome::Winner(Side::Second));

        let purses = Sides::new(Purse::new(3, 0), Purse::new(-1, 9));
        assert_eq!(evaluate(purses), Outcome::Winner(Side::First));
    }

    #[test]
    fn test_double_bankruptcy_more_stars_wins() {
        let purses = Sides::new(Purse::new(0, 3), Purse::new(0, 2));
        assert_eq!(evaluate(purses), Outcome::Winner(Side::First));

        let purses = Sides::new(Purse::new(0, 1), Purse::new(0, 2));
        assert_eq!(evaluate(purses), Outcome::Winner(Side::Second));
    }

    #[test]
    fn test_double_bankruptcy_equal_stars_ties() {
        let purses = Sides::new(Purse::new(0, 2), Purse::new(0, 2));
        assert_eq!(evaluate(purses), Outcome::Tie);
    }
}
