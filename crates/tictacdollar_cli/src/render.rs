//! Plain-text rendering of matches and session events.

use crate::session::SessionEvent;
use tictacdollar::{
    BOARD_SIZE, Cell, Difficulty, MatchEvent, MatchState, Outcome, Position, Side, Tuning,
};

/// Draws the board with contestant markers.
///
/// Cells in the current highlight are wrapped in brackets.
pub fn board(state: &MatchState) -> String {
    let width = state
        .contestants()
        .iter()
        .map(|(_, c)| c.marker().chars().count())
        .max()
        .unwrap_or(1)
        .max(1);

    let mut out = String::from("   ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!(" {:^w$} ", col, w = width));
    }
    out.push('\n');

    let highlight = state.highlight().unwrap_or_default();
    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{:>2} ", row));
        for col in 0..BOARD_SIZE {
            let Some(pos) = Position::new(row, col) else {
                continue;
            };
            let symbol = match state.board().get(pos) {
                Cell::Empty => ".".to_string(),
                Cell::Occupied(side) => state.contestant(side).marker().clone(),
            };
            if highlight.contains(&pos) {
                out.push_str(&format!("[{:^w$}]", symbol, w = width));
            } else {
                out.push_str(&format!(" {:^w$} ", symbol, w = width));
            }
        }
        out.push('\n');
    }
    out
}

/// Board number, one line per side, then whose turn it is or how it ended.
pub fn status(state: &MatchState) -> String {
    let mut lines = vec![format!("Board {}", state.fill_count() + 1)];
    lines.extend(state.contestants().iter().map(|(_, c)| {
        let purse = c.purse();
        let stars = purse.stars();
        format!(
            "{} ({}): ${}, {} star{}{}",
            c.name(),
            c.marker(),
            purse.balance(),
            stars,
            if stars == 1 { "" } else { "s" },
            if *c.computer() { " [computer]" } else { "" },
        )
    }));

    lines.push(match state.outcome() {
        Outcome::Undecided => format!("Turn: {}", name(state, state.to_move())),
        Outcome::Winner(side) => format!("{} wins!", name(state, side)),
        Outcome::Tie => "Both sides are broke with equal stars. It's a tie!".to_string(),
    });
    lines.join("\n")
}

/// How to play, with the numbers of the table in force.
pub fn rules(tuning: &Tuning) -> String {
    let balances = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
        .map(|tier| format!("{} ${}", tier, tuning.starting_balance(tier)))
        .join(", ");
    [
        "How to play".to_string(),
        "  Take turns placing your marker on the 5x5 board by typing row,col (0-4).".to_string(),
        format!("  Every move costs ${}.", tuning.move_cost()),
        format!(
            "  A straight line of three or more of your markers through the cell you just played \
             (row, column or diagonal) earns a star and ${}.",
            tuning.reward()
        ),
        "  A full board is cleared; balances and stars carry over.".to_string(),
        "  Run out of money and you lose. If both sides are broke, more stars wins.".to_string(),
        format!(
            "  Broke with equal stars is a tie: both sides get ${} and play goes on.",
            tuning.tie_bonus()
        ),
        format!("Starting money: {}.", balances),
        "Commands: 'r' restart, 'q' quit, 'h' help.".to_string(),
    ]
    .join("\n")
}

/// Describes an event in one or more lines.
pub fn describe(event: &SessionEvent) -> Vec<String> {
    match event {
        SessionEvent::Started(state) => vec![format!(
            "New match on {}. {} opens.",
            state.difficulty(),
            name(state, state.to_move())
        )],
        SessionEvent::AwaitingInput { name } => vec![format!(
            "{}, enter row,col (0-4), or 'r' restart, 'q' quit, 'h' help:",
            name
        )],
        SessionEvent::PlayAgain { name } => {
            vec![format!("{}, play again? 'r' for a new match, 'q' to quit:", name)]
        }
        SessionEvent::Thinking { name } => vec![format!("{} is thinking...", name)],
        SessionEvent::Moved { events, state } => events
            .iter()
            .map(|event| describe_match_event(event, state))
            .collect(),
        SessionEvent::HighlightCleared(_) => Vec::new(),
        SessionEvent::Rejected { name, reason } => {
            vec![format!("{} can't move there: {}", name, reason)]
        }
        SessionEvent::Unrecognized(input) => {
            vec![format!("Didn't understand {:?}. Try \"2,3\".", input)]
        }
        SessionEvent::Help(tuning) => rules(tuning).lines().map(str::to_string).collect(),
        SessionEvent::TieResolved(state) => vec![format!(
            "Tie! Both sides get ${} and the board is cleared.",
            state.tuning().tie_bonus()
        )],
        SessionEvent::Abandoned { moves } => {
            vec![format!("Match abandoned after {} moves.", moves)]
        }
    }
}

/// The state an event carries, if it should trigger a redraw.
pub fn snapshot(event: &SessionEvent) -> Option<&MatchState> {
    match event {
        SessionEvent::Started(state)
        | SessionEvent::Moved { state, .. }
        | SessionEvent::HighlightCleared(state)
        | SessionEvent::TieResolved(state) => Some(state),
        _ => None,
    }
}

fn describe_match_event(event: &MatchEvent, state: &MatchState) -> String {
    match event {
        MatchEvent::Placed(mov) => format!("{} plays {}", name(state, mov.side), mov.position),
        MatchEvent::Connected(run) => format!(
            "Connection of {}! +${}",
            run.len(),
            state.tuning().reward()
        ),
        MatchEvent::BoardRefilled { fill_count } => {
            format!("Board full, cleared (#{})", fill_count)
        }
        MatchEvent::Finished(outcome) => match outcome.winner() {
            Some(side) if state.contestant(side).purse().is_bankrupt() => {
                let purses = state.purses();
                format!(
                    "Both sides are out of money. {} wins on stars, {} to {}!",
                    name(state, side),
                    purses[side].stars(),
                    purses[side.opponent()].stars()
                )
            }
            Some(side) => format!(
                "{} is out of money. {} wins!",
                name(state, side.opponent()),
                name(state, side)
            ),
            None => outcome.to_string(),
        },
    }
}

fn name(state: &MatchState, side: Side) -> &str {
    state.contestant(side).name()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use serde_json::json;
    use tictacdollar::{ContestantSetup, GameMode, MatchSetup};

    fn fresh() -> MatchState {
        let setup = MatchSetup::new(
            ContestantSetup::new("Dog", "D"),
            ContestantSetup::new("Cat", "C"),
            Difficulty::Medium,
            GameMode::VsComputer(Side::Second),
        );
        MatchState::new(setup, Tuning::standard(), &mut StdRng::seed_from_u64(1))
    }

    /// `fresh()` with purses `(balance, stars)` per side and a settled outcome.
    fn settled(purses: [(i32, u32); 2], outcome: Outcome, fill_count: u32) -> MatchState {
        let mut value = serde_json::to_value(fresh()).unwrap();
        for (slot, (balance, stars)) in purses.into_iter().enumerate() {
            value["contestants"]["slots"][slot]["purse"] =
                json!({ "balance": balance, "stars": stars });
        }
        value["outcome"] = serde_json::to_value(outcome).unwrap();
        value["over"] = json!(outcome != Outcome::Undecided);
        value["fill_count"] = json!(fill_count);
        serde_json::from_value(value).unwrap()
    }

    fn finished_line(state: &MatchState) -> String {
        let event = SessionEvent::Moved {
            events: vec![MatchEvent::Finished(state.outcome())],
            state: state.clone(),
        };
        describe(&event).remove(0)
    }

    #[test]
    fn test_board_shows_markers() {
        let state = fresh();
        let mover = state.to_move();
        let state = state.apply_move(Position::CENTER);
        let drawn = board(&state);
        let marker = state.contestant(mover).marker().clone();
        assert_eq!(drawn.lines().count(), BOARD_SIZE + 1);
        assert!(drawn.lines().nth(3).unwrap().contains(&marker));
        assert!(!drawn.contains('['));
    }

    #[test]
    fn test_status_lists_purses() {
        let text = status(&fresh());
        assert!(text.contains("Dog (D): $15, 0 stars"));
        assert!(text.contains("Cat (C): $15, 0 stars [computer]"));
        assert!(text.contains("Turn: "));
        assert!(text.starts_with("Board 1\n"));
    }

    #[test]
    fn test_status_counts_boards() {
        let state = settled([(9, 1), (7, 2)], Outcome::Undecided, 2);
        assert!(status(&state).starts_with("Board 3\n"));
    }

    #[test]
    fn test_single_bankruptcy_names_the_loser() {
        let state = settled([(4, 0), (0, 3)], Outcome::Winner(Side::First), 0);
        assert_eq!(finished_line(&state), "Cat is out of money. Dog wins!");
    }

    #[test]
    fn test_double_bankruptcy_is_decided_on_stars() {
        let state = settled([(0, 2), (0, 3)], Outcome::Winner(Side::Second), 0);
        assert_eq!(
            finished_line(&state),
            "Both sides are out of money. Cat wins on stars, 3 to 2!"
        );
    }

    #[test]
    fn test_rules_use_the_table_in_force() {
        let text = rules(&Tuning::generous());
        assert!(text.contains("easy $30, medium $20, hard $15"));
        assert!(text.contains("earns a star and $5"));
        assert!(text.contains("both sides get $10"));

        let lines = describe(&SessionEvent::Help(Tuning::standard()));
        assert!(lines.iter().any(|line| line.contains("easy $20, medium $15, hard $10")));
    }

    #[test]
    fn test_describe_rejection() {
        let event = SessionEvent::Rejected {
            name: "Dog".to_string(),
            reason: tictacdollar::RejectReason::CellOccupied(Position::CENTER),
        };
        let lines = describe(&event);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].starts_with("Dog can't move there"));
    }
}
