//! Computer player driven by the rule-based advisor.

use super::{Command, Player};
use anyhow::Result;
use rand::rngs::StdRng;
use std::time::Duration;
use tictacdollar::{MatchState, advise};
use tracing::debug;

/// Plays whatever [`advise`] suggests, after a short pause.
pub struct AdvisorPlayer {
    name: String,
    rng: StdRng,
    think: Duration,
}

impl AdvisorPlayer {
    /// Creates a new computer player.
    pub fn new(name: impl Into<String>, rng: StdRng, think: Duration) -> Self {
        Self {
            name: name.into(),
            rng,
            think,
        }
    }
}

#[async_trait::async_trait]
impl Player for AdvisorPlayer {
    async fn choose(&mut self, state: &MatchState) -> Result<Command> {
        debug!(ai = %self.name, "AI making move");

        if !self.think.is_zero() {
            tokio::time::sleep(self.think).await;
        }

        let advice = advise(state.board(), state.to_move(), &mut self.rng)
            .ok_or_else(|| anyhow::anyhow!("No open cells for {}", self.name))?;

        debug!(
            ai = %self.name,
            position = %advice.position,
            rationale = %advice.rationale,
            "AI chose position"
        );
        Ok(Command::Play(advice.position))
    }

    fn is_human(&self) -> bool {
        false
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use tictacdollar::{ContestantSetup, Difficulty, GameMode, MatchSetup, Tuning};

    #[tokio::test]
    async fn test_plays_an_open_cell() {
        let setup = MatchSetup::new(
            ContestantSetup::new("Dog", "D"),
            ContestantSetup::new("Cat", "C"),
            Difficulty::Easy,
            GameMode::ComputerVsComputer,
        );
        let state = MatchState::new(setup, Tuning::standard(), &mut StdRng::seed_from_u64(4));
        let mut player = AdvisorPlayer::new("Cat", StdRng::seed_from_u64(4), Duration::ZERO);

        match player.choose(&state).await.unwrap() {
            Command::Play(position) => assert!(position.is_preferred()),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
