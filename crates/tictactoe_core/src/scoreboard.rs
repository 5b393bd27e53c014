//! Running tally of finished games.

use super::{Outcome, Player};
use tracing::instrument;

/// Wins per player plus draws. Counters only ever go up.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Scoreboard {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one to the counter matching `outcome`.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        let counter = match outcome {
            Outcome::Winner(Player::X) => &mut self.x_wins,
            Outcome::Winner(Player::O) => &mut self.o_wins,
            Outcome::Draw => &mut self.draws,
        };
        *counter = counter.saturating_add(1);
    }

    /// Games won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Games drawn.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Total games finished.
    pub fn games_played(&self) -> u32 {
        self.x_wins
            .saturating_add(self.o_wins)
            .saturating_add(self.draws)
    }
}

impl std::fmt::Display for Scoreboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "X {} / O {} / draws {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}
