//! A sequence of games sharing one scoreboard.

use super::action::{Rejection, Selection};
use super::{Game, GameStatus, Player, Position, Scoreboard};
use tracing::{info, instrument};

/// Everything the game view keeps between frames.
///
/// The result flag is raised when a game finishes. Lowering it on a timer is
/// left to the caller; [`Session::clear_result`] is the hook.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    game: Game,
    scores: Scoreboard,
    show_result: bool,
}

impl Session {
    /// Creates a session with an empty board and zeroed scores.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current round.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Cumulative scores.
    pub fn scores(&self) -> &Scoreboard {
        &self.scores
    }

    /// Whether the last game's result is being emphasised.
    pub fn show_result(&self) -> bool {
        self.show_result
    }

    /// Status of the current round.
    pub fn status(&self) -> GameStatus {
        self.game.status()
    }

    /// The player whose turn is active, while the round is in progress.
    pub fn active_player(&self) -> Option<Player> {
        match self.status() {
            GameStatus::InProgress => Some(self.game.to_move()),
            _ => None,
        }
    }

    /// Selects a cell by board index (0-8).
    pub fn select_cell(&mut self, index: usize) -> Selection {
        match Position::from_index(index) {
            Some(pos) => self.select(pos),
            None => Selection::Ignored(Rejection::OutOfBounds(index)),
        }
    }

    /// Selects a cell, scoring the game if this move ends it.
    #[instrument(skip(self))]
    pub fn select(&mut self, pos: Position) -> Selection {
        let selection = self.game.select(pos);
        if let Selection::Finished(outcome) = selection {
            self.scores.record(outcome);
            self.show_result = true;
            info!(%outcome, scores = %self.scores, "Game finished");
        }
        selection
    }

    /// Starts a new round. Scores are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.game.reset();
        self.show_result = false;
    }

    /// Lowers the result flag.
    pub fn clear_result(&mut self) {
        self.show_result = false;
    }
}
