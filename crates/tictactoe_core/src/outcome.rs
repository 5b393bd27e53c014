//! Result of a completed game.

use super::Player;

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Outcome {
    /// Player won the game.
    #[display("Player {} wins", _0)]
    Winner(Player),
    /// Game ended in a draw.
    #[display("Draw")]
    Draw,
}
