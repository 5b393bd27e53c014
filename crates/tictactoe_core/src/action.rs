//! Moves and the result of selecting a cell.
//!
//! Selecting a cell never fails. A selection that breaks the rules is
//! reported as [`Selection::Ignored`] and leaves every piece of state as it was.

use super::{Outcome, Player, Position};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.label())
    }
}

/// Why a selection was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum Rejection {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// The game has been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The cell index is outside 0-8.
    #[display("Cell {} is off the board", _0)]
    OutOfBounds(usize),
}

/// What happened when a cell was selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// Nothing changed.
    Ignored(Rejection),
    /// The mark was placed and the turn passed to `next`.
    Continued {
        /// The player to move now.
        next: Player,
    },
    /// The mark was placed and ended the game.
    Finished(Outcome),
}

impl Selection {
    /// True when a mark was placed.
    pub fn is_accepted(&self) -> bool {
        !matches!(self, Selection::Ignored(_))
    }
}
