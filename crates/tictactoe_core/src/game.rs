//! Game state machine for a single round of tic-tac-toe.
//!
//! A round starts `InProgress` with X to move. Each accepted selection either
//! passes the turn, or ends the round as `Won` or `Draw`. Finished rounds
//! accept nothing until [`Game::reset`].

use super::action::{Move, Rejection, Selection};
use super::rules;
use super::{Board, GameStatus, Outcome, Player, Position, Square};
use tracing::{debug, instrument};

/// A single round: board, turn and winner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    to_move: Player,
    winner: Option<Player>,
    history: Vec<Move>,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Player::X,
            winner: None,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the player whose turn it is.
    ///
    /// After a finished round this is the player who made the last move.
    pub fn to_move(&self) -> Player {
        self.to_move
    }

    /// Returns the winner, if the round was won.
    pub fn winner(&self) -> Option<Player> {
        self.winner
    }

    /// Returns the moves played this round, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the current status, derived from winner and board.
    pub fn status(&self) -> GameStatus {
        match self.winner {
            Some(player) => GameStatus::Won(player),
            None if self.board.is_full() => GameStatus::Draw,
            None => GameStatus::InProgress,
        }
    }

    /// True when the round has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.status().is_over()
    }

    /// True when a selection at `pos` would be accepted.
    pub fn is_selectable(&self, pos: Position) -> bool {
        !self.is_over() && self.board.is_empty(pos)
    }

    /// Places the current player's mark at `pos` if the rules allow it.
    #[instrument(skip(self), fields(player = %self.to_move))]
    pub fn select(&mut self, pos: Position) -> Selection {
        if self.is_over() {
            debug!("Selection ignored, game over");
            return Selection::Ignored(Rejection::GameOver);
        }
        if !self.board.is_empty(pos) {
            debug!("Selection ignored, square occupied");
            return Selection::Ignored(Rejection::SquareOccupied(pos));
        }

        let player = self.to_move;
        self.board.set(pos, Square::Occupied(player));
        self.history.push(Move::new(player, pos));

        if let Some(winner) = rules::check_winner(&self.board) {
            self.winner = Some(winner);
            debug!(board = %self.board, "Line completed");
            return Selection::Finished(Outcome::Winner(winner));
        }

        if self.board.is_full() {
            debug!(board = %self.board, "Board full without a line");
            return Selection::Finished(Outcome::Draw);
        }

        self.to_move = player.opponent();
        Selection::Continued { next: self.to_move }
    }

    /// Clears the board, gives X the move and forgets the winner.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.clear();
        self.to_move = Player::X;
        self.winner = None;
        self.history.clear();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game_x_moves_first() {
        let game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_turn_flips_after_move() {
        let mut game = Game::new();
        let selection = game.select(Position::Center);
        assert_eq!(selection, Selection::Continued { next: Player::O });
        assert_eq!(game.to_move(), Player::O);
        assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_occupied_square_ignored() {
        let mut game = Game::new();
        game.select(Position::Center);
        let before = game.clone();

        let selection = game.select(Position::Center);

        assert_eq!(
            selection,
            Selection::Ignored(Rejection::SquareOccupied(Position::Center))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_winner_keeps_last_mover() {
        let mut game = Game::new();
        for pos in [
            Position::TopLeft,
            Position::MiddleLeft,
            Position::TopCenter,
            Position::Center,
        ] {
            game.select(pos);
        }
        let selection = game.select(Position::TopRight);

        assert_eq!(selection, Selection::Finished(Outcome::Winner(Player::X)));
        assert_eq!(game.winner(), Some(Player::X));
        assert_eq!(game.to_move(), Player::X);
        assert!(!game.is_selectable(Position::BottomRight));
    }

    #[test]
    fn test_reset_clears_history() {
        let mut game = Game::new();
        game.select(Position::TopLeft);
        game.select(Position::Center);
        game.reset();
        assert_eq!(game, Game::new());
    }
}
