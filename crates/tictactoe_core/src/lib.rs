//! Tic-tac-toe game logic.
//!
//! - [`Board`], [`Position`], [`Player`]: the 3x3 grid and its marks
//! - [`rules`]: win and draw detection
//! - [`Game`]: one round, X first, turns alternating until a win or draw
//! - [`Scoreboard`]: wins per player and draws across rounds
//! - [`Session`]: a game plus its scoreboard and the result-display flag
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{Outcome, Player, Selection, Session};
//!
//! let mut session = Session::new();
//! for cell in [0, 3, 1, 4] {
//!     session.select_cell(cell);
//! }
//! let selection = session.select_cell(2);
//! assert_eq!(selection, Selection::Finished(Outcome::Winner(Player::X)));
//! assert_eq!(session.scores().wins(Player::X), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod outcome;
mod position;
pub mod rules;
mod scoreboard;
mod session;
mod types;

pub use action::{Move, Rejection, Selection};
pub use game::Game;
pub use outcome::Outcome;
pub use position::Position;
pub use scoreboard::Scoreboard;
pub use session::Session;
pub use types::{Board, GameStatus, Player, Square};
