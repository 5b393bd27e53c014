//! Terminal tic-tac-toe with a running scoreboard.
//!
//! # Architecture
//!
//! - **Game view** ([`GameView`]): owns the [`Session`](tictactoe_core::Session),
//!   turns key presses and clicks into moves, and schedules the result flag
//!   to drop after each finished game
//! - **Rendering** ([`ui`]): scoreboard, board, status line and reset control,
//!   redrawn from state every frame
//! - **Page shell** ([`shell`]): terminal setup and teardown, the event loop
//! - **Config** ([`ViewConfig`]): TOML file plus command-line overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod event;
pub mod input;
pub mod logging;
pub mod shell;
pub mod ui;

pub use app::{Control, GameView};
pub use cli::Cli;
pub use config::{ConfigError, ViewConfig};
pub use event::AppEvent;
