//! Events delivered to the game view.

use crossterm::event::Event;

/// Input for [`GameView::handle_event`](crate::GameView::handle_event).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// A key press, mouse action or resize from the terminal.
    Terminal(Event),
    /// The result display delay has elapsed.
    ResultExpired,
}
