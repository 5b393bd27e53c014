//! Game view state and input handling.

use crossterm::event::{Event, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tictactoe_core::{Position, Selection, Session};
use tokio::sync::mpsc;
use tokio::time::{Duration, sleep};
use tracing::{debug, info, instrument};

use crate::config::ViewConfig;
use crate::event::AppEvent;
use crate::input::{Command, command_for_key, move_cursor};
use crate::ui::layout::{Target, ViewLayout};

/// Whether the event loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    /// Keep running.
    Continue,
    /// Leave the event loop.
    Quit,
}

/// The interactive game: session state, keyboard cursor and click geometry.
#[derive(Debug)]
pub struct GameView {
    session: Session,
    cursor: Position,
    viewport: Rect,
    result_flash: Duration,
    events: mpsc::UnboundedSender<AppEvent>,
}

impl GameView {
    /// Creates a view with a fresh session.
    ///
    /// `events` receives [`AppEvent::ResultExpired`] once the result display
    /// delay passes after each finished game.
    pub fn new(config: &ViewConfig, events: mpsc::UnboundedSender<AppEvent>) -> Self {
        Self {
            session: Session::new(),
            cursor: Position::Center,
            viewport: Rect::default(),
            result_flash: config.result_flash(),
            events,
        }
    }

    /// The game session.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Records the area of the last drawn frame, used to resolve clicks.
    pub fn set_viewport(&mut self, viewport: Rect) {
        self.viewport = viewport;
    }

    /// Handles one event.
    #[instrument(skip(self))]
    pub fn handle_event(&mut self, event: AppEvent) -> Control {
        match event {
            AppEvent::ResultExpired => {
                debug!("Result display expired");
                self.session.clear_result();
                Control::Continue
            }
            AppEvent::Terminal(Event::Key(key)) => self.handle_key(key),
            AppEvent::Terminal(Event::Mouse(mouse)) => {
                self.handle_mouse(mouse);
                Control::Continue
            }
            AppEvent::Terminal(Event::Resize(width, height)) => {
                self.viewport = Rect::new(0, 0, width, height);
                Control::Continue
            }
            AppEvent::Terminal(_) => Control::Continue,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Control {
        // Skip key release events (crossterm fires both press and release on some platforms).
        if key.kind == KeyEventKind::Release {
            return Control::Continue;
        }

        match command_for_key(key) {
            Some(Command::Select(pos)) => {
                self.cursor = pos;
                self.select(pos);
            }
            Some(Command::SelectCursor) => {
                self.select(self.cursor);
            }
            Some(Command::MoveCursor(step)) => {
                self.cursor = move_cursor(self.cursor, step);
            }
            Some(Command::Reset) => self.reset(),
            Some(Command::Quit) => {
                info!("User quit");
                return Control::Quit;
            }
            None => {}
        }
        Control::Continue
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }

        match ViewLayout::new(self.viewport).target_at(mouse.column, mouse.row) {
            Some(Target::Cell(pos)) => {
                self.cursor = pos;
                self.select(pos);
            }
            Some(Target::Reset) => self.reset(),
            None => {}
        }
    }

    /// Selects a cell for the player to move.
    ///
    /// A finished game raises the result flag and schedules it to drop.
    #[instrument(skip(self))]
    pub fn select(&mut self, pos: Position) -> Selection {
        let selection = self.session.select(pos);
        match selection {
            Selection::Ignored(reason) => debug!(%reason, "Selection ignored"),
            Selection::Continued { next } => debug!(%next, "Turn passed"),
            Selection::Finished(_) => self.schedule_result_clear(),
        }
        selection
    }

    /// Starts a new round, keeping the scores.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(scores = %self.session.scores(), "Resetting board");
        self.session.reset();
    }

    /// Posts [`AppEvent::ResultExpired`] after the result display delay.
    ///
    /// Nothing cancels it: a reset already lowers the flag, and a later
    /// expiry only lowers it again.
    fn schedule_result_clear(&self) {
        let events = self.events.clone();
        let delay = self.result_flash;
        tokio::spawn(async move {
            sleep(delay).await;
            // The loop may already have exited.
            let _ = events.send(AppEvent::ResultExpired);
        });
    }
}
