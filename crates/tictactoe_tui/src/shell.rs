//! Page shell: owns the terminal and runs the game view's event loop.

use std::io::{self, Stdout};

use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    event::{self, DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tokio::time::Duration;
use tracing::{debug, info, instrument, warn};

use crate::app::{Control, GameView};
use crate::config::ViewConfig;
use crate::event::AppEvent;
use crate::ui;

type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Puts the terminal back the way it was when dropped.
struct TerminalGuard {
    mouse: bool,
}

impl TerminalGuard {
    fn enter(mouse: bool) -> Result<Self> {
        enable_raw_mode().context("Failed to enable raw mode")?;
        // From here on, drop restores raw mode even if the rest fails.
        let guard = Self { mouse };
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        if mouse {
            execute!(stdout, EnableMouseCapture).context("Failed to capture mouse")?;
        }
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        debug!("Restoring terminal");
        let mut stdout = io::stdout();
        if self.mouse {
            let _ = execute!(stdout, DisableMouseCapture);
        }
        let _ = execute!(stdout, LeaveAlternateScreen, Show);
        let _ = disable_raw_mode();
    }
}

/// Takes over the terminal, runs one game view until the user quits, and
/// restores the terminal.
#[instrument(skip_all)]
pub async fn run(config: ViewConfig) -> Result<()> {
    info!("Starting tic-tac-toe");

    let guard = TerminalGuard::enter(*config.mouse())?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))
        .context("Failed to create terminal")?;

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let view = GameView::new(&config, event_tx);

    let res = event_loop(&mut terminal, view, &mut event_rx, config.tick());

    drop(guard);
    match &res {
        Ok(()) => info!("Exited cleanly"),
        Err(e) => warn!(error = %e, "Event loop failed"),
    }
    res
}

/// Draws, drains deferred events, then waits up to `tick` for terminal input.
fn event_loop(
    terminal: &mut Tui,
    mut view: GameView,
    event_rx: &mut mpsc::UnboundedReceiver<AppEvent>,
    tick: Duration,
) -> Result<()> {
    loop {
        let frame = terminal.draw(|f| ui::draw(f, &view))?;
        view.set_viewport(frame.area);

        while let Ok(event) = event_rx.try_recv() {
            view.handle_event(event);
        }

        if event::poll(tick)? {
            let event = event::read()?;
            if view.handle_event(AppEvent::Terminal(event)) == Control::Quit {
                return Ok(());
            }
        }
    }
}
