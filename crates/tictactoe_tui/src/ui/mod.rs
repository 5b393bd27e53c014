//! UI rendering using ratatui.
//!
//! Everything is drawn from [`GameView`] state each frame; nothing here
//! mutates the game.

mod board;
pub mod layout;
mod scoreboard;
mod status;

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Paragraph},
};
use tictactoe_core::Player;

use crate::GameView;
use layout::ViewLayout;

pub use board::render_board;
pub use scoreboard::{TURN_MARKER, render_scoreboard};
pub use status::{render_status, status_text};

const HELP: &str = "1-9 or arrows + Enter: place | click: place | r: reset | q: quit";

/// Draws the page: the game card centered over the full viewport, and a help footer.
pub fn draw(frame: &mut Frame, view: &GameView) {
    let layout = ViewLayout::new(frame.area());
    let session = view.session();

    let card = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Gray))
        .title(" Tic-Tac-Toe ")
        .title_alignment(Alignment::Center)
        .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD));
    frame.render_widget(card, layout.card);

    render_scoreboard(frame, &layout, session);
    render_board(frame, &layout, session, view.cursor());
    render_status(frame, layout.status, session);

    let reset = Paragraph::new("Reset")
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD))
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Gray)),
        );
    frame.render_widget(reset, layout.reset);

    let help = Paragraph::new(HELP)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, layout.footer);
}

/// Accent colour for a player's marks and score.
fn player_style(player: Player) -> Style {
    match player {
        Player::X => Style::default().fg(Color::Red),
        Player::O => Style::default().fg(Color::Blue),
    }
}
