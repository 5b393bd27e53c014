//! Status line: whose turn, who won, or a draw.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use tictactoe_core::{GameStatus, Session};

use super::player_style;

/// Plain text of the status line.
pub fn status_text(session: &Session) -> String {
    match session.status() {
        GameStatus::Won(player) => format!("Winner: {}!", player),
        GameStatus::Draw => "It's a draw!".to_string(),
        GameStatus::InProgress => format!("Current Player: {}", session.game().to_move()),
    }
}

/// Renders the status line, emphasised while the result flag is raised.
pub fn render_status(frame: &mut Frame, area: Rect, session: &Session) {
    let line = match session.status() {
        GameStatus::Won(player) => Line::styled(
            status_text(session),
            player_style(player).add_modifier(Modifier::BOLD),
        ),
        GameStatus::Draw => Line::styled(
            status_text(session),
            Style::default().fg(Color::Gray).add_modifier(Modifier::BOLD),
        ),
        GameStatus::InProgress => {
            let player = session.game().to_move();
            Line::from(vec![
                Span::styled("Current Player: ", Style::default().fg(Color::Gray)),
                Span::styled(
                    player.to_string(),
                    player_style(player).add_modifier(Modifier::BOLD),
                ),
            ])
        }
    };

    let emphasis = if session.show_result() {
        Style::default().add_modifier(Modifier::REVERSED)
    } else {
        Style::default()
    };

    let status = Paragraph::new(line)
        .style(emphasis)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::TOP | Borders::BOTTOM));
    frame.render_widget(status, area);
}
