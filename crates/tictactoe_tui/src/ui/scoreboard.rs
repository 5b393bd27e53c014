//! Scoreboard rendering: X wins, draws, O wins.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph},
};
use tictactoe_core::{Player, Session};

use super::layout::ViewLayout;
use super::player_style;

/// Marker shown under the score of the player to move.
pub const TURN_MARKER: &str = "Your turn";

/// Renders the three score columns, highlighting the player to move.
pub fn render_scoreboard(frame: &mut Frame, layout: &ViewLayout, session: &Session) {
    let scores = session.scores();
    let active = session.active_player();

    render_player_column(frame, layout.scores[0], Player::X, scores.wins(Player::X), active);
    render_column(
        frame,
        layout.scores[1],
        "Draws",
        scores.draws(),
        Style::default().fg(Color::Yellow),
        None,
        false,
    );
    render_player_column(frame, layout.scores[2], Player::O, scores.wins(Player::O), active);
}

fn render_player_column(
    frame: &mut Frame,
    area: Rect,
    player: Player,
    wins: u32,
    active: Option<Player>,
) {
    let highlighted = active == Some(player);
    let marker = highlighted.then_some(TURN_MARKER);
    render_column(
        frame,
        area,
        &player.to_string(),
        wins,
        player_style(player),
        marker,
        highlighted,
    );
}

fn render_column(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    count: u32,
    accent: Style,
    marker: Option<&str>,
    highlighted: bool,
) {
    let lines = vec![
        Line::styled(label.to_string(), accent.add_modifier(Modifier::BOLD)),
        Line::styled(count.to_string(), accent),
        Line::styled(
            marker.unwrap_or_default().to_string(),
            accent.add_modifier(Modifier::ITALIC),
        ),
    ];

    let block = if highlighted {
        Block::bordered()
            .border_type(BorderType::Thick)
            .border_style(accent.add_modifier(Modifier::BOLD))
    } else {
        Block::bordered()
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::DarkGray))
    };

    let column = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(block);
    frame.render_widget(column, area);
}
