//! Tic-tac-toe board rendering.

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Paragraph},
};
use tictactoe_core::{Position, Session, Square};

use super::layout::ViewLayout;
use super::player_style;

/// Renders the board frame and its nine cells.
pub fn render_board(frame: &mut Frame, layout: &ViewLayout, session: &Session, cursor: Position) {
    let outline = Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(outline, layout.board);

    let game_over = session.game().is_over();
    for pos in Position::ALL {
        let square = session.game().board().get(pos);
        let enabled = session.game().is_selectable(pos);
        let focused = pos == cursor && !game_over;
        render_cell(frame, layout, pos, square, enabled, focused);
    }
}

fn render_cell(
    frame: &mut Frame,
    layout: &ViewLayout,
    pos: Position,
    square: Square,
    enabled: bool,
    focused: bool,
) {
    let (text, text_style) = match square {
        Square::Occupied(player) => (
            player.to_string(),
            player_style(player).add_modifier(Modifier::BOLD),
        ),
        // Number hints match the 1-9 keys; inert cells stay blank.
        Square::Empty if enabled => (
            (pos.to_index() + 1).to_string(),
            Style::default().fg(Color::DarkGray),
        ),
        Square::Empty => (String::new(), Style::default()),
    };

    let border_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else if enabled {
        Style::default().fg(Color::Gray)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_type = if focused {
        BorderType::Thick
    } else {
        BorderType::Rounded
    };

    let cell = Paragraph::new(Line::styled(text, text_style))
        .alignment(Alignment::Center)
        .block(
            Block::bordered()
                .border_type(border_type)
                .border_style(border_style),
        );
    frame.render_widget(cell, layout.cells[pos.to_index()]);
}
