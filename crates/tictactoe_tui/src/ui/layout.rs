//! Screen geometry shared by rendering and mouse hit-testing.

use ratatui::layout::{Constraint, Layout, Margin, Rect};
use tictactoe_core::Position;

/// Width of one board cell, borders included.
pub const CELL_WIDTH: u16 = 9;
/// Height of one board cell, borders included.
pub const CELL_HEIGHT: u16 = 3;
/// Blank columns/rows between cells.
const CELL_GAP: u16 = 1;

const GRID_WIDTH: u16 = CELL_WIDTH * 3 + CELL_GAP * 2;
const GRID_HEIGHT: u16 = CELL_HEIGHT * 3 + CELL_GAP * 2;

const SCOREBOARD_HEIGHT: u16 = 5;
const STATUS_HEIGHT: u16 = 3;
const RESET_WIDTH: u16 = 11;
const RESET_HEIGHT: u16 = 3;

/// Outer size of the game card.
pub const CARD_WIDTH: u16 = 44;
/// Outer size of the game card.
pub const CARD_HEIGHT: u16 = 2 + SCOREBOARD_HEIGHT + GRID_HEIGHT + 2 + STATUS_HEIGHT + RESET_HEIGHT;

/// Something on screen that reacts to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// A board cell.
    Cell(Position),
    /// The reset control.
    Reset,
}

/// Where every part of the view lands for a given viewport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewLayout {
    /// Help line along the bottom of the page.
    pub footer: Rect,
    /// The game card, centered in the page above the footer.
    pub card: Rect,
    /// Scoreboard columns: X, draws, O.
    pub scores: [Rect; 3],
    /// Frame around the board grid.
    pub board: Rect,
    /// Board cells in row-major order.
    pub cells: [Rect; 9],
    /// Status line.
    pub status: Rect,
    /// Reset control.
    pub reset: Rect,
}

impl ViewLayout {
    /// Computes the layout for `page`.
    pub fn new(page: Rect) -> Self {
        let [body, footer] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(page);

        let card = center_rect(body, CARD_WIDTH, CARD_HEIGHT);
        let [scoreboard, board_area, status, reset_area] = Layout::vertical([
            Constraint::Length(SCOREBOARD_HEIGHT),
            Constraint::Length(GRID_HEIGHT + 2),
            Constraint::Length(STATUS_HEIGHT),
            Constraint::Length(RESET_HEIGHT),
        ])
        .areas(card.inner(Margin::new(1, 1)));

        let scores = Layout::horizontal([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .areas(scoreboard);

        let board = center_rect(board_area, GRID_WIDTH + 2, GRID_HEIGHT + 2);
        let grid = board.inner(Margin::new(1, 1));
        let cells = Position::ALL.map(|pos| {
            let (row, col) = (pos.row() as u16, pos.col() as u16);
            Rect::new(
                grid.x + col * (CELL_WIDTH + CELL_GAP),
                grid.y + row * (CELL_HEIGHT + CELL_GAP),
                CELL_WIDTH,
                CELL_HEIGHT,
            )
            .intersection(grid)
        });

        Self {
            footer,
            card,
            scores,
            board,
            cells,
            status,
            reset: center_rect(reset_area, RESET_WIDTH, RESET_HEIGHT),
        }
    }

    /// Returns the clickable element at a terminal cell, if any.
    pub fn target_at(&self, column: u16, row: u16) -> Option<Target> {
        if let Some(pos) = Position::ALL
            .into_iter()
            .find(|pos| contains(self.cells[pos.to_index()], column, row))
        {
            return Some(Target::Cell(pos));
        }
        contains(self.reset, column, row).then_some(Target::Reset)
    }
}

fn contains(rect: Rect, column: u16, row: u16) -> bool {
    column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
}

/// Centers a `width` x `height` rectangle in `area`, shrinking it to fit.
pub fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roomy() -> ViewLayout {
        ViewLayout::new(Rect::new(0, 0, 80, 40))
    }

    #[test]
    fn test_card_centered_in_page() {
        let layout = roomy();
        assert_eq!(layout.card.width, CARD_WIDTH);
        assert_eq!(layout.card.height, CARD_HEIGHT);
        assert_eq!(layout.card.x, (80 - CARD_WIDTH) / 2);
        assert_eq!(layout.footer, Rect::new(0, 39, 80, 1));
    }

    #[test]
    fn test_cells_are_full_size_and_disjoint() {
        let layout = roomy();
        for (i, a) in layout.cells.iter().enumerate() {
            assert_eq!((a.width, a.height), (CELL_WIDTH, CELL_HEIGHT));
            for b in &layout.cells[i + 1..] {
                assert!(!a.intersects(*b));
            }
        }
    }

    #[test]
    fn test_hit_testing_finds_each_cell() {
        let layout = roomy();
        for pos in Position::ALL {
            let rect = layout.cells[pos.to_index()];
            let (x, y) = (rect.x + rect.width / 2, rect.y + rect.height / 2);
            assert_eq!(layout.target_at(x, y), Some(Target::Cell(pos)));
        }
    }

    #[test]
    fn test_hit_testing_reset_and_gaps() {
        let layout = roomy();
        let reset = layout.reset;
        assert_eq!(layout.target_at(reset.x + 1, reset.y + 1), Some(Target::Reset));

        // The column between the first two cells belongs to nothing.
        let gap_x = layout.cells[0].right();
        assert_eq!(layout.target_at(gap_x, layout.cells[0].y), None);
        assert_eq!(layout.target_at(0, 0), None);
    }

    #[test]
    fn test_center_rect_shrinks_to_fit() {
        let area = Rect::new(2, 3, 10, 4);
        assert_eq!(center_rect(area, 20, 20), area);
        assert_eq!(center_rect(area, 4, 2), Rect::new(5, 4, 4, 2));
    }
}
