//! Tic-tac-toe screen rendering.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use trio_tictactoe::{Board, Player, Position, Square};

use crate::app::App;
use crate::theme::Theme;

/// Renders the board and status line.
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let [title_area, body, status_area] = super::screen_rows(frame.area());

    let title = Paragraph::new("Tic-Tac-Toe")
        .style(theme.title)
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let state = app.tictactoe().state();
    draw_board(frame, body, state.board(), state.winning_line(), theme);

    let status = Paragraph::new(format!(
        "{} | 'r' restart | 't' theme | Esc menu",
        app.tictactoe_status()
    ))
    .style(theme.status)
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);
}

fn draw_board(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    winning_line: Option<[Position; 3]>,
    theme: &Theme,
) {
    let board_area = super::center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for (row, area_index) in [0usize, 2, 4].iter().copied().enumerate() {
        draw_row(frame, rows[area_index], board, winning_line, row, theme);
        if area_index < 4 {
            let sep = Paragraph::new("─".repeat(40)).style(theme.dim);
            frame.render_widget(sep, rows[area_index + 1]);
        }
    }
}

fn draw_row(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    winning_line: Option<[Position; 3]>,
    row: usize,
    theme: &Theme,
) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for (col, area_index) in [0usize, 2, 4].iter().copied().enumerate() {
        let pos = Position::from_index(row * 3 + col).expect("cell index in range");
        draw_cell(frame, cols[area_index], board, winning_line, pos, theme);
        if area_index < 4 {
            let sep = Paragraph::new("│").style(theme.dim);
            frame.render_widget(sep, cols[area_index + 1]);
        }
    }
}

fn draw_cell(
    frame: &mut Frame,
    area: Rect,
    board: &Board,
    winning_line: Option<[Position; 3]>,
    pos: Position,
    theme: &Theme,
) {
    let (symbol, base_style) = match board.get(pos) {
        Square::Empty => (format!(" {} ", pos.to_index() + 1), theme.dim),
        Square::Occupied(Player::X) => (" X ".to_string(), theme.text),
        Square::Occupied(Player::O) => (" O ".to_string(), theme.status),
    };

    let style = if winning_line.is_some_and(|line| line.contains(&pos)) {
        theme.success
    } else {
        base_style
    };

    let cell = Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(cell, area);
}
