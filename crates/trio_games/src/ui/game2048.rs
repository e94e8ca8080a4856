//! 2048 screen rendering.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use trio_2048::Grid;

use crate::app::App;
use crate::theme::Theme;

/// Renders the tile grid, score, and status line.
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let [title_area, body, status_area] = super::screen_rows(frame.area());

    let game = app.game2048();

    let title = Paragraph::new(format!("2048 | Score: {}", game.score()))
        .style(theme.title)
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    draw_grid(frame, body, game.grid(), theme);

    let message = if game.is_over() {
        format!("Game over! Final score {}. Press 'r' to play again", game.score())
    } else {
        "Arrow keys slide the tiles".to_string()
    };
    let status = Paragraph::new(format!("{message} | 'r' restart | 't' theme | Esc menu"))
        .style(theme.status)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);
}

fn draw_grid(frame: &mut Frame, area: Rect, grid: &Grid, theme: &Theme) {
    let grid_area = super::center_rect(area, 4 * 9, 4 * 3);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 4])
        .split(grid_area);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(9); 4])
            .split(*row_area);

        for col in 0..4 {
            draw_tile(frame, cols[col], grid.get(row, col), theme);
        }
    }
}

fn draw_tile(frame: &mut Frame, area: Rect, value: u32, theme: &Theme) {
    let (label, style) = if value == 0 {
        (".".to_string(), theme.dim)
    } else {
        (value.to_string(), tile_style(value))
    };

    let cell = Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(theme.dim));
    frame.render_widget(cell, area);
}

fn tile_style(value: u32) -> Style {
    let color = match value {
        2 => Color::LightRed,
        4 => Color::Yellow,
        8 => Color::Green,
        16 => Color::Blue,
        32 => Color::Magenta,
        64 => Color::Red,
        128 | 256 | 512 => Color::LightMagenta,
        1024 | 2048 => Color::Cyan,
        _ => Color::Gray,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
