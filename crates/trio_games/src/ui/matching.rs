//! Matching game screen rendering.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use trio_matching::Card;

use crate::app::App;
use crate::theme::Theme;

/// Renders the card grid and status line.
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let [title_area, body, status_area] = super::screen_rows(frame.area());

    let title = Paragraph::new("Matching Game")
        .style(theme.title)
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    draw_cards(frame, body, app, theme);

    let game = app.matching();
    let message = if game.is_won() {
        "You won! Press 'r' to play again"
    } else if game.is_locked() {
        "No match..."
    } else {
        "Arrows move, Enter flips"
    };
    let status = Paragraph::new(format!("{message} | 'r' restart | 't' theme | Esc menu"))
        .style(theme.status)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);
}

fn draw_cards(frame: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let grid_area = super::center_rect(area, 4 * 11, 4 * 3);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 4])
        .split(grid_area);

    for (row, row_area) in rows.iter().enumerate() {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(11); 4])
            .split(*row_area);

        for col in 0..4 {
            let index = row * 4 + col;
            let card = &app.matching().cards()[index];
            draw_card(frame, cols[col], card, index == app.matching_cursor(), theme);
        }
    }
}

fn draw_card(frame: &mut Frame, area: Rect, card: &Card, selected: bool, theme: &Theme) {
    let (label, style) = if card.is_matched() {
        (card.symbol().label(), theme.success)
    } else if card.is_face_up() {
        (card.symbol().label(), theme.text)
    } else {
        ("?", theme.dim)
    };

    let style = if selected { theme.cursor } else { style };
    let border = if selected { theme.title } else { theme.dim };

    let cell = Paragraph::new(Line::from(Span::styled(label, style)))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).style(border));
    frame.render_widget(cell, area);
}
