//! Stateless screen rendering.

mod game2048;
mod matching;
mod menu;
mod tictactoe;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::app::{App, Screen};
use crate::theme::Theme;

/// Renders the active screen.
pub fn draw(frame: &mut Frame, app: &App) {
    let theme = Theme::from_settings(app.settings());
    match app.screen() {
        Screen::Menu => menu::draw(frame, app, &theme),
        Screen::TicTacToe => tictactoe::draw(frame, app, &theme),
        Screen::Matching => matching::draw(frame, app, &theme),
        Screen::Game2048 => game2048::draw(frame, app, &theme),
    }
}

/// Splits the frame into title, body, and status rows.
fn screen_rows(area: Rect) -> [Rect; 3] {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(area);
    [chunks[0], chunks[1], chunks[2]]
}

/// Centers a fixed-size rectangle inside the given area.
fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Length(area.height.saturating_sub(height) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Length(area.width.saturating_sub(width) / 2),
        ])
        .split(vert[1])[1]
}
