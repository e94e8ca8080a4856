//! Main menu rendering.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, GAMES};
use crate::theme::Theme;

/// Renders the game selection menu.
pub fn draw(frame: &mut Frame, app: &App, theme: &Theme) {
    let [title_area, body, status_area] = super::screen_rows(frame.area());

    let title = Paragraph::new("Trio Games")
        .style(theme.title)
        .alignment(Alignment::Center);
    frame.render_widget(title, title_area);

    let list_area = super::center_rect(body, 30, (GAMES.len() * 3) as u16);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3); 3])
        .split(list_area);

    for (index, game) in GAMES.iter().enumerate() {
        let selected = index == app.menu_cursor();
        let style = if selected { theme.cursor } else { theme.text };
        let label = format!("{}. {}", index + 1, game.title());
        let entry = Paragraph::new(Line::from(Span::styled(label, style)))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).style(if selected {
                theme.title
            } else {
                theme.dim
            }));
        frame.render_widget(entry, rows[index]);
    }

    let status = Paragraph::new("Enter or 1-3 to play | 't' theme | 'q' quit")
        .style(theme.status)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, status_area);
}
