//! Style palettes derived from the dark-mode flag.

use crate::settings::AppSettings;
use ratatui::style::{Color, Modifier, Style};

/// Resolved styles for the active theme.
///
/// Screens never consult the settings directly; they take a `Theme` so
/// the flag stays a single process-wide switch.
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    /// Screen titles.
    pub title: Style,
    /// Regular text.
    pub text: Style,
    /// Status and hint lines.
    pub status: Style,
    /// De-emphasized chrome (separators, face-down cards, empty cells).
    pub dim: Style,
    /// Cursor highlight.
    pub cursor: Style,
    /// Matched cards and winning lines.
    pub success: Style,
}

impl Theme {
    /// Resolves the palette for the current settings.
    pub fn from_settings(settings: &AppSettings) -> Self {
        if settings.is_dark_mode() {
            Self::dark()
        } else {
            Self::light()
        }
    }

    fn dark() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            text: Style::default().fg(Color::White),
            status: Style::default().fg(Color::Yellow),
            dim: Style::default().fg(Color::DarkGray),
            cursor: Style::default().bg(Color::White).fg(Color::Black),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        }
    }

    fn light() -> Self {
        Self {
            title: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            text: Style::default().fg(Color::Black),
            status: Style::default().fg(Color::Magenta),
            dim: Style::default().fg(Color::Gray),
            cursor: Style::default().bg(Color::Black).fg(Color::White),
            success: Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        }
    }
}
