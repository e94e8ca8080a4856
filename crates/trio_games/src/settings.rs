//! Process-wide application settings.

/// Settings shared by every screen.
///
/// The theme flag is owned by the presentation layer, injected at
/// startup, and never threaded into the game engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppSettings {
    dark_mode: bool,
}

impl AppSettings {
    /// Creates settings with the given initial theme.
    pub fn new(dark_mode: bool) -> Self {
        Self { dark_mode }
    }

    /// Returns true when dark mode is active.
    pub fn is_dark_mode(&self) -> bool {
        self.dark_mode
    }

    /// Flips between dark and light mode.
    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }
}
