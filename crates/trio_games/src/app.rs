//! Application state and input handling.

use crossterm::event::KeyCode;
use std::time::{Duration, Instant};
use tracing::debug;
use trio_2048::{Direction, Game2048};
use trio_matching::{FlipOutcome, MatchingGame};
use trio_tictactoe::{Game as TicTacToe, GameStatus, Position};

use crate::settings::AppSettings;

/// How long a mismatched pair stays face up before it turns back down.
pub const MISMATCH_DELAY: Duration = Duration::from_secs(1);

/// The active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Game selection menu.
    Menu,
    /// Tic-tac-toe.
    TicTacToe,
    /// Matching pairs.
    Matching,
    /// 2048.
    Game2048,
}

impl Screen {
    /// Menu label.
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Menu => "Trio Games",
            Screen::TicTacToe => "Tic-Tac-Toe",
            Screen::Matching => "Matching Game",
            Screen::Game2048 => "2048",
        }
    }
}

/// The three games in menu order.
pub const GAMES: [Screen; 3] = [Screen::TicTacToe, Screen::Matching, Screen::Game2048];

/// Main application state.
///
/// Holds the settings, the active screen, and one engine per game. Each
/// engine is rebuilt when its screen is opened from the menu, so
/// navigating away discards in-flight state.
pub struct App {
    settings: AppSettings,
    screen: Screen,
    menu_cursor: usize,
    should_quit: bool,
    tictactoe: TicTacToe,
    tictactoe_status: String,
    matching: MatchingGame,
    matching_cursor: usize,
    mismatch_deadline: Option<Instant>,
    game2048: Game2048,
}

impl App {
    /// Creates the application on the menu screen.
    pub fn new(settings: AppSettings) -> Self {
        let tictactoe = TicTacToe::new();
        let tictactoe_status = Self::turn_message(&tictactoe);
        Self {
            settings,
            screen: Screen::Menu,
            menu_cursor: 0,
            should_quit: false,
            tictactoe,
            tictactoe_status,
            matching: MatchingGame::new(),
            matching_cursor: 0,
            mismatch_deadline: None,
            game2048: Game2048::new(),
        }
    }

    /// Returns the settings.
    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    /// Returns the active screen.
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Returns the menu cursor index.
    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    /// Returns true once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Returns the tic-tac-toe engine.
    pub fn tictactoe(&self) -> &TicTacToe {
        &self.tictactoe
    }

    /// Returns the tic-tac-toe status line.
    pub fn tictactoe_status(&self) -> &str {
        &self.tictactoe_status
    }

    /// Returns the matching engine.
    pub fn matching(&self) -> &MatchingGame {
        &self.matching
    }

    /// Returns the matching cursor index.
    pub fn matching_cursor(&self) -> usize {
        self.matching_cursor
    }

    /// Returns the 2048 engine.
    pub fn game2048(&self) -> &Game2048 {
        &self.game2048
    }

    /// Resolves an elapsed mismatch deadline.
    ///
    /// Called once per UI tick; this is the externally managed timer the
    /// matching engine's contract asks for.
    pub fn on_tick(&mut self, now: Instant) {
        if let Some(deadline) = self.mismatch_deadline {
            if now >= deadline {
                self.mismatch_deadline = None;
                self.matching.resolve_mismatch();
            }
        }
    }

    /// Routes a key press to the active screen.
    pub fn handle_key(&mut self, code: KeyCode) {
        // The theme switch is available everywhere.
        if code == KeyCode::Char('t') {
            self.settings.toggle_dark_mode();
            return;
        }

        match self.screen {
            Screen::Menu => self.handle_menu_key(code),
            Screen::TicTacToe => self.handle_tictactoe_key(code),
            Screen::Matching => self.handle_matching_key(code),
            Screen::Game2048 => self.handle_game2048_key(code),
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up => {
                self.menu_cursor = self.menu_cursor.saturating_sub(1);
            }
            KeyCode::Down => {
                self.menu_cursor = (self.menu_cursor + 1).min(GAMES.len() - 1);
            }
            KeyCode::Enter => self.open(GAMES[self.menu_cursor]),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let digit = c.to_digit(10).unwrap_or(0) as usize;
                if (1..=GAMES.len()).contains(&digit) {
                    self.menu_cursor = digit - 1;
                    self.open(GAMES[digit - 1]);
                }
            }
            _ => {}
        }
    }

    /// Opens a game screen with a fresh engine.
    fn open(&mut self, screen: Screen) {
        debug!(?screen, "Opening screen");
        match screen {
            Screen::Menu => {}
            Screen::TicTacToe => {
                self.tictactoe = TicTacToe::new();
                self.tictactoe_status = Self::turn_message(&self.tictactoe);
            }
            Screen::Matching => {
                self.matching = MatchingGame::new();
                self.matching_cursor = 0;
                self.mismatch_deadline = None;
            }
            Screen::Game2048 => {
                self.game2048 = Game2048::new();
            }
        }
        self.screen = screen;
    }

    /// Returns to the menu, cancelling any pending mismatch timer so a
    /// stale resolution can never touch a later game.
    fn back_to_menu(&mut self) {
        self.mismatch_deadline = None;
        self.screen = Screen::Menu;
    }

    fn handle_tictactoe_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.back_to_menu(),
            KeyCode::Char('r') => {
                self.tictactoe.reset();
                self.tictactoe_status = Self::turn_message(&self.tictactoe);
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                let digit = c.to_digit(10).unwrap_or(0) as usize;
                if let Some(pos) = digit.checked_sub(1).and_then(Position::from_index) {
                    self.place_mark(pos);
                }
            }
            _ => {}
        }
    }

    fn place_mark(&mut self, pos: Position) {
        debug!(%pos, "Placing mark");
        match self.tictactoe.place(pos) {
            Ok(()) => {
                self.tictactoe_status = match self.tictactoe.state().status() {
                    GameStatus::InProgress => Self::turn_message(&self.tictactoe),
                    GameStatus::Won(player) => {
                        format!("Player {player} wins! Press 'r' to play again.")
                    }
                    GameStatus::Draw => {
                        "It's a draw! Press 'r' to play again.".to_string()
                    }
                };
            }
            Err(error) => {
                self.tictactoe_status = format!("Invalid move: {error}. Try again.");
            }
        }
    }

    fn turn_message(game: &TicTacToe) -> String {
        format!(
            "Player {}'s turn. Press 1-9 to place a mark.",
            game.state().current_player()
        )
    }

    fn handle_matching_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Esc => self.back_to_menu(),
            KeyCode::Char('r') => {
                // Cancel the timer before resetting: a reset must never
                // observe a stale resolution.
                self.mismatch_deadline = None;
                self.matching.reset();
            }
            KeyCode::Left => {
                if self.matching_cursor % 4 > 0 {
                    self.matching_cursor -= 1;
                }
            }
            KeyCode::Right => {
                if self.matching_cursor % 4 < 3 {
                    self.matching_cursor += 1;
                }
            }
            KeyCode::Up => {
                self.matching_cursor = self.matching_cursor.saturating_sub(4);
            }
            KeyCode::Down => {
                if self.matching_cursor + 4 < self.matching.cards().len() {
                    self.matching_cursor += 4;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.flip_card(),
            _ => {}
        }
    }

    fn flip_card(&mut self) {
        match self.matching.flip(self.matching_cursor) {
            Ok(FlipOutcome::Mismatch) => {
                self.mismatch_deadline = Some(Instant::now() + MISMATCH_DELAY);
            }
            Ok(outcome) => {
                debug!(?outcome, "Card flipped");
            }
            Err(error) => {
                // Rejected flips are no-ops by contract.
                debug!(%error, "Flip ignored");
            }
        }
    }

    fn handle_game2048_key(&mut self, code: KeyCode) {
        let direction = match code {
            KeyCode::Esc => {
                self.back_to_menu();
                return;
            }
            KeyCode::Char('r') => {
                self.game2048.reset();
                return;
            }
            KeyCode::Left => Direction::Left,
            KeyCode::Right => Direction::Right,
            KeyCode::Up => Direction::Up,
            KeyCode::Down => Direction::Down,
            _ => return,
        };
        self.game2048.step(direction);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trio_tictactoe::Player;

    fn app() -> App {
        App::new(AppSettings::default())
    }

    /// An app on the matching screen with a known, unshuffled deck.
    fn matching_app() -> App {
        let mut app = app();
        app.handle_key(KeyCode::Char('2'));
        assert_eq!(app.screen(), Screen::Matching);
        app.matching = MatchingGame::unshuffled();
        app
    }

    fn flip_at(app: &mut App, index: usize) {
        app.matching_cursor = index;
        app.handle_key(KeyCode::Enter);
    }

    #[test]
    fn test_theme_toggle_works_on_every_screen() {
        let mut app = app();
        for screen in [Screen::Menu, Screen::TicTacToe, Screen::Matching, Screen::Game2048] {
            app.screen = screen;
            let before = app.settings().is_dark_mode();
            app.handle_key(KeyCode::Char('t'));
            assert_eq!(app.settings().is_dark_mode(), !before);
        }
    }

    #[test]
    fn test_menu_opens_selected_game() {
        let mut app = app();
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Down);
        app.handle_key(KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Game2048);
    }

    #[test]
    fn test_menu_quit() {
        let mut app = app();
        app.handle_key(KeyCode::Char('q'));
        assert!(app.should_quit());
    }

    #[test]
    fn test_digits_place_marks() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'));
        assert_eq!(app.screen(), Screen::TicTacToe);

        app.handle_key(KeyCode::Char('5'));
        assert_eq!(
            app.tictactoe().state().current_player(),
            Player::O,
            "X played, O to move"
        );

        // Occupied square: engine rejects, status explains, turn keeps.
        app.handle_key(KeyCode::Char('5'));
        assert_eq!(app.tictactoe().state().current_player(), Player::O);
        assert!(app.tictactoe_status().starts_with("Invalid move"));
    }

    #[test]
    fn test_mismatch_resolves_after_deadline() {
        let mut app = matching_app();

        flip_at(&mut app, 0);
        flip_at(&mut app, 2);
        assert!(app.matching().is_locked());
        assert!(app.mismatch_deadline.is_some());

        // Before the deadline nothing happens.
        app.on_tick(Instant::now());
        assert!(app.matching().is_locked());

        // After the deadline the pair turns back down.
        app.on_tick(Instant::now() + MISMATCH_DELAY + Duration::from_millis(1));
        assert!(!app.matching().is_locked());
        assert!(app.mismatch_deadline.is_none());
        assert!(app.matching().cards().iter().all(|c| !c.is_face_up()));
    }

    #[test]
    fn test_reset_cancels_pending_mismatch_timer() {
        let mut app = matching_app();

        flip_at(&mut app, 0);
        flip_at(&mut app, 2);
        assert!(app.mismatch_deadline.is_some());

        app.handle_key(KeyCode::Char('r'));
        assert!(app.mismatch_deadline.is_none());
        assert!(!app.matching().is_locked());

        // The elapsed timer must not disturb the fresh game.
        app.on_tick(Instant::now() + MISMATCH_DELAY + Duration::from_millis(1));
        assert!(app.matching().cards().iter().all(|c| !c.is_face_up()));
    }

    #[test]
    fn test_leaving_the_screen_cancels_pending_mismatch_timer() {
        let mut app = matching_app();

        flip_at(&mut app, 0);
        flip_at(&mut app, 2);
        assert!(app.mismatch_deadline.is_some());

        app.handle_key(KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Menu);
        assert!(app.mismatch_deadline.is_none());
    }

    #[test]
    fn test_matching_cursor_stays_on_the_board() {
        let mut app = matching_app();

        app.handle_key(KeyCode::Left);
        app.handle_key(KeyCode::Up);
        assert_eq!(app.matching_cursor(), 0);

        for _ in 0..10 {
            app.handle_key(KeyCode::Right);
            app.handle_key(KeyCode::Down);
        }
        assert_eq!(app.matching_cursor(), 15);
    }

    #[test]
    fn test_reopening_a_game_discards_its_state() {
        let mut app = app();
        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('5'));
        app.handle_key(KeyCode::Esc);

        app.handle_key(KeyCode::Char('1'));
        assert!(app.tictactoe().state().history().is_empty());
        assert_eq!(app.tictactoe().state().current_player(), Player::X);
    }
}
