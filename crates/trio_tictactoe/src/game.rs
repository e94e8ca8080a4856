//! Game engine for tic-tac-toe.

use crate::action::MoveError;
use crate::position::Position;
use crate::rules;
use crate::types::{GameState, GameStatus};
use tracing::instrument;

/// Tic-tac-toe game engine.
///
/// One [`place`](Game::place) call per discrete input; the presentation
/// layer reads the full [`GameState`] snapshot after each call.
#[derive(Debug, Clone)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game with an empty board and X to move.
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Places the current player's mark at the given position.
    ///
    /// On success the status is re-evaluated: three-in-a-row finishes the
    /// game with a winner and a winning line, a full board finishes it as
    /// a draw, otherwise the turn passes to the opponent.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`] after a terminal state and
    /// [`MoveError::SquareOccupied`] for a taken square. The state is
    /// unchanged on error.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn place(&mut self, pos: Position) -> Result<(), MoveError> {
        if self.state.status().is_over() {
            return Err(MoveError::GameOver);
        }

        if !self.state.board().is_empty(pos) {
            return Err(MoveError::SquareOccupied(pos));
        }

        let player = self.state.current_player();
        self.state.apply_move(pos, player);

        if let Some((winner, line)) = rules::winning_line(self.state.board()) {
            self.state.set_status(GameStatus::Won(winner), Some(line));
        } else if rules::is_full(self.state.board()) {
            self.state.set_status(GameStatus::Draw, None);
        } else {
            self.state.switch_player();
        }

        Ok(())
    }

    /// Reinitializes to an empty board with X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.state = GameState::new();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
