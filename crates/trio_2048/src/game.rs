//! Game engine for 2048.

use crate::direction::Direction;
use crate::grid::Grid;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

/// 2048 game engine.
///
/// Owns the grid, the score, and the spawn RNG. The presentation layer
/// issues one [`step`](Game2048::step) per swipe and redraws from the
/// grid and score.
#[derive(Debug, Clone)]
pub struct Game2048 {
    grid: Grid,
    score: u32,
    over: bool,
    rng: SmallRng,
}

impl Game2048 {
    /// Creates a new game with two spawned tiles.
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_entropy())
    }

    /// Creates a new game with a deterministic seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    fn from_rng(rng: SmallRng) -> Self {
        let mut game = Self {
            grid: Grid::new(),
            score: 0,
            over: false,
            rng,
        };
        game.spawn_tile();
        game.spawn_tile();
        game
    }

    /// Returns the grid.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Returns the score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Returns true once no move can change the grid.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Slides the grid without spawning. Returns whether it changed.
    ///
    /// The score grows by the value of each merge result; an unchanged
    /// slide leaves grid and score untouched. There are no preconditions -
    /// an impossible move simply returns false.
    #[instrument(skip(self))]
    pub fn slide(&mut self, direction: Direction) -> bool {
        let before = self.grid;
        let gained = self.grid.slide(direction);
        let changed = self.grid != before;
        if changed {
            self.score += gained;
        }
        changed
    }

    /// One full move: slide, then spawn a tile if the grid changed.
    ///
    /// Returns whether the grid changed. Terminality is re-evaluated
    /// after the spawn.
    #[instrument(skip(self))]
    pub fn step(&mut self, direction: Direction) -> bool {
        if self.over {
            return false;
        }

        let changed = self.slide(direction);
        if changed {
            self.spawn_tile();
        }
        changed
    }

    /// Spawns a tile into a uniformly random empty cell.
    ///
    /// The value is 2 three times out of four, 4 otherwise. No-op on a
    /// full grid. Terminality is recomputed after every spawn.
    #[instrument(skip(self))]
    pub fn spawn_tile(&mut self) {
        let empty = self.grid.empty_cells();
        if !empty.is_empty() {
            let (row, col) = empty[self.rng.gen_range(0..empty.len())];
            let value = if self.rng.gen_bool(0.25) { 4 } else { 2 };
            self.grid.set(row, col, value);
        }
        self.over = self.grid.is_terminal();
    }

    /// Clears the grid and score and spawns two fresh tiles.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.grid = Grid::new();
        self.score = 0;
        self.over = false;
        self.spawn_tile();
        self.spawn_tile();
    }
}

impl Default for Game2048 {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game_with_grid(rows: [[u32; 4]; 4]) -> Game2048 {
        let mut game = Game2048::with_seed(0);
        game.grid = Grid::from_rows(rows);
        game.score = 0;
        game.over = game.grid.is_terminal();
        game
    }

    #[test]
    fn test_unmovable_slide_returns_false_without_effect() {
        let mut game = game_with_grid([
            [2, 0, 0, 0],
            [4, 0, 0, 0],
            [8, 0, 0, 0],
            [16, 0, 0, 0],
        ]);
        let before = *game.grid();

        assert!(!game.slide(Direction::Left));
        assert_eq!(game.grid(), &before);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_slide_conserves_tile_sum() {
        let mut game = game_with_grid([
            [2, 2, 4, 0],
            [0, 4, 4, 0],
            [2, 0, 2, 8],
            [8, 8, 8, 8],
        ]);
        let sum = game.grid().tile_sum();

        assert!(game.slide(Direction::Left));
        assert_eq!(game.grid().tile_sum(), sum);
        assert_eq!(game.score(), 4 + 8 + 4 + 32);
    }

    #[test]
    fn test_step_spawns_exactly_one_tile() {
        let mut game = game_with_grid([
            [2, 2, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
            [0, 0, 0, 0],
        ]);

        assert!(game.step(Direction::Left));

        // The merged 4 plus one spawned tile.
        let tiles = 16 - game.grid().empty_cells().len();
        assert_eq!(tiles, 2);
        assert_eq!(game.score(), 4);
    }

    #[test]
    fn test_step_after_game_over_is_rejected() {
        let mut game = game_with_grid([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        assert!(game.is_over());

        let before = *game.grid();
        assert!(!game.step(Direction::Left));
        assert_eq!(game.grid(), &before);
    }

    #[test]
    fn test_spawn_into_last_cell_can_end_the_game() {
        // The empty cell neighbors only 8s, so either spawn value
        // leaves no adjacent equal pair.
        let mut game = game_with_grid([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 8],
            [4, 2, 8, 0],
        ]);
        assert!(!game.is_over());

        game.spawn_tile();

        assert!(game.grid().empty_cells().is_empty());
        assert!(game.is_over());
    }

    #[test]
    fn test_spawn_on_full_grid_is_a_no_op() {
        let mut game = game_with_grid([
            [2, 4, 2, 4],
            [4, 2, 4, 2],
            [2, 4, 2, 4],
            [4, 2, 4, 2],
        ]);
        let before = *game.grid();

        game.spawn_tile();
        assert_eq!(game.grid(), &before);
    }
}
