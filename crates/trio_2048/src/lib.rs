//! Pure 2048 game logic.
//!
//! A 4x4 grid of power-of-two tiles. Each move slides every row or
//! column toward one edge, merging equal neighbors once per pass; a
//! changed grid earns a random spawn. The slide is implemented once, for
//! Left, and the other three directions are reflect/transpose wrappers
//! around it.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod direction;
mod game;
mod grid;

pub use direction::Direction;
pub use game::Game2048;
pub use grid::{GRID_SIZE, Grid};
