//! Slide directions.

use serde::{Deserialize, Serialize};

/// The four possible move directions.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
)]
pub enum Direction {
    /// Slide every row toward the left edge.
    Left,
    /// Slide every row toward the right edge.
    Right,
    /// Slide every column toward the top edge.
    Up,
    /// Slide every column toward the bottom edge.
    Down,
}
