//! Flip outcomes and errors for the matching game.

use serde::{Deserialize, Serialize};

/// Outcome of a successful flip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlipOutcome {
    /// First card of a pair turned up; awaiting the second flip.
    First,
    /// The pair matched and stays face up.
    Matched {
        /// True when this match completed the board.
        won: bool,
    },
    /// The pair did not match. The board is locked until the caller
    /// invokes [`crate::MatchingGame::resolve_mismatch`] after its delay.
    Mismatch,
}

/// Error that can occur when flipping a card.
///
/// A rejected flip leaves the game state unchanged; the caller may treat
/// the error as a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum FlipError {
    /// The card index is outside the board.
    #[display("Card index {} is out of bounds", _0)]
    OutOfBounds(usize),

    /// A mismatch is pending resolution; input is ignored until then.
    #[display("Board is locked while a mismatch is pending")]
    Locked,

    /// The card has already been matched.
    #[display("Card is already matched")]
    AlreadyMatched,

    /// The card is already face up.
    #[display("Card is already face up")]
    AlreadyFaceUp,
}

impl std::error::Error for FlipError {}
