//! Pure memory/matching card game logic.
//!
//! Sixteen cards carry eight symbols, two cards each. The player flips
//! cards one at a time; a mismatched pair locks the board until the
//! caller resolves it after a delay of its choosing. The engine never
//! schedules anything itself - it exposes
//! [`MatchingGame::resolve_mismatch`] as the completion callback of an
//! externally managed timer.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
mod types;

pub use action::{FlipError, FlipOutcome};
pub use game::MatchingGame;
pub use types::{Card, DECK_SIZE, Symbol};
