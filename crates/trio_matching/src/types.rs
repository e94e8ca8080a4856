//! Core domain types for the matching game.

use serde::{Deserialize, Serialize};

/// Number of cards on the board.
pub const DECK_SIZE: usize = 16;

/// Symbol on a card face. Eight symbols, each on exactly two cards.
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
pub enum Symbol {
    /// Game controller.
    GameController,
    /// Heart.
    Heart,
    /// Star.
    Star,
    /// Moon.
    Moon,
    /// Lightning bolt.
    Bolt,
    /// Hare.
    Hare,
    /// Tortoise.
    Tortoise,
    /// Ant.
    Ant,
}

impl Symbol {
    /// Short label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Symbol::GameController => "Pad",
            Symbol::Heart => "Heart",
            Symbol::Star => "Star",
            Symbol::Moon => "Moon",
            Symbol::Bolt => "Bolt",
            Symbol::Hare => "Hare",
            Symbol::Tortoise => "Shell",
            Symbol::Ant => "Ant",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A card on the matching board.
///
/// A matched card is always face up; the engine never turns a matched
/// card back down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    symbol: Symbol,
    face_up: bool,
    matched: bool,
}

impl Card {
    /// Creates a face-down, unmatched card.
    pub(crate) fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            face_up: false,
            matched: false,
        }
    }

    /// Returns the card's symbol.
    pub fn symbol(&self) -> Symbol {
        self.symbol
    }

    /// Returns true if the card is face up.
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    /// Returns true if the card has been matched.
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    pub(crate) fn turn_up(&mut self) {
        self.face_up = true;
    }

    pub(crate) fn turn_down(&mut self) {
        self.face_up = false;
    }

    pub(crate) fn set_matched(&mut self) {
        self.matched = true;
        self.face_up = true;
    }
}
