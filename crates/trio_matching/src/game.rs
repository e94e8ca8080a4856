//! Game engine for the matching game.

use crate::action::{FlipError, FlipOutcome};
use crate::types::{Card, Symbol};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Memory/matching game engine.
///
/// The locked state is the presence of a recorded mismatched pair, so
/// the lock and the pair it guards cannot disagree. While locked, all
/// flips are rejected; [`resolve_mismatch`](MatchingGame::resolve_mismatch)
/// unlocks.
#[derive(Debug, Clone)]
pub struct MatchingGame {
    cards: Vec<Card>,
    pending: Option<usize>,
    mismatch: Option<(usize, usize)>,
    won: bool,
    rng: SmallRng,
}

impl MatchingGame {
    /// Creates a new game with a uniformly shuffled deck.
    pub fn new() -> Self {
        Self::from_rng(SmallRng::from_entropy())
    }

    /// Creates a new shuffled game with a deterministic seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(SmallRng::seed_from_u64(seed))
    }

    /// Creates a game with the deck in symbol order (pairs adjacent).
    ///
    /// For deterministic tests; production construction shuffles.
    pub fn unshuffled() -> Self {
        Self {
            cards: Self::deck(),
            pending: None,
            mismatch: None,
            won: false,
            rng: SmallRng::seed_from_u64(0),
        }
    }

    fn from_rng(mut rng: SmallRng) -> Self {
        let mut cards = Self::deck();
        cards.shuffle(&mut rng);
        Self {
            cards,
            pending: None,
            mismatch: None,
            won: false,
            rng,
        }
    }

    fn deck() -> Vec<Card> {
        Symbol::iter()
            .flat_map(|symbol| [Card::new(symbol), Card::new(symbol)])
            .collect()
    }

    /// Returns the cards in board order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the index of the single pending face-up card, if any.
    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    /// Returns true while a mismatch awaits resolution.
    pub fn is_locked(&self) -> bool {
        self.mismatch.is_some()
    }

    /// Returns true once all cards are matched.
    pub fn is_won(&self) -> bool {
        self.won
    }

    /// Flips the card at the given index face up.
    ///
    /// The first flip of a pair records the card as pending. The second
    /// compares symbols: a match marks both cards matched (winning the
    /// game if they were the last pair); a mismatch locks the board and
    /// the caller must schedule [`resolve_mismatch`](Self::resolve_mismatch).
    ///
    /// # Errors
    ///
    /// Rejected while locked, for an out-of-bounds index, and for a card
    /// that is already matched or already face up. The state is unchanged
    /// on error.
    #[instrument(skip(self))]
    pub fn flip(&mut self, index: usize) -> Result<FlipOutcome, FlipError> {
        if self.mismatch.is_some() {
            return Err(FlipError::Locked);
        }

        let card = self
            .cards
            .get(index)
            .copied()
            .ok_or(FlipError::OutOfBounds(index))?;
        if card.is_matched() {
            return Err(FlipError::AlreadyMatched);
        }
        if card.is_face_up() {
            return Err(FlipError::AlreadyFaceUp);
        }

        self.cards[index].turn_up();

        let Some(first) = self.pending.take() else {
            self.pending = Some(index);
            return Ok(FlipOutcome::First);
        };

        if self.cards[first].symbol() == self.cards[index].symbol() {
            self.cards[first].set_matched();
            self.cards[index].set_matched();
            self.won = self.cards.iter().all(Card::is_matched);
            Ok(FlipOutcome::Matched { won: self.won })
        } else {
            self.mismatch = Some((first, index));
            Ok(FlipOutcome::Mismatch)
        }
    }

    /// Turns a mismatched pair back face down and unlocks the board.
    ///
    /// The completion callback of the caller-scheduled delay. No-op when
    /// no mismatch is pending, so a late timer cannot corrupt state.
    #[instrument(skip(self))]
    pub fn resolve_mismatch(&mut self) {
        if let Some((first, second)) = self.mismatch.take() {
            self.cards[first].turn_down();
            self.cards[second].turn_down();
        }
    }

    /// Reshuffles the deck and returns every card face down and unmatched.
    ///
    /// Any recorded pending card or mismatched pair is discarded; the
    /// caller must also cancel its own outstanding resolution timer.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cards = Self::deck();
        self.cards.shuffle(&mut self.rng);
        self.pending = None;
        self.mismatch = None;
        self.won = false;
    }
}

impl Default for MatchingGame {
    fn default() -> Self {
        Self::new()
    }
}
