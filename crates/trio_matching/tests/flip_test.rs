//! Tests for the matching game engine.
//!
//! Scenarios use the unshuffled deck, where cards 2i and 2i+1 carry the
//! same symbol.

use trio_matching::{FlipError, FlipOutcome, MatchingGame};

fn face_up_unmatched(game: &MatchingGame) -> usize {
    game.cards()
        .iter()
        .filter(|card| card.is_face_up() && !card.is_matched())
        .count()
}

#[test]
fn test_first_flip_records_pending() {
    let mut game = MatchingGame::unshuffled();

    assert_eq!(game.flip(0), Ok(FlipOutcome::First));
    assert_eq!(game.pending(), Some(0));
    assert!(game.cards()[0].is_face_up());
    assert!(!game.is_locked());
}

#[test]
fn test_matching_pair_stays_up() {
    let mut game = MatchingGame::unshuffled();

    game.flip(0).unwrap();
    assert_eq!(game.flip(1), Ok(FlipOutcome::Matched { won: false }));

    assert!(game.cards()[0].is_matched());
    assert!(game.cards()[1].is_matched());
    assert_eq!(game.pending(), None);
    assert!(!game.is_locked());
}

#[test]
fn test_mismatch_locks_until_resolved() {
    let mut game = MatchingGame::unshuffled();

    game.flip(0).unwrap();
    assert_eq!(game.flip(2), Ok(FlipOutcome::Mismatch));

    // Exactly two cards face up while the mismatch is pending.
    assert!(game.is_locked());
    assert_eq!(face_up_unmatched(&game), 2);

    // All input is rejected while locked.
    let before: Vec<_> = game.cards().to_vec();
    assert_eq!(game.flip(4), Err(FlipError::Locked));
    assert_eq!(game.cards(), &before[..]);

    game.resolve_mismatch();
    assert!(!game.is_locked());
    assert_eq!(face_up_unmatched(&game), 0);
    assert_eq!(game.pending(), None);
}

#[test]
fn test_flip_matched_card_is_rejected() {
    let mut game = MatchingGame::unshuffled();
    game.flip(0).unwrap();
    game.flip(1).unwrap();

    let before: Vec<_> = game.cards().to_vec();
    assert_eq!(game.flip(0), Err(FlipError::AlreadyMatched));
    assert_eq!(game.cards(), &before[..]);
}

#[test]
fn test_flip_face_up_card_is_rejected() {
    let mut game = MatchingGame::unshuffled();
    game.flip(0).unwrap();

    assert_eq!(game.flip(0), Err(FlipError::AlreadyFaceUp));
    // The pending card is untouched.
    assert_eq!(game.pending(), Some(0));
}

#[test]
fn test_out_of_bounds_is_rejected() {
    let mut game = MatchingGame::unshuffled();
    assert_eq!(game.flip(16), Err(FlipError::OutOfBounds(16)));
    assert_eq!(game.pending(), None);
}

#[test]
fn test_win_when_all_pairs_matched() {
    let mut game = MatchingGame::unshuffled();

    for pair in 0..8 {
        let won = pair == 7;
        game.flip(2 * pair).unwrap();
        assert_eq!(game.flip(2 * pair + 1), Ok(FlipOutcome::Matched { won }));
        assert_eq!(game.is_won(), won);
    }

    assert!(game.cards().iter().all(|card| card.is_matched()));
}

#[test]
fn test_resolve_without_mismatch_is_a_no_op() {
    let mut game = MatchingGame::unshuffled();
    game.flip(0).unwrap();

    game.resolve_mismatch();

    // The pending card stays face up; nothing was resolved.
    assert_eq!(game.pending(), Some(0));
    assert!(game.cards()[0].is_face_up());
}

#[test]
fn test_reset_clears_mismatch_and_flags() {
    let mut game = MatchingGame::with_seed(3);

    // Force a mismatch on the shuffled deck.
    let first = 0;
    let second = (1..16)
        .find(|&i| game.cards()[i].symbol() != game.cards()[first].symbol())
        .unwrap();
    game.flip(first).unwrap();
    assert_eq!(game.flip(second), Ok(FlipOutcome::Mismatch));

    game.reset();

    assert!(!game.is_locked());
    assert!(!game.is_won());
    assert_eq!(game.pending(), None);
    assert!(
        game.cards()
            .iter()
            .all(|card| !card.is_face_up() && !card.is_matched())
    );
}
