//! Win detection logic for tic-tac-toe.

use crate::position::Position;
use crate::types::{Board, Player, Square};
use tracing::instrument;

const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Checks for three-in-a-row and returns the winner with the line.
///
/// Returns `Some((player, line))` if the player occupies all three
/// positions of one of the 8 fixed lines, `None` otherwise.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    for line @ [a, b, c] in LINES {
        let sq = board.get(a);
        if sq != Square::Empty && sq == board.get(b) && sq == board.get(c) {
            if let Square::Occupied(player) = sq {
                return Some((player, line));
            }
        }
    }

    None
}

/// Checks if there is a winner on the board.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}
