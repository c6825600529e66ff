//! Fixed reference boards, graded by how many states their shortest
//! solutions pass through (start included).
//!
//! The small [`sample_a`]/[`sample_b`]/[`sample_c`] boards are handy in
//! docs and tests; the graded pairs cover the difficulty range produced by
//! the generator.

use crate::Orientation::{Horizontal, Vertical};
use crate::{Board, Piece};

fn board(pieces: Vec<Piece>) -> Board {
    Board::new(pieces).expect("preset layout is valid")
}

/// Five pieces; solvable in 5 states.
#[must_use]
pub fn sample_a() -> Board {
    board(vec![
        Piece::prisoner(1),
        Piece::block(2, 2, 0, Vertical, 3),
        Piece::block(3, 1, 0, Horizontal, 2),
        Piece::block(4, 1, 3, Vertical, 3),
        Piece::block(5, 4, 1, Horizontal, 3),
    ])
}

/// Five pieces; solvable in 3 states.
#[must_use]
pub fn sample_b() -> Board {
    board(vec![
        Piece::prisoner(1),
        Piece::block(2, 1, 4, Horizontal, 2),
        Piece::block(3, 0, 2, Vertical, 2),
        Piece::block(4, 0, 3, Vertical, 3),
        Piece::block(5, 2, 4, Vertical, 3),
    ])
}

/// Twelve pieces; solvable in 8 states.
#[must_use]
pub fn sample_c() -> Board {
    board(vec![
        Piece::prisoner(0),
        Piece::block(2, 0, 0, Vertical, 2),
        Piece::block(3, 0, 1, Horizontal, 2),
        Piece::block(4, 2, 2, Vertical, 2),
        Piece::block(5, 1, 1, Horizontal, 2),
        Piece::block(6, 2, 3, Vertical, 2),
        Piece::block(7, 4, 3, Horizontal, 2),
        Piece::block(8, 0, 4, Vertical, 3),
        Piece::block(9, 5, 3, Horizontal, 2),
        Piece::block(10, 3, 1, Vertical, 2),
        Piece::block(12, 4, 0, Vertical, 2),
        Piece::block(14, 4, 5, Vertical, 2),
    ])
}

/// Eleven pieces; solvable in 15 states.
#[must_use]
pub fn beginner_1() -> Board {
    board(vec![
        Piece::prisoner(0),
        Piece::block(2, 0, 0, Vertical, 2),
        Piece::block(4, 0, 1, Vertical, 2),
        Piece::block(6, 3, 1, Vertical, 2),
        Piece::block(3, 0, 2, Horizontal, 2),
        Piece::block(5, 0, 4, Horizontal, 2),
        Piece::block(7, 1, 2, Horizontal, 2),
        Piece::block(8, 2, 2, Vertical, 2),
        Piece::block(9, 4, 2, Horizontal, 2),
        Piece::block(11, 3, 3, Horizontal, 2),
        Piece::block(10, 4, 4, Vertical, 2),
    ])
}

/// Fourteen pieces; solvable in 15 states.
#[must_use]
pub fn beginner_2() -> Board {
    board(vec![
        Piece::prisoner(1),
        Piece::block(2, 0, 2, Vertical, 2),
        Piece::block(4, 0, 3, Vertical, 2),
        Piece::block(3, 0, 4, Horizontal, 2),
        Piece::block(5, 1, 0, Horizontal, 2),
        Piece::block(6, 1, 5, Vertical, 2),
        Piece::block(8, 2, 0, Vertical, 3),
        Piece::block(10, 2, 3, Vertical, 2),
        Piece::block(12, 2, 4, Vertical, 2),
        Piece::block(14, 3, 1, Vertical, 2),
        Piece::block(16, 3, 2, Vertical, 2),
        Piece::block(18, 4, 4, Vertical, 2),
        Piece::block(7, 5, 0, Horizontal, 2),
        Piece::block(9, 5, 2, Horizontal, 2),
    ])
}

/// Eleven pieces; solvable in 22 states.
#[must_use]
pub fn moderate_1() -> Board {
    board(vec![
        Piece::prisoner(0),
        Piece::block(2, 3, 0, Vertical, 2),
        Piece::block(3, 5, 0, Horizontal, 2),
        Piece::block(5, 3, 1, Horizontal, 3),
        Piece::block(4, 0, 1, Vertical, 2),
        Piece::block(6, 0, 2, Vertical, 3),
        Piece::block(8, 0, 3, Vertical, 2),
        Piece::block(7, 5, 2, Horizontal, 2),
        Piece::block(9, 0, 4, Horizontal, 2),
        Piece::block(11, 1, 4, Horizontal, 2),
        Piece::block(10, 3, 5, Vertical, 3),
    ])
}

/// Eleven pieces; solvable in 22 states.
#[must_use]
pub fn moderate_2() -> Board {
    board(vec![
        Piece::prisoner(0),
        Piece::block(3, 3, 0, Horizontal, 2),
        Piece::block(2, 4, 0, Vertical, 2),
        Piece::block(4, 0, 1, Vertical, 2),
        Piece::block(5, 5, 1, Horizontal, 2),
        Piece::block(7, 0, 2, Horizontal, 3),
        Piece::block(9, 1, 2, Horizontal, 3),
        Piece::block(6, 2, 2, Vertical, 3),
        Piece::block(8, 3, 3, Vertical, 3),
        Piece::block(10, 2, 4, Vertical, 2),
        Piece::block(12, 0, 5, Vertical, 3),
    ])
}

/// Ten pieces; solvable in 26 states.
#[must_use]
pub fn advanced_1() -> Board {
    board(vec![
        Piece::prisoner(0),
        Piece::block(2, 0, 0, Vertical, 2),
        Piece::block(3, 0, 1, Horizontal, 3),
        Piece::block(4, 0, 4, Vertical, 3),
        Piece::block(6, 0, 5, Vertical, 2),
        Piece::block(8, 1, 2, Vertical, 2),
        Piece::block(10, 1, 3, Vertical, 2),
        Piece::block(12, 3, 3, Vertical, 2),
        Piece::block(5, 4, 4, Horizontal, 2),
        Piece::block(7, 5, 2, Horizontal, 3),
    ])
}

/// Ten pieces; solvable in 28 states.
#[must_use]
pub fn advanced_2() -> Board {
    board(vec![
        Piece::prisoner(0),
        Piece::block(2, 0, 3, Vertical, 2),
        Piece::block(3, 0, 4, Horizontal, 2),
        Piece::block(4, 1, 2, Vertical, 2),
        Piece::block(6, 1, 4, Vertical, 2),
        Piece::block(8, 2, 3, Vertical, 2),
        Piece::block(10, 2, 5, Vertical, 3),
        Piece::block(12, 3, 0, Vertical, 2),
        Piece::block(14, 3, 4, Vertical, 2),
        Piece::block(5, 4, 1, Horizontal, 3),
    ])
}

/// Fourteen pieces; solvable in 34 states.
#[must_use]
pub fn expert_1() -> Board {
    board(vec![
        Piece::prisoner(1),
        Piece::block(3, 0, 0, Horizontal, 2),
        Piece::block(2, 0, 3, Vertical, 3),
        Piece::block(5, 0, 4, Horizontal, 2),
        Piece::block(4, 1, 0, Vertical, 2),
        Piece::block(7, 1, 4, Horizontal, 2),
        Piece::block(6, 2, 5, Vertical, 2),
        Piece::block(8, 3, 0, Vertical, 2),
        Piece::block(10, 3, 1, Vertical, 2),
        Piece::block(12, 3, 2, Vertical, 2),
        Piece::block(9, 3, 3, Horizontal, 2),
        Piece::block(14, 4, 4, Vertical, 2),
        Piece::block(16, 4, 5, Vertical, 2),
        Piece::block(11, 5, 0, Horizontal, 3),
    ])
}

/// Twelve pieces; solvable in 33 states.
#[must_use]
pub fn expert_2() -> Board {
    board(vec![
        Piece::prisoner(0),
        Piece::block(2, 0, 1, Vertical, 2),
        Piece::block(4, 0, 2, Vertical, 3),
        Piece::block(6, 0, 3, Vertical, 2),
        Piece::block(3, 0, 4, Horizontal, 2),
        Piece::block(5, 1, 4, Horizontal, 2),
        Piece::block(8, 3, 0, Vertical, 2),
        Piece::block(7, 3, 1, Horizontal, 3),
        Piece::block(10, 3, 5, Vertical, 3),
        Piece::block(9, 4, 1, Horizontal, 2),
        Piece::block(11, 5, 0, Horizontal, 2),
        Piece::block(13, 5, 2, Horizontal, 2),
    ])
}
