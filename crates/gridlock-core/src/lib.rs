//! Board model for 6x6 sliding-block escape puzzles.
//!
//! This crate provides the data structures shared by the solver and the
//! generator: pieces on a 6x6 playfield, validated board states, and
//! deterministic enumeration of the moves a state allows. One piece, the
//! prisoner, must reach the right edge of its fixed row; every other piece
//! only ever slides along its own axis.
//!
//! # Overview
//!
//! 1. **Pieces** - [`piece`]: identifiers, orientation, kind, and geometry
//!    of a single piece.
//! 2. **Boards** - [`board`] and [`grid`]: an ordered piece sequence
//!    validated into a [`Board`], with a rasterized [`Grid`] for cell
//!    lookups and a parent chain recording how a search reached the state.
//! 3. **Moves** - [`Board::slide_successors`] enumerates maximal slides for
//!    solving; [`Board::step_neighbors`] enumerates single-cell moves for
//!    neighborhood edits.
//! 4. **Presets** - [`presets`]: fixed reference boards graded from a few
//!    states up to the mid thirties.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::{Board, Orientation, Piece};
//!
//! // A tower of three cells blocks the prisoner's row...
//! let board = Board::new(vec![
//!     Piece::prisoner(0),
//!     Piece::block(2, 0, 2, Orientation::Vertical, 3),
//! ])
//! .unwrap();
//! assert!(!board.is_solved());
//!
//! // ...and sliding it down is the only available move, which opens the row.
//! let successors = board.slide_successors();
//! assert_eq!(successors.len(), 1);
//! assert!(successors[0].is_solved());
//! assert_eq!(successors[0].path_len(), 2);
//! ```

pub mod board;
pub mod grid;
pub mod piece;
pub mod presets;

mod moves;

// Re-export commonly used types
pub use self::{
    board::{Board, BoardError},
    grid::Grid,
    piece::{Direction, Orientation, Piece, PieceId, PieceKind},
};

/// Number of rows and columns of the playfield.
pub const BOARD_SIZE: u8 = 6;

/// The row the prisoner occupies and escapes through.
pub const EXIT_ROW: u8 = 2;
