//! Successor enumeration: maximal slides and single steps.

use std::sync::Arc;

use crate::{Board, Direction, Piece};

impl Board {
    /// All positions reachable by sliding one piece as far as it can go.
    ///
    /// Enumeration is deterministic: pieces are visited in sequence order,
    /// and each piece tries its two directions in a fixed order (left then
    /// right for horizontal pieces, up then down for vertical ones). A
    /// piece whose adjacent cell in a direction is blocked or off the board
    /// contributes no move for that direction.
    ///
    /// Every successor records this board as its parent, extending the
    /// path: its [`path_len`](Board::path_len) is one more than this
    /// board's.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::presets;
    ///
    /// let board = presets::sample_a();
    /// let successors = board.slide_successors();
    /// assert_eq!(successors.len(), 4);
    /// assert!(successors.iter().all(|s| s.path_len() == 2));
    /// ```
    #[must_use]
    pub fn slide_successors(&self) -> Vec<Board> {
        let parent = Arc::new(self.clone());
        let mut successors = Vec::new();
        for (index, piece) in self.pieces().iter().enumerate() {
            for direction in piece.orientation().directions() {
                if let Some((row, col)) = self.slide_destination(piece, direction, true) {
                    successors.push(self.successor(index, row, col, Some(&parent)));
                }
            }
        }
        successors
    }

    /// All positions reachable by moving one piece a single cell.
    ///
    /// Enumeration order matches [`slide_successors`](Board::slide_successors).
    /// Unlike slide successors, each neighbor is the root of a fresh path:
    /// it has no parent and a [`path_len`](Board::path_len) of 1. Neighbors
    /// model edits to a position rather than moves along a solution.
    #[must_use]
    pub fn step_neighbors(&self) -> Vec<Board> {
        let mut neighbors = Vec::new();
        for (index, piece) in self.pieces().iter().enumerate() {
            for direction in piece.orientation().directions() {
                if let Some((row, col)) = self.slide_destination(piece, direction, false) {
                    neighbors.push(self.successor(index, row, col, None));
                }
            }
        }
        neighbors
    }

    /// Leading cell `piece` ends up on when sliding toward `direction`, one
    /// cell at a time while the next cell is free; `None` when even the
    /// first step is blocked.
    fn slide_destination(
        &self,
        piece: &Piece,
        direction: Direction,
        maximal: bool,
    ) -> Option<(u8, u8)> {
        let mut probe = *piece;
        let mut moved = false;
        loop {
            let Some((row, col)) = probe.entry_cell(direction) else {
                break;
            };
            if !self.grid().is_empty(row, col) {
                break;
            }
            let (row, col) = match direction {
                // The entered cell is the new leading cell.
                Direction::Left | Direction::Up => (row, col),
                Direction::Right => (probe.row(), probe.col() + 1),
                Direction::Down => (probe.row() + 1, probe.col()),
            };
            probe = probe.moved_to(row, col);
            moved = true;
            if !maximal {
                break;
            }
        }
        moved.then(|| (probe.row(), probe.col()))
    }
}
