//! Board state: an ordered piece sequence, its grid, and its ancestry.

use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use crate::{BOARD_SIZE, EXIT_ROW, Grid, Orientation, Piece, PieceId, PieceKind};

/// Reasons a piece sequence does not form a valid board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardError {
    /// A piece extends past the 6x6 playfield.
    #[display("piece {id} extends out of bounds")]
    OutOfBounds { id: PieceId },
    /// Two pieces cover the same cell.
    #[display("pieces {first} and {second} overlap")]
    Overlap { first: PieceId, second: PieceId },
    /// Two pieces carry the same id.
    #[display("duplicate piece id {id}")]
    DuplicateId { id: PieceId },
    /// The sequence contains no prisoner.
    #[display("board has no prisoner")]
    MissingPrisoner,
    /// The sequence contains more than one prisoner.
    #[display("board has more than one prisoner")]
    ExtraPrisoner,
    /// The prisoner is vertical or off the exit row.
    #[display("prisoner must lie horizontally in row {EXIT_ROW}")]
    MisplacedPrisoner,
}

/// A puzzle position: an ordered piece sequence, the grid rasterized from
/// it, and the chain of ancestor positions that produced it.
///
/// Piece order is significant. Two boards are equal exactly when their
/// sequences are equal element for element, and successor enumeration
/// visits pieces in sequence order, so every search over boards is
/// deterministic. Ancestry never participates in equality or hashing.
///
/// Successors produced by [`Board::slide_successors`] share their parent
/// chain, so storing many search states stays cheap; [`Board::path`]
/// recovers the move sequence that reached a state.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Board, Orientation, Piece};
///
/// let board = Board::new(vec![
///     Piece::prisoner(0),
///     Piece::block(2, 0, 4, Orientation::Vertical, 2),
/// ])
/// .unwrap();
/// assert!(board.is_solved());
/// assert_eq!(board.path_len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Board {
    pieces: Vec<Piece>,
    grid: Grid,
    prisoner: usize,
    parent: Option<Arc<Board>>,
    path_len: usize,
}

impl Board {
    /// Validates a piece sequence into a board that is the root of a fresh
    /// path.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] when a piece leaves the playfield, two
    /// pieces overlap or share an id, or the sequence does not contain
    /// exactly one prisoner lying horizontally in the exit row.
    pub fn new(pieces: Vec<Piece>) -> Result<Self, BoardError> {
        let grid = Grid::rasterize(&pieces)?;
        for (i, piece) in pieces.iter().enumerate() {
            if pieces[..i].iter().any(|other| other.id() == piece.id()) {
                return Err(BoardError::DuplicateId { id: piece.id() });
            }
        }
        let mut prisoner = None;
        for (i, piece) in pieces.iter().enumerate() {
            if piece.kind() == PieceKind::Prisoner {
                if prisoner.is_some() {
                    return Err(BoardError::ExtraPrisoner);
                }
                prisoner = Some(i);
            }
        }
        let Some(prisoner) = prisoner else {
            return Err(BoardError::MissingPrisoner);
        };
        let piece = &pieces[prisoner];
        if piece.orientation() != Orientation::Horizontal || piece.row() != EXIT_ROW {
            return Err(BoardError::MisplacedPrisoner);
        }
        Ok(Self {
            pieces,
            grid,
            prisoner,
            parent: None,
            path_len: 1,
        })
    }

    /// Appends one piece to the sequence, revalidating the result.
    ///
    /// The returned board is the root of a fresh path; ancestry of `self`
    /// is not carried over.
    ///
    /// # Errors
    ///
    /// Returns a [`BoardError`] when the grown sequence is invalid, most
    /// commonly [`BoardError::Overlap`] when the new piece lands on an
    /// existing one.
    pub fn with_piece(&self, piece: Piece) -> Result<Self, BoardError> {
        let mut pieces = self.pieces.clone();
        pieces.push(piece);
        Self::new(pieces)
    }

    /// The pieces of this board, in sequence order.
    #[must_use]
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    /// The cell-occupancy view of this board.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The prisoner piece.
    #[must_use]
    pub fn prisoner(&self) -> &Piece {
        &self.pieces[self.prisoner]
    }

    /// The position this one was derived from, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&Board> {
        self.parent.as_deref()
    }

    /// Number of states on the path from the path root to this board, both
    /// endpoints included. A path root reports 1.
    #[must_use]
    pub fn path_len(&self) -> usize {
        self.path_len
    }

    /// The path from the path root to this board, in move order.
    #[must_use]
    pub fn path(&self) -> Vec<Board> {
        let mut path = Vec::with_capacity(self.path_len);
        path.push(self.clone());
        let mut node = self.parent.as_deref();
        while let Some(board) = node {
            path.push(board.clone());
            node = board.parent.as_deref();
        }
        path.reverse();
        path
    }

    /// Returns `true` when the prisoner's row is clear from the prisoner to
    /// the right edge, so it can slide off the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use gridlock_core::{Board, Orientation, Piece};
    ///
    /// let blocked = Board::new(vec![
    ///     Piece::prisoner(0),
    ///     Piece::block(2, 1, 4, Orientation::Vertical, 2),
    /// ])
    /// .unwrap();
    /// assert!(!blocked.is_solved());
    /// ```
    #[must_use]
    pub fn is_solved(&self) -> bool {
        let prisoner = self.prisoner();
        for col in prisoner.col()..BOARD_SIZE {
            match self.grid.occupant(prisoner.row(), col) {
                Some(id) if id != prisoner.id() => return false,
                _ => {}
            }
        }
        true
    }

    /// Builds the board that results from moving the piece at `index` to a
    /// new leading cell. The destination must already be known clear.
    ///
    /// With `parent` set, the new board extends that board's path by one;
    /// without it, the new board is the root of a fresh path.
    pub(crate) fn successor(
        &self,
        index: usize,
        row: u8,
        col: u8,
        parent: Option<&Arc<Board>>,
    ) -> Board {
        let mut pieces = self.pieces.clone();
        let moved = pieces[index].moved_to(row, col);
        let mut grid = self.grid;
        for (r, c) in pieces[index].cells() {
            grid.clear(r, c);
        }
        for (r, c) in moved.cells() {
            grid.set(r, c, moved.id());
        }
        pieces[index] = moved;
        debug_assert_eq!(Grid::rasterize(&pieces).as_ref(), Ok(&grid));
        let (parent, path_len) = match parent {
            Some(parent) => (Some(Arc::clone(parent)), self.path_len + 1),
            None => (None, 1),
        };
        Board {
            pieces,
            grid,
            prisoner: self.prisoner,
            parent,
            path_len,
        }
    }
}

// Ancestry stays out of equality and hashing so a position reached twice by
// different routes dedups as one state.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.pieces == other.pieces
    }
}

impl Eq for Board {}

impl Hash for Board {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pieces.hash(state);
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.grid, f)
    }
}
