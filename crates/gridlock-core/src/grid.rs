//! Cell-occupancy view derived from a piece sequence.

use std::fmt::{self, Display, Write as _};

use crate::{BOARD_SIZE, Piece, PieceId, board::BoardError};

const SIZE: usize = BOARD_SIZE as usize;

/// Which piece, if any, occupies each cell of the 6x6 playfield.
///
/// A grid is a pure rasterization of a board's piece sequence: it is rebuilt
/// whenever a board is constructed and never mutated on its own, so it can
/// always be treated as a cache of the sequence it came from.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Board, Piece, PieceId};
///
/// let board = Board::new(vec![Piece::prisoner(1)]).unwrap();
/// assert_eq!(board.grid().occupant(2, 1), Some(PieceId::PRISONER));
/// assert!(board.grid().is_empty(0, 0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [[Option<PieceId>; SIZE]; SIZE],
}

impl Grid {
    /// Builds the occupancy map for a piece sequence, rejecting pieces that
    /// leave the playfield or land on each other.
    pub(crate) fn rasterize(pieces: &[Piece]) -> Result<Self, BoardError> {
        let mut grid = Self {
            cells: [[None; SIZE]; SIZE],
        };
        for piece in pieces {
            if piece.row() >= BOARD_SIZE || piece.col() >= BOARD_SIZE {
                return Err(BoardError::OutOfBounds { id: piece.id() });
            }
            for (row, col) in piece.cells() {
                if row >= BOARD_SIZE || col >= BOARD_SIZE {
                    return Err(BoardError::OutOfBounds { id: piece.id() });
                }
                if let Some(other) = grid.occupant(row, col) {
                    return Err(BoardError::Overlap {
                        first: other,
                        second: piece.id(),
                    });
                }
                grid.set(row, col, piece.id());
            }
        }
        Ok(grid)
    }

    /// Returns the id of the piece covering a cell, or `None` for an empty
    /// cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the 6x6 playfield.
    #[must_use]
    pub fn occupant(&self, row: u8, col: u8) -> Option<PieceId> {
        self.cells[usize::from(row)][usize::from(col)]
    }

    /// Returns `true` if no piece covers the cell.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside the 6x6 playfield.
    #[must_use]
    pub fn is_empty(&self, row: u8, col: u8) -> bool {
        self.occupant(row, col).is_none()
    }

    pub(crate) fn set(&mut self, row: u8, col: u8, id: PieceId) {
        self.cells[usize::from(row)][usize::from(col)] = Some(id);
    }

    pub(crate) fn clear(&mut self, row: u8, col: u8) {
        self.cells[usize::from(row)][usize::from(col)] = None;
    }
}

impl Display for Grid {
    /// Renders one text row per grid row, each cell as a width-2 id or `.`
    /// for empty.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            for (i, cell) in row.iter().enumerate() {
                if i > 0 {
                    f.write_char(' ')?;
                }
                match cell {
                    Some(id) => write!(f, "{:>2}", id.value())?,
                    None => f.write_str(" .")?,
                }
            }
            f.write_char('\n')?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Orientation;

    #[test]
    fn test_rasterize_places_every_cell() {
        let pieces = vec![
            Piece::prisoner(1),
            Piece::block(2, 0, 0, Orientation::Vertical, 3),
        ];
        let grid = Grid::rasterize(&pieces).unwrap();

        assert_eq!(grid.occupant(2, 1), Some(PieceId::PRISONER));
        assert_eq!(grid.occupant(2, 2), Some(PieceId::PRISONER));
        for row in 0..3 {
            assert_eq!(grid.occupant(row, 0), Some(PieceId::new(2)));
        }

        // Everything else stays empty
        assert!(grid.is_empty(2, 3));
        assert!(grid.is_empty(5, 5));
    }

    #[test]
    fn test_rasterize_rejects_out_of_bounds() {
        // Leading cell inside, tail hanging past the right edge
        let pieces = vec![Piece::block(2, 0, 5, Orientation::Horizontal, 2)];
        assert_eq!(
            Grid::rasterize(&pieces),
            Err(BoardError::OutOfBounds {
                id: PieceId::new(2)
            })
        );

        // Leading cell itself outside
        let pieces = vec![Piece::block(2, 9, 0, Orientation::Vertical, 2)];
        assert_eq!(
            Grid::rasterize(&pieces),
            Err(BoardError::OutOfBounds {
                id: PieceId::new(2)
            })
        );
    }

    #[test]
    fn test_rasterize_rejects_overlap() {
        let pieces = vec![
            Piece::prisoner(1),
            Piece::block(2, 0, 2, Orientation::Vertical, 3),
        ];
        assert_eq!(
            Grid::rasterize(&pieces),
            Err(BoardError::Overlap {
                first: PieceId::PRISONER,
                second: PieceId::new(2),
            })
        );
    }

    #[test]
    fn test_display() {
        let pieces = vec![
            Piece::prisoner(0),
            Piece::block(12, 0, 3, Orientation::Vertical, 2),
        ];
        let grid = Grid::rasterize(&pieces).unwrap();
        let expected = concat!(
            " .  .  . 12  .  .\n",
            " .  .  . 12  .  .\n",
            " 1  1  .  .  .  .\n",
            " .  .  .  .  .  .\n",
            " .  .  .  .  .  .\n",
            " .  .  .  .  .  .\n",
        );
        assert_eq!(grid.to_string(), expected);
    }
}
