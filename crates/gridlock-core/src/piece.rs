//! Piece representation: identifiers, orientation, kind, and geometry.

use std::fmt::{self, Display};
use std::num::NonZeroU8;

use crate::{BOARD_SIZE, EXIT_ROW};

/// Identifier of a piece, unique within one board.
///
/// Ids are nonzero so a grid cell needs no sentinel for "empty". By
/// convention the prisoner always carries id 1; the generator assigns odd
/// ids starting at 3 to horizontal blocks and even ids starting at 2 to
/// vertical ones.
///
/// # Examples
///
/// ```
/// use gridlock_core::PieceId;
///
/// let id = PieceId::new(3);
/// assert_eq!(id.value(), 3);
/// assert_eq!(PieceId::PRISONER.value(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PieceId(NonZeroU8);

impl PieceId {
    /// The id the prisoner carries on every board.
    pub const PRISONER: Self = Self(NonZeroU8::new(1).unwrap());

    /// Creates an id from a nonzero value.
    ///
    /// # Panics
    ///
    /// Panics if `value` is zero.
    ///
    /// ```should_panic
    /// use gridlock_core::PieceId;
    ///
    /// // This will panic
    /// let _ = PieceId::new(0);
    /// ```
    #[must_use]
    pub fn new(value: u8) -> Self {
        match NonZeroU8::new(value) {
            Some(value) => Self(value),
            None => panic!("piece id must be nonzero"),
        }
    }

    /// Returns the numeric value of this id.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0.get()
    }
}

impl Display for PieceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

/// Axis a piece is aligned with, and therefore slides along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    /// Occupies one row; slides left and right.
    Horizontal,
    /// Occupies one column; slides up and down.
    Vertical,
}

impl Orientation {
    /// The two directions a piece of this orientation can slide, in the
    /// order move enumeration visits them.
    #[must_use]
    pub const fn directions(self) -> [Direction; 2] {
        match self {
            Self::Horizontal => [Direction::Left, Direction::Right],
            Self::Vertical => [Direction::Up, Direction::Down],
        }
    }
}

impl Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        };
        f.write_str(name)
    }
}

/// One of the four slide directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward smaller columns.
    Left,
    /// Toward larger columns.
    Right,
    /// Toward smaller rows.
    Up,
    /// Toward larger rows.
    Down,
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        };
        f.write_str(name)
    }
}

/// Whether a piece is the escaping prisoner or an obstacle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    /// The piece that must reach the right edge of the exit row.
    Prisoner,
    /// An ordinary blocking piece.
    Block,
}

/// A single piece: id, kind, orientation, length, and leading-cell position.
///
/// `row` and `col` name the leading cell, the topmost cell of a vertical
/// piece or the leftmost cell of a horizontal one; the rest of the piece
/// extends downward or rightward from there. Positions are not bounds
/// checked here, validation happens when a [`Board`](crate::Board) is built
/// from a piece sequence.
///
/// # Examples
///
/// ```
/// use gridlock_core::{Orientation, Piece, PieceKind};
///
/// let prisoner = Piece::prisoner(1);
/// assert_eq!(prisoner.kind(), PieceKind::Prisoner);
/// assert_eq!((prisoner.row(), prisoner.col()), (2, 1));
///
/// let block = Piece::block(2, 0, 4, Orientation::Vertical, 3);
/// assert_eq!(block.cells().collect::<Vec<_>>(), [(0, 4), (1, 4), (2, 4)]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    row: u8,
    col: u8,
    orientation: Orientation,
    length: u8,
}

impl Piece {
    /// Creates a piece from its full description.
    ///
    /// Prefer [`Piece::prisoner`] and [`Piece::block`] for well-formed
    /// pieces; this constructor exists so validation failures can be
    /// exercised deliberately.
    ///
    /// # Panics
    ///
    /// Panics if `id` is zero or `length` is not 2 or 3.
    #[must_use]
    pub fn new(
        id: u8,
        kind: PieceKind,
        row: u8,
        col: u8,
        orientation: Orientation,
        length: u8,
    ) -> Self {
        assert!(
            length == 2 || length == 3,
            "piece length must be 2 or 3, got {length}"
        );
        Self {
            id: PieceId::new(id),
            kind,
            row,
            col,
            orientation,
            length,
        }
    }

    /// Creates the prisoner: horizontal, length 2, id 1, fixed to the exit
    /// row with its leading cell at `col`.
    #[must_use]
    pub fn prisoner(col: u8) -> Self {
        Self {
            id: PieceId::PRISONER,
            kind: PieceKind::Prisoner,
            row: EXIT_ROW,
            col,
            orientation: Orientation::Horizontal,
            length: 2,
        }
    }

    /// Creates a blocking piece.
    ///
    /// # Panics
    ///
    /// Panics if `id` is zero or `length` is not 2 or 3.
    #[must_use]
    pub fn block(id: u8, row: u8, col: u8, orientation: Orientation, length: u8) -> Self {
        Self::new(id, PieceKind::Block, row, col, orientation, length)
    }

    /// Returns this piece's id.
    #[must_use]
    pub const fn id(&self) -> PieceId {
        self.id
    }

    /// Returns whether this piece is the prisoner or a block.
    #[must_use]
    pub const fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Returns the row of the leading cell.
    #[must_use]
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Returns the column of the leading cell.
    #[must_use]
    pub const fn col(&self) -> u8 {
        self.col
    }

    /// Returns the axis this piece slides along.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Returns the number of cells this piece covers.
    #[must_use]
    pub const fn length(&self) -> u8 {
        self.length
    }

    /// Returns `true` for the prisoner piece.
    #[must_use]
    pub const fn is_prisoner(&self) -> bool {
        matches!(self.kind, PieceKind::Prisoner)
    }

    /// Iterates over the `(row, col)` cells this piece covers, leading cell
    /// first.
    pub fn cells(&self) -> impl Iterator<Item = (u8, u8)> + use<> {
        let (row, col, orientation) = (self.row, self.col, self.orientation);
        (0..self.length).map(move |offset| match orientation {
            Orientation::Horizontal => (row, col + offset),
            Orientation::Vertical => (row + offset, col),
        })
    }

    /// The same piece with its leading cell relocated.
    #[must_use]
    pub(crate) fn moved_to(&self, row: u8, col: u8) -> Self {
        Self { row, col, ..*self }
    }

    /// The coordinate of the first cell this piece would newly occupy when
    /// sliding one step toward `direction`, or `None` at the board edge.
    pub(crate) fn entry_cell(&self, direction: Direction) -> Option<(u8, u8)> {
        match direction {
            Direction::Left => (self.col > 0).then(|| (self.row, self.col - 1)),
            Direction::Right => {
                let edge = self.col + self.length;
                (edge < BOARD_SIZE).then_some((self.row, edge))
            }
            Direction::Up => (self.row > 0).then(|| (self.row - 1, self.col)),
            Direction::Down => {
                let edge = self.row + self.length;
                (edge < BOARD_SIZE).then_some((edge, self.col))
            }
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.kind {
            PieceKind::Prisoner => "prisoner",
            PieceKind::Block => "block",
        };
        write!(
            f,
            "{kind} {} at ({}, {}), {}, length {}",
            self.id, self.row, self.col, self.orientation, self.length
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_piece_id() {
        // new and value round-trip
        assert_eq!(PieceId::new(1).value(), 1);
        assert_eq!(PieceId::new(255).value(), 255);
        assert_eq!(PieceId::PRISONER, PieceId::new(1));

        // Display prints the numeric value
        assert_eq!(format!("{}", PieceId::new(12)), "12");
    }

    #[test]
    #[should_panic(expected = "piece id must be nonzero")]
    fn test_zero_id_panics() {
        let _ = PieceId::new(0);
    }

    #[test]
    fn test_prisoner_shape() {
        let prisoner = Piece::prisoner(1);
        assert_eq!(prisoner.id(), PieceId::PRISONER);
        assert_eq!(prisoner.kind(), PieceKind::Prisoner);
        assert!(prisoner.is_prisoner());
        assert_eq!(prisoner.row(), EXIT_ROW);
        assert_eq!(prisoner.col(), 1);
        assert_eq!(prisoner.orientation(), Orientation::Horizontal);
        assert_eq!(prisoner.length(), 2);
        assert_eq!(prisoner.cells().collect::<Vec<_>>(), [(2, 1), (2, 2)]);
    }

    #[test]
    fn test_block_cells() {
        // Horizontal pieces extend rightward from the leading cell
        let block = Piece::block(3, 1, 0, Orientation::Horizontal, 2);
        assert_eq!(block.cells().collect::<Vec<_>>(), [(1, 0), (1, 1)]);
        assert!(!block.is_prisoner());

        // Vertical pieces extend downward
        let block = Piece::block(4, 1, 3, Orientation::Vertical, 3);
        assert_eq!(block.cells().collect::<Vec<_>>(), [(1, 3), (2, 3), (3, 3)]);
    }

    #[test]
    #[should_panic(expected = "piece length must be 2 or 3, got 4")]
    fn test_bad_length_panics() {
        let _ = Piece::block(2, 0, 0, Orientation::Horizontal, 4);
    }

    #[test]
    fn test_entry_cells() {
        let block = Piece::block(5, 4, 1, Orientation::Horizontal, 3);

        // One cell beyond each end of the piece
        assert_eq!(block.entry_cell(Direction::Left), Some((4, 0)));
        assert_eq!(block.entry_cell(Direction::Right), Some((4, 4)));

        // At the edge there is no cell to enter
        let against_left = block.moved_to(4, 0);
        assert_eq!(against_left.entry_cell(Direction::Left), None);
        let against_right = block.moved_to(4, 3);
        assert_eq!(against_right.entry_cell(Direction::Right), None);

        let tall = Piece::block(2, 0, 5, Orientation::Vertical, 3);
        assert_eq!(tall.entry_cell(Direction::Up), None);
        assert_eq!(tall.entry_cell(Direction::Down), Some((3, 5)));
    }

    #[test]
    fn test_display() {
        let block = Piece::block(4, 1, 3, Orientation::Vertical, 3);
        assert_eq!(format!("{block}"), "block 4 at (1, 3), vertical, length 3");
        assert_eq!(
            format!("{}", Piece::prisoner(0)),
            "prisoner 1 at (2, 0), horizontal, length 2"
        );
        assert_eq!(format!("{}", Direction::Left), "left");
        assert_eq!(format!("{}", Direction::Down), "down");
    }

    #[test]
    fn test_directions_order() {
        use Direction::*;
        assert_eq!(Orientation::Horizontal.directions(), [Left, Right]);
        assert_eq!(Orientation::Vertical.directions(), [Up, Down]);
    }
}
