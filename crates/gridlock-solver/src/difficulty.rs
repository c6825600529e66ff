//! Difficulty rating derived from solution length.

use std::fmt::{self, Display};

/// A 1-10 difficulty bucket for a solved board.
///
/// Ratings come from the length of the shortest solution, counted in
/// states with the start included, which tracks perceived difficulty well
/// enough for grading generated puzzles. Buckets compare and sort by their
/// numeric value.
///
/// # Examples
///
/// ```
/// use gridlock_solver::Difficulty;
///
/// assert_eq!(Difficulty::from_length(4).value(), 1);
/// assert_eq!(Difficulty::from_length(22).value(), 6);
/// assert!(Difficulty::from_length(35) > Difficulty::from_length(5));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Difficulty(u8);

impl Difficulty {
    /// The easiest bucket, for boards solved in fewer than 5 states.
    pub const MIN: Self = Self(1);

    /// The hardest bucket, for boards needing 35 states or more.
    pub const MAX: Self = Self(10);

    /// Rates a shortest-solution length.
    ///
    /// Lengths under 5 rate 1, lengths under 8 rate 2, lengths under 11
    /// rate 3; from there, every 4 further states move the rating up one
    /// bucket until it saturates at 10 from length 35 on.
    #[must_use]
    pub const fn from_length(length: usize) -> Self {
        let value = match length {
            0..5 => 1,
            5..8 => 2,
            8..11 => 3,
            11..15 => 4,
            15..19 => 5,
            19..23 => 6,
            23..27 => 7,
            27..31 => 8,
            31..35 => 9,
            _ => 10,
        };
        Self(value)
    }

    /// Returns the numeric value of this bucket (1-10).
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}
