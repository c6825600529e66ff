//! Persistence seam for finished boards.

use gridlock_core::Board;
use gridlock_solver::Difficulty;

/// Destination for boards the generator has finished with.
///
/// The generator hands over a board together with the two facts it has
/// already paid to compute, the exact solution length and the difficulty
/// bucket, and leaves storage and serialization entirely to the
/// implementation. An implementation that cannot keep the board reports
/// why through its own error type.
pub trait PuzzleStore {
    /// Reason a board could not be kept.
    type Error;

    /// Stores one board with its exact solution length and difficulty.
    ///
    /// # Errors
    ///
    /// Implementation-specific; a failed insert leaves the board
    /// unstored.
    fn insert(
        &mut self,
        board: Board,
        length: usize,
        difficulty: Difficulty,
    ) -> Result<(), Self::Error>;
}
