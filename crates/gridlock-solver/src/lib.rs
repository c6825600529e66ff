//! Solving and difficulty rating for 6x6 sliding-block escape puzzles.
//!
//! The solver runs a breadth-first search over maximal-slide successors, so
//! the first solution it finds is a shortest one. Its verdict keeps "no
//! solution exists" and "gave up at the depth budget" apart, which the
//! generator relies on when it probes candidate boards with tight budgets.
//!
//! # Overview
//!
//! 1. **Solving** - [`bfs`]: [`BfsSolver`] explores from a starting board
//!    and yields a [`Verdict`], optionally with [`SolveStats`] counters.
//! 2. **Rating** - [`difficulty`]: [`Difficulty`] buckets a solution length
//!    into a 1-10 scale.
//! 3. **Test support** - [`testing`]: an independent reference search and
//!    path assertions for crates that need to cross-check solver output.
//!
//! # Examples
//!
//! ```
//! use gridlock_core::presets;
//! use gridlock_solver::{BfsSolver, Difficulty};
//!
//! let solver = BfsSolver::new();
//! let path = solver.solve(&presets::sample_c(), 40).into_path().unwrap();
//! assert_eq!(path.len(), 8);
//! assert_eq!(Difficulty::from_length(path.len()).value(), 3);
//! ```

pub mod bfs;
pub mod difficulty;
pub mod testing;

// Re-export commonly used types
pub use self::{
    bfs::{BfsSolver, SolveStats, Verdict},
    difficulty::Difficulty,
};
