//! Breadth-first shortest-path search over maximal-slide successors.

use std::collections::{HashSet, VecDeque};

use gridlock_core::Board;
use log::{debug, trace};

/// Outcome of a [`BfsSolver::solve`] call.
///
/// The two negative outcomes are deliberately distinct: [`Unsolvable`]
/// means the whole reachable state space was searched and holds no winning
/// position, while [`DepthCapped`] means the search gave up at its depth
/// budget and proves nothing.
///
/// [`Unsolvable`]: Verdict::Unsolvable
/// [`DepthCapped`]: Verdict::DepthCapped
#[derive(Debug, Clone, PartialEq, Eq, derive_more::IsVariant)]
pub enum Verdict {
    /// A shortest solution path, from the searched board to a winning
    /// position, both included.
    Solved(Vec<Board>),
    /// Every reachable position was examined and none wins.
    Unsolvable,
    /// The depth budget ran out before the search finished.
    DepthCapped,
}

impl Verdict {
    /// The solution path, or `None` for either negative outcome.
    #[must_use]
    pub fn path(&self) -> Option<&[Board]> {
        match self {
            Self::Solved(path) => Some(path),
            Self::Unsolvable | Self::DepthCapped => None,
        }
    }

    /// Consumes the verdict into its solution path, if any.
    #[must_use]
    pub fn into_path(self) -> Option<Vec<Board>> {
        match self {
            Self::Solved(path) => Some(path),
            Self::Unsolvable | Self::DepthCapped => None,
        }
    }

    /// Number of states on the solution path, start included, or `None`
    /// for either negative outcome.
    #[must_use]
    pub fn length(&self) -> Option<usize> {
        self.path().map(<[Board]>::len)
    }
}

/// Counters describing how much work one solve performed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// States whose successors were enumerated.
    pub expanded: usize,
    /// Successor states pushed onto the queue.
    pub enqueued: usize,
    /// Dequeued states skipped because they were already expanded.
    pub duplicates: usize,
}

/// Breadth-first solver for sliding-block boards.
///
/// Explores the graph of [maximal-slide successors] outward from a starting
/// position, so the first winning position dequeued ends a shortest path.
/// Duplicate positions are filtered when dequeued; a position reached along
/// two routes is expanded once.
///
/// The `max_depth` argument caps how long the candidate paths may grow.
/// Once any state whose path already has `max_depth` states has been
/// expanded, the search aborts with [`Verdict::DepthCapped`], so to
/// reliably find a solution of length `n`, pass a cap greater than `n`.
///
/// [maximal-slide successors]: Board::slide_successors
///
/// # Examples
///
/// ```
/// use gridlock_core::presets;
/// use gridlock_solver::BfsSolver;
///
/// let solver = BfsSolver::new();
/// let path = solver.solve(&presets::sample_b(), 10).into_path().unwrap();
/// assert_eq!(path.len(), 3);
/// assert!(path[2].is_solved());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsSolver;

impl BfsSolver {
    /// Creates a solver.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Searches for a shortest solution of `board`, giving up once any
    /// candidate path reaches `max_depth` states.
    #[must_use]
    pub fn solve(&self, board: &Board, max_depth: usize) -> Verdict {
        self.solve_with_stats(board, max_depth).0
    }

    /// Like [`solve`](BfsSolver::solve), also reporting search counters.
    #[must_use]
    pub fn solve_with_stats(&self, board: &Board, max_depth: usize) -> (Verdict, SolveStats) {
        let mut stats = SolveStats::default();
        let mut visited = HashSet::new();
        let mut queue = VecDeque::new();
        queue.push_back(board.clone());

        while let Some(board) = queue.pop_front() {
            if !visited.insert(board.clone()) {
                stats.duplicates += 1;
                continue;
            }
            if board.is_solved() {
                trace!(
                    "solved at {} states after expanding {}",
                    board.path_len(),
                    stats.expanded
                );
                return (Verdict::Solved(board.path()), stats);
            }
            stats.expanded += 1;
            for successor in board.slide_successors() {
                queue.push_back(successor);
                stats.enqueued += 1;
            }
            if board.path_len() >= max_depth {
                debug!("depth cap {max_depth} reached; aborting search");
                return (Verdict::DepthCapped, stats);
            }
        }

        trace!(
            "state space exhausted after expanding {} states",
            stats.expanded
        );
        (Verdict::Unsolvable, stats)
    }
}
