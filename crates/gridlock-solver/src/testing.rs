//! Test support for crates that build on the solver.
//!
//! The centerpiece is an independent shortest-path search with a different
//! bookkeeping discipline than [`BfsSolver`](crate::BfsSolver), so solver
//! results can be cross-checked against something other than themselves.

use std::collections::{HashMap, VecDeque};

use gridlock_core::Board;

/// Shortest solution length of `board`, found by an
/// enqueue-time-deduplicating breadth-first search.
///
/// Deliberately structured unlike [`BfsSolver`](crate::BfsSolver): states
/// are deduplicated when enqueued rather than when dequeued, depths live in
/// a map instead of parent chains, and reaching `cap` merely stops a branch
/// instead of aborting the search. Returns `None` when no solution of at
/// most `cap` states exists.
#[must_use]
pub fn reference_solution_length(board: &Board, cap: usize) -> Option<usize> {
    let mut depths = HashMap::new();
    let mut queue = VecDeque::new();
    depths.insert(board.clone(), 1_usize);
    queue.push_back(board.clone());

    while let Some(board) = queue.pop_front() {
        let depth = depths[&board];
        if board.is_solved() {
            return Some(depth);
        }
        if depth >= cap {
            continue;
        }
        for successor in board.slide_successors() {
            if !depths.contains_key(&successor) {
                depths.insert(successor.clone(), depth + 1);
                queue.push_back(successor);
            }
        }
    }
    None
}

/// Asserts that `path` is a well-formed solution of `root`: it starts at
/// `root`, every step is one maximal slide, and the final state is solved.
///
/// # Panics
///
/// Panics with a descriptive message when any of those conditions fails.
#[track_caller]
pub fn assert_valid_path(root: &Board, path: &[Board]) {
    assert!(!path.is_empty(), "solution path is empty");
    assert_eq!(&path[0], root, "path does not start at the searched board");
    for (i, pair) in path.windows(2).enumerate() {
        assert!(
            pair[0].slide_successors().contains(&pair[1]),
            "step {} -> {} is not a single maximal slide",
            i,
            i + 1
        );
    }
    assert!(
        path[path.len() - 1].is_solved(),
        "path does not end in a solved state"
    );
}
