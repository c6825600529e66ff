//! Bounded lookahead over single-step neighborhoods.

use std::collections::HashSet;

use gridlock_core::Board;
use gridlock_solver::BfsSolver;

/// Outcome of one bounded lookahead below an accepted board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Lookahead {
    /// A descendant solves at or past the requested length; the search
    /// stopped the moment it was discovered.
    TargetReached { board: Board, length: usize },
    /// No descendant reached the target; this is the best solvable one
    /// found, with its exact solution length.
    BestFound { board: Board, length: usize },
    /// Nothing below the board qualified: it has no single-step neighbors,
    /// or none of them solve.
    NoCandidates,
}

/// Explores up to `depth + 1` layers of single-step neighbors below
/// `root`, solving each newly seen board with a cap of `target + 1`.
///
/// The walk is depth-first in discovery order and fully deterministic: a
/// layer is enumerated (and solved) in move order before any of its boards
/// is descended into. Boards already seen in this call are skipped, so
/// neighborhoods that loop back on themselves cost nothing.
///
/// A descendant whose solved length reaches `target` ends the walk
/// immediately. Otherwise the best candidate is tracked: a board qualifies
/// only if its length is no worse than every board on its chain back to
/// `root` (editing a position should not throw away length already in
/// hand), and among qualifiers the first one with the strictly greatest
/// length wins.
pub(crate) fn traverse(solver: &BfsSolver, root: &Board, depth: usize, target: usize) -> Lookahead {
    let mut search = Search {
        solver,
        target,
        seen: HashSet::new(),
        best: None,
    };
    if let Some((board, length)) = search.descend(root, depth, 0) {
        return Lookahead::TargetReached { board, length };
    }
    match search.best {
        Some((board, length)) => Lookahead::BestFound { board, length },
        None => Lookahead::NoCandidates,
    }
}

struct Search<'a> {
    solver: &'a BfsSolver,
    target: usize,
    seen: HashSet<Board>,
    best: Option<(Board, usize)>,
}

impl Search<'_> {
    /// Explores one neighbor layer below `node`, recursing while `depth`
    /// remains. `floor` is the highest solved length along the chain from
    /// the root down to `node`; descendants below it cannot become best.
    /// Returns the target hit, if one is found.
    fn descend(&mut self, node: &Board, depth: usize, floor: usize) -> Option<(Board, usize)> {
        let mut layer = Vec::new();
        for neighbor in node.step_neighbors() {
            if !self.seen.insert(neighbor.clone()) {
                continue;
            }
            let length = self.solver.solve(&neighbor, self.target + 1).length();
            if let Some(length) = length {
                if length >= self.target {
                    return Some((neighbor, length));
                }
                if length >= floor && self.best.as_ref().is_none_or(|(_, best)| length > *best) {
                    self.best = Some((neighbor.clone(), length));
                }
            }
            layer.push((neighbor, length));
        }
        if depth > 0 {
            for (child, length) in layer {
                let child_floor = length.map_or(floor, |len| floor.max(len));
                if let Some(hit) = self.descend(&child, depth - 1, child_floor) {
                    return Some(hit);
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use gridlock_core::{Board, Orientation, Piece, presets};

    use super::*;

    /// The single-step neighbor in which piece `id` sits at `(row, col)`.
    fn stepped(board: &Board, id: u8, row: u8, col: u8) -> Board {
        board
            .step_neighbors()
            .into_iter()
            .find(|neighbor| {
                neighbor
                    .pieces()
                    .iter()
                    .any(|p| p.id().value() == id && p.row() == row && p.col() == col)
            })
            .expect("requested step exists")
    }

    #[test]
    fn test_target_reached_in_first_layer() {
        let board = presets::sample_a();
        let outcome = traverse(&BfsSolver::new(), &board, 1, 5);

        // Moving piece 2 down to (3, 0) keeps the solution at 5 states,
        // and it is the first neighbor enumerated
        let expected = stepped(&board, 2, 3, 0);
        assert_eq!(
            outcome,
            Lookahead::TargetReached {
                board: expected,
                length: 5
            }
        );
    }

    #[test]
    fn test_target_reached_two_layers_down() {
        let board = presets::sample_a();

        // Piece 2 down frees (2, 0); the prisoner stepping left then costs
        // one extra state, lifting the solution to 6
        let expected = stepped(&stepped(&board, 2, 3, 0), 1, 2, 0);
        for depth in [1, 2] {
            let outcome = traverse(&BfsSolver::new(), &board, depth, 6);
            assert_eq!(
                outcome,
                Lookahead::TargetReached {
                    board: expected.clone(),
                    length: 6
                },
                "depth {depth}"
            );
        }
    }

    #[test]
    fn test_best_found_when_target_is_out_of_reach() {
        let board = presets::sample_a();
        let outcome = traverse(&BfsSolver::new(), &board, 2, 7);

        // No descendant within three layers reaches 7; the 6-state edit
        // from the depth-6 case is still the best on offer
        let expected = stepped(&stepped(&board, 2, 3, 0), 1, 2, 0);
        assert_eq!(
            outcome,
            Lookahead::BestFound {
                board: expected,
                length: 6
            }
        );
    }

    #[test]
    fn test_short_target_on_sample_b() {
        let board = presets::sample_b();

        let outcome = traverse(&BfsSolver::new(), &board, 1, 3);
        let expected = stepped(&board, 1, 2, 0);
        assert_eq!(
            outcome,
            Lookahead::TargetReached {
                board: expected,
                length: 3
            }
        );

        // Two layers reach a 4-state edit: prisoner left, then piece 3
        // down into the vacated column
        let outcome = traverse(&BfsSolver::new(), &board, 2, 4);
        let expected = stepped(&stepped(&board, 1, 2, 0), 3, 1, 2);
        assert_eq!(
            outcome,
            Lookahead::TargetReached {
                board: expected.clone(),
                length: 4
            }
        );

        // With a target of 6 nothing qualifies, and that same edit is best
        let outcome = traverse(&BfsSolver::new(), &board, 2, 6);
        assert_eq!(
            outcome,
            Lookahead::BestFound {
                board: expected,
                length: 4
            }
        );
    }

    #[test]
    fn test_frozen_board_has_no_candidates() {
        let frozen = Board::new(vec![
            Piece::prisoner(0),
            Piece::block(2, 0, 2, Orientation::Vertical, 2),
            Piece::block(4, 2, 2, Orientation::Vertical, 2),
            Piece::block(6, 4, 2, Orientation::Vertical, 2),
        ])
        .unwrap();

        let outcome = traverse(&BfsSolver::new(), &frozen, 2, 5);
        assert_eq!(outcome, Lookahead::NoCandidates);
    }
}
