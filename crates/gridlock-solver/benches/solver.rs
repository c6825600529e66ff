//! Benchmarks for breadth-first board solving.
//!
//! Measures full solve runs over preset boards spanning the difficulty
//! range, plus the exhaustive search an unsolvable board forces.
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench solver
//! ```

use std::hint;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use gridlock_core::{Board, Orientation, Piece, presets};
use gridlock_solver::BfsSolver;

/// A column of blocks on the right edge; unsolvable, but with a tiny state
/// space, so this measures exhaustion overhead rather than search size.
fn walled_board() -> Board {
    Board::new(vec![
        Piece::prisoner(0),
        Piece::block(2, 0, 5, Orientation::Vertical, 2),
        Piece::block(4, 2, 5, Orientation::Vertical, 2),
        Piece::block(6, 4, 5, Orientation::Vertical, 2),
    ])
    .unwrap()
}

fn bench_solve(c: &mut Criterion) {
    let solver = BfsSolver::new();
    let boards = [
        ("sample_a", presets::sample_a()),
        ("sample_c", presets::sample_c()),
        ("moderate_1", presets::moderate_1()),
        ("expert_1", presets::expert_1()),
        ("walled", walled_board()),
    ];

    for (param, board) in boards {
        c.bench_with_input(BenchmarkId::new("solve", param), &board, |b, board| {
            b.iter(|| {
                let verdict = solver.solve(hint::black_box(board), 40);
                hint::black_box(verdict)
            });
        });
    }
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
