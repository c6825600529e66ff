//! Randomized generation of 6x6 sliding-block escape puzzles.
//!
//! The generator grows a board from a lone prisoner by repeatedly placing
//! random blocking pieces, asking the solver after every edit whether the
//! board still solves and how long the solution has become. Placements that
//! break or shorten the puzzle are thrown away; a configurable strategy
//! then nudges accepted boards through their single-step neighborhoods
//! toward longer solutions. Randomness flows from an explicit seed, so any
//! generated board can be reproduced from 64 hex digits.
//!
//! # Overview
//!
//! 1. **Generation** - [`generator`]: [`BoardGenerator`] runs the
//!    construction loop under a [`GenerateRequest`] and a [`Strategy`],
//!    yielding a [`GeneratedBoard`] with its exact solution length.
//! 2. **Seeds** - [`seed`]: [`GeneratorSeed`] names a deterministic
//!    generation stream, printable and parseable as hex.
//! 3. **Persistence** - [`store`]: the [`PuzzleStore`] seam consumers
//!    implement to keep finished boards.
//!
//! # Examples
//!
//! ```
//! use gridlock_generator::{BoardGenerator, GenerateRequest, GeneratorSeed, Strategy};
//!
//! let generator = BoardGenerator::new(Strategy::NeighborScan);
//! let request = GenerateRequest {
//!     target_length: 5,
//!     target_blocks: 6,
//!     attempt_budget: 200,
//! };
//! let seed = GeneratorSeed::from_phrase("docs");
//!
//! // The same seed always rebuilds the same puzzle.
//! let puzzle = generator.generate_with_seed(&request, seed);
//! assert_eq!(puzzle, generator.generate_with_seed(&request, seed));
//! assert!(puzzle.length <= 6);
//! ```

pub mod generator;
pub mod seed;
pub mod store;

mod lookahead;

// Re-export commonly used types
pub use self::{
    generator::{BoardGenerator, GenerateRequest, GeneratedBoard, Strategy},
    seed::{GeneratorSeed, ParseSeedError},
    store::PuzzleStore,
};
