//! Search driver for sudoku puzzles with extra constraints.
//!
//! # Overview
//!
//! This crate provides the two solving services of the ordilace engine:
//!
//! - [`Sudoku::solve`]: find one completion satisfying the classic sudoku
//!   rules and every attached extra constraint
//! - [`Sudoku::true_candidates`]: for every cell, determine the exact set of
//!   digits that appear there in *at least one* completion
//!
//! # Architecture
//!
//! ## Search
//!
//! The search is a recursive depth-first walk over [`SolvingBoard`] clones.
//! At each step the driver picks the unassigned cell with the fewest live
//! candidates (MRV) and tries its candidates in ascending digit order; each
//! try clones the board, [`settles`](SolvingBoard::settle) the digit
//! (propagating peer and constraint eliminations), and runs
//! [`quickdrops`](SolvingBoard::quickdrops) - a cheap inference loop over
//! naked singles and hidden singles in rows and columns - before recursing.
//! Most easy and medium boards collapse entirely inside `quickdrops`, so
//! branching stays shallow.
//!
//! Failed placements are signalled in-band: `settle` and `quickdrops`
//! return `false` and the clone is discarded. Only the conditions in
//! [`SolveError`] abort a run.
//!
//! ## True-candidate enumeration
//!
//! The sweep maintains a [`TriStateGrid`](ordilace_core::TriStateGrid)
//! classifying every (cell, digit) pair as proven reachable, proven
//! impossible, or unknown. It repeatedly picks the cell with the fewest
//! unknowns and probes each unknown digit with a full search; a completion
//! proves all 81 of its digits reachable at once, while an exhausted search
//! refutes the probed digit. Every probe strictly shrinks the unknown set,
//! so the sweep terminates with an exact classification.
//!
//! ## Host integration
//!
//! The solver runs on the calling thread. A host can attach an
//! `std::sync::mpsc` channel to receive [`Progress`] snapshots (at ≥ 100 ms
//! intervals, plus a terminal sentinel) and an `AtomicBool` flag for
//! cooperative cancellation, observed at the same cadence.
//!
//! # Examples
//!
//! ```
//! use ordilace_solver::{ConstraintSpec, Sudoku};
//!
//! let mut puzzle = [[0u8; 9]; 9];
//! puzzle[0][0] = 9;
//! let arrow = ConstraintSpec::OrdinalArrow {
//!     sum_cells: vec![(1, 1), (1, 2)],
//!     product_cells: vec![(1, 5)],
//! };
//!
//! let mut sudoku = Sudoku::from_input(&puzzle, vec![arrow])?;
//! match sudoku.solve()? {
//!     Some(solution) => println!("{solution:#}"),
//!     None => println!("no completion exists"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use ordilace_constraint::ConstraintSpec;

pub use self::{error::*, solving_board::*, sudoku::*};

mod error;
mod solving_board;
mod sudoku;

#[cfg(test)]
mod testing;
