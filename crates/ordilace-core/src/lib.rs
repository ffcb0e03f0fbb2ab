//! Core data structures for the ordilace solving engine.
//!
//! This crate provides the board representations shared by the constraint
//! framework and the solver:
//!
//! - [`Digit`] - Type-safe representation of sudoku digits 1-9
//! - [`Position`] - Grid position with `(row, col)` coordinates in the range 0-8,
//!   with 3×3 block utilities and the [`sees`](Position::sees) peer predicate
//! - [`DigitSet`] - Efficient set of digits (u16-based, 9 bits)
//! - [`DigitGrid`] - Cell-centric assignment board; `0`/empty cells are unsolved
//! - [`CandidateGrid`] - Dense 9×9×9 candidate bitmap, one [`DigitSet`] per cell;
//!   also the mask type returned by extra constraints
//! - [`TriStateGrid`] - Per-(cell, digit) classification in
//!   {impossible, unknown, reachable} used by true-candidate enumeration
//!
//! # Two-board architecture
//!
//! Solving state is split between a cell-centric assignment view
//! ([`DigitGrid`]: "what is in this cell?") and a candidate view
//! ([`CandidateGrid`]: "which digits can still go here?"). The solver
//! mutates both in lock-step; constraints read the assignment view and
//! produce candidate-view masks.
//!
//! # Examples
//!
//! ```
//! use ordilace_core::{CandidateGrid, Digit, DigitGrid, Position};
//!
//! // Parse a puzzle (dots are empty cells)
//! let puzzle: DigitGrid =
//!     "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//!         .parse()
//!         .unwrap();
//! assert_eq!(puzzle[Position::new(0, 0)], Some(Digit::D5));
//!
//! // Candidate bookkeeping
//! let mut cands = CandidateGrid::new();
//! cands.remove(Position::new(0, 1), Digit::D5);
//! assert_eq!(cands.count_at(Position::new(0, 1)), 8);
//! ```

mod candidate_grid;
mod digit;
mod digit_grid;
mod digit_set;
mod position;
mod tri_state_grid;

pub use self::{
    candidate_grid::*, digit::*, digit_grid::*, digit_set::*, position::*, tri_state_grid::*,
};
