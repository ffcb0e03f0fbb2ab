use ordilace_constraint::ConstraintError;
use ordilace_core::{DigitGridParseError, Position};

/// Errors that can abort a solve.
///
/// A puzzle without a solution is *not* an error for single-solution search:
/// [`Sudoku::solve`](crate::Sudoku::solve) reports it in-band as `Ok(None)`.
/// The variants here are the conditions that abort a run outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum SolveError {
    /// A clue could not be placed during board initialisation because it
    /// immediately conflicts with a peer or an extra constraint.
    #[display("puzzle clue at ({}, {}) conflicts with the board", _0.row(), _0.col())]
    IncompatiblePuzzle(#[error(not(source))] Position),
    /// True-candidate enumeration proved up-front that no completion exists.
    #[display("no completion of the puzzle exists")]
    Unsatisfiable,
    /// The cancellation flag was observed set.
    #[display("solve was cancelled")]
    Cancelled,
}

/// Errors that can occur while ingesting external puzzle input.
#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum SetupError {
    /// The puzzle board is malformed.
    #[display("invalid puzzle: {_0}")]
    Puzzle(DigitGridParseError),
    /// A constraint descriptor is malformed or too large to preprocess.
    #[display("invalid constraint: {_0}")]
    Constraint(ConstraintError),
}
