//! Extra-constraint framework for the ordilace solving engine.
//!
//! Sudoku variants add rules beyond the classic row/column/block uniqueness.
//! This crate models each such rule as a [`Constraint`]: a capability pair of
//! a validity check over the current assignment and a candidate mask the
//! solver intersects into its live candidates after every placement.
//!
//! # Architecture
//!
//! Concrete constraints share the [`DenseMultiCell`] preprocessing base *by
//! composition*: at construction, every digit tuple over the constraint's
//! scope cells is evaluated once and recorded in a dense `9^k` table, and
//! all candidate propagation afterwards is table projection - no predicate
//! is evaluated during search. The scope is capped at
//! [`MAX_CELLS`](dense_multi_cell::MAX_CELLS) cells.
//!
//! Two constraints are provided:
//!
//! - [`Killer`]: the digits in a cage sum to a target
//! - [`OrdinalArrow`]: the Cantor-normal-form ordinal sum over one cell
//!   sequence equals the ordinal product over another (digits are read as
//!   ordinals below ω³ via their base-3 expansion)
//!
//! Host applications describe constraints as plain data with
//! [`ConstraintSpec`] and build them with
//! [`into_constraint`](ConstraintSpec::into_constraint).
//!
//! # Implementing a constraint
//!
//! ```
//! use ordilace_constraint::Constraint;
//! use ordilace_core::{Digit, DigitGrid, Position};
//!
//! /// The main diagonal must contain the digit 5 somewhere.
//! #[derive(Debug)]
//! struct DiagonalHasFive;
//!
//! impl Constraint for DiagonalHasFive {
//!     fn name(&self) -> &'static str {
//!         "diagonal has five"
//!     }
//!
//!     fn is_valid(&self, assigned: &DigitGrid) -> bool {
//!         (0..9).any(|i| {
//!             let cell = assigned.get(Position::new(i, i));
//!             cell == Some(Digit::D5) || cell.is_none()
//!         })
//!     }
//! }
//! ```

use std::fmt::Debug;

use ordilace_core::{CandidateGrid, DigitGrid};

pub mod dense_multi_cell;
mod descriptor;
mod error;
mod killer;
mod ordinal_arrow;

pub use self::{
    dense_multi_cell::DenseMultiCell, descriptor::*, error::*, killer::*, ordinal_arrow::*,
};

/// An extra constraint on a sudoku board.
///
/// A constraint governs a subset of cells (its *scope*) and exposes two
/// capabilities:
///
/// - [`is_valid`](Self::is_valid): does the current assignment definitively
///   violate the rule? Partial scope assignments are *optimistic* - any
///   unassigned scope cell means "uncertain", which reports as valid.
/// - [`available_candidates`](Self::available_candidates): a 9×9×9 mask of
///   the digits that can still appear at each scope cell in some completion
///   of the scope. Cells outside the scope are fully permitted.
///
/// Constraint evaluation never fails; anything that can go wrong is rejected
/// when the constraint is constructed.
pub trait Constraint: Debug + Send + Sync {
    /// Returns a short human-readable name for the constraint kind.
    fn name(&self) -> &'static str;

    /// Returns `true` unless the assignment definitively violates the
    /// constraint.
    ///
    /// Must report `true` whenever any scope cell is unassigned.
    fn is_valid(&self, assigned: &DigitGrid) -> bool;

    /// Returns the candidate mask consistent with the current assignment.
    ///
    /// The default implementation permits everything while
    /// [`is_valid`](Self::is_valid) holds and nothing once it fails;
    /// constraints that can prune should override this (or delegate to a
    /// [`DenseMultiCell`] table).
    fn available_candidates(&self, assigned: &DigitGrid) -> CandidateGrid {
        if self.is_valid(assigned) {
            CandidateGrid::FULL
        } else {
            CandidateGrid::EMPTY
        }
    }
}

/// A boxed constraint trait object.
pub type BoxedConstraint = Box<dyn Constraint>;

#[cfg(test)]
mod tests {
    use ordilace_core::{Digit, Position};

    use super::*;

    #[derive(Debug)]
    struct RejectAll;

    impl Constraint for RejectAll {
        fn name(&self) -> &'static str {
            "reject all"
        }

        fn is_valid(&self, _assigned: &DigitGrid) -> bool {
            false
        }
    }

    #[derive(Debug)]
    struct AcceptAll;

    impl Constraint for AcceptAll {
        fn name(&self) -> &'static str {
            "accept all"
        }

        fn is_valid(&self, _assigned: &DigitGrid) -> bool {
            true
        }
    }

    #[test]
    fn test_default_available_candidates_tracks_validity() {
        let board = DigitGrid::new();
        assert_eq!(AcceptAll.available_candidates(&board), CandidateGrid::FULL);
        assert_eq!(RejectAll.available_candidates(&board), CandidateGrid::EMPTY);
    }

    #[test]
    fn test_boxed_constraints_are_object_safe() {
        let constraints: Vec<BoxedConstraint> = vec![Box::new(AcceptAll), Box::new(RejectAll)];
        let mut board = DigitGrid::new();
        board.set(Position::new(0, 0), Some(Digit::D1));
        assert!(constraints[0].is_valid(&board));
        assert!(!constraints[1].is_valid(&board));
    }
}
