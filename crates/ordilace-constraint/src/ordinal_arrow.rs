//! Ordinal-arrow constraint.

use std::fmt::{self, Display};

use ordilace_core::{CandidateGrid, DigitGrid, Position};
use ordilace_ordinal::{Ordinal, digit_ordinal};

use crate::{Constraint, dense_multi_cell::DenseMultiCell, error::ConstraintError};

/// An ordinal arrow: the ordinal sum over one set of cells must equal the
/// ordinal product over another.
///
/// Digits are read as ordinals through their base-3 expansion
/// ([`digit_ordinal`]), and both sides are folded in scope order with the
/// non-commutative Cantor-normal-form operations: the left side as
/// `ord(d₀) + ord(d₁) + …`, the right side as `ord(d₀) · ord(d₁) · …`.
/// An empty sum side is `0` and an empty product side is `1`.
///
/// # Examples
///
/// ```
/// use ordilace_constraint::{Constraint, OrdinalArrow};
/// use ordilace_core::{Digit, DigitGrid, Position};
///
/// // ord(3) + ord(9) = ω + ω² = ω², which equals ord(9)
/// let arrow = OrdinalArrow::new(
///     vec![Position::new(0, 0), Position::new(0, 1)],
///     vec![Position::new(0, 2)],
/// )
/// .unwrap();
///
/// let mut board = DigitGrid::new();
/// board.set(Position::new(0, 0), Some(Digit::D3));
/// board.set(Position::new(0, 1), Some(Digit::D9));
/// board.set(Position::new(0, 2), Some(Digit::D9));
/// assert!(arrow.is_valid(&board));
/// ```
#[derive(Debug)]
pub struct OrdinalArrow {
    /// Number of leading scope cells forming the sum side.
    split: usize,
    table: DenseMultiCell,
}

impl OrdinalArrow {
    /// Creates an ordinal arrow from its sum-side and product-side cells.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::TooManyCells`] if the combined scope
    /// exceeds the preprocessing cap.
    pub fn new(
        sum_cells: Vec<Position>,
        product_cells: Vec<Position>,
    ) -> Result<Self, ConstraintError> {
        let split = sum_cells.len();
        let mut cells = sum_cells;
        cells.extend(product_cells);
        let table = DenseMultiCell::build(cells, move |digits| {
            let sum = digits[..split]
                .iter()
                .fold(Ordinal::zero(), |acc, &d| &acc + &digit_ordinal(d));
            let product = digits[split..]
                .iter()
                .fold(Ordinal::finite(1), |acc, &d| &acc * &digit_ordinal(d));
            sum == product
        })?;
        Ok(Self { split, table })
    }

    /// Returns the sum-side cells, in scope order.
    #[must_use]
    pub fn sum_cells(&self) -> &[Position] {
        &self.table.cells()[..self.split]
    }

    /// Returns the product-side cells, in scope order.
    #[must_use]
    pub fn product_cells(&self) -> &[Position] {
        &self.table.cells()[self.split..]
    }
}

impl Constraint for OrdinalArrow {
    fn name(&self) -> &'static str {
        "ordinal arrow"
    }

    fn is_valid(&self, assigned: &DigitGrid) -> bool {
        let mut sum = Ordinal::zero();
        for &pos in self.sum_cells() {
            match assigned.get(pos) {
                None => return true,
                Some(digit) => sum = &sum + &digit_ordinal(digit),
            }
        }
        let mut product = Ordinal::finite(1);
        for &pos in self.product_cells() {
            match assigned.get(pos) {
                None => return true,
                Some(digit) => product = &product * &digit_ordinal(digit),
            }
        }
        sum == product
    }

    fn available_candidates(&self, assigned: &DigitGrid) -> CandidateGrid {
        self.table.available_candidates(assigned)
    }
}

impl Display for OrdinalArrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pos) in self.sum_cells().iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "({},{})", pos.row(), pos.col())?;
        }
        f.write_str(" = ")?;
        for (i, pos) in self.product_cells().iter().enumerate() {
            if i > 0 {
                f.write_str(" × ")?;
            }
            write!(f, "({},{})", pos.row(), pos.col())?;
        }
        Ok(())
    }
}
