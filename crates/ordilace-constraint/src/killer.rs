//! Killer-cage constraint.

use std::fmt::{self, Display};

use ordilace_core::{CandidateGrid, Digit, DigitGrid, Position};

use crate::{Constraint, dense_multi_cell::DenseMultiCell, error::ConstraintError};

/// A killer cage: the digits in a set of cells must sum to a target.
///
/// Unlike classic killer sudoku cages, digits may repeat within the cage;
/// only the sum is constrained. (Row, column, and block uniqueness still
/// apply through the ordinary sudoku rules wherever cage cells share a
/// unit.)
///
/// # Examples
///
/// ```
/// use ordilace_constraint::{Constraint, Killer};
/// use ordilace_core::{Digit, DigitGrid, Position};
///
/// let cage = Killer::new(vec![Position::new(0, 0), Position::new(0, 1)], 17).unwrap();
///
/// let mut board = DigitGrid::new();
/// assert!(cage.is_valid(&board)); // unassigned scope is optimistic
///
/// board.set(Position::new(0, 0), Some(Digit::D8));
/// board.set(Position::new(0, 1), Some(Digit::D9));
/// assert!(cage.is_valid(&board));
/// ```
#[derive(Debug)]
pub struct Killer {
    sum: u32,
    table: DenseMultiCell,
}

impl Killer {
    /// Creates a killer cage over `cells` with target `sum`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::TooManyCells`] if the cage exceeds the
    /// preprocessing cap.
    pub fn new(cells: Vec<Position>, sum: u32) -> Result<Self, ConstraintError> {
        let table = DenseMultiCell::build(cells, |digits| {
            digits.iter().map(|d| u32::from(d.value())).sum::<u32>() == sum
        })?;
        Ok(Self { sum, table })
    }

    /// Returns the target sum of this cage.
    #[must_use]
    pub fn sum(&self) -> u32 {
        self.sum
    }

    /// Returns the cells of this cage, in scope order.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        self.table.cells()
    }
}

impl Constraint for Killer {
    fn name(&self) -> &'static str {
        "killer cage"
    }

    fn is_valid(&self, assigned: &DigitGrid) -> bool {
        let mut total = 0u32;
        for &pos in self.table.cells() {
            match assigned.get(pos) {
                // Unfilled cage cell: the cage can still work out
                None => return true,
                Some(digit) => total += u32::from(digit.value()),
            }
        }
        total == self.sum
    }

    fn available_candidates(&self, assigned: &DigitGrid) -> CandidateGrid {
        self.table.available_candidates(assigned)
    }
}

impl Display for Killer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pos) in self.cells().iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "({},{})", pos.row(), pos.col())?;
        }
        write!(f, " = {}", self.sum)
    }
}

#[cfg(test)]
mod tests {
    use ordilace_core::DigitSet;

    use super::*;

    fn cage(cells: &[(u8, u8)], sum: u32) -> Killer {
        let cells = cells.iter().map(|&(r, c)| Position::new(r, c)).collect();
        Killer::new(cells, sum).unwrap()
    }

    #[test]
    fn test_is_valid_optimistic_when_incomplete() {
        let cage = cage(&[(0, 0), (0, 1), (0, 2)], 6);
        let mut board = DigitGrid::new();
        assert!(cage.is_valid(&board));

        board.set(Position::new(0, 0), Some(Digit::D9));
        // Even a hopeless partial sum stays optimistic; the table handles
        // pruning.
        assert!(cage.is_valid(&board));
    }

    #[test]
    fn test_is_valid_on_complete_scope() {
        let cage = cage(&[(0, 0), (0, 1)], 10);
        let mut board = DigitGrid::new();
        board.set(Position::new(0, 0), Some(Digit::D4));
        board.set(Position::new(0, 1), Some(Digit::D6));
        assert!(cage.is_valid(&board));

        board.set(Position::new(0, 1), Some(Digit::D7));
        assert!(!cage.is_valid(&board));
    }

    #[test]
    fn test_available_candidates_prunes_cage_cells() {
        // Sum 17 over two cells: only 8+9 and 9+8 work.
        let cage = cage(&[(3, 3), (3, 4)], 17);
        let mask = cage.available_candidates(&DigitGrid::new());

        let expected: DigitSet = [Digit::D8, Digit::D9].into_iter().collect();
        assert_eq!(mask.candidates_at(Position::new(3, 3)), expected);
        assert_eq!(mask.candidates_at(Position::new(3, 4)), expected);
        assert_eq!(mask.count_at(Position::new(0, 0)), 9);
    }

    #[test]
    fn test_available_candidates_with_assigned_cell() {
        let cage = cage(&[(3, 3), (3, 4)], 17);
        let mut board = DigitGrid::new();
        board.set(Position::new(3, 3), Some(Digit::D9));

        let mask = cage.available_candidates(&board);
        assert_eq!(
            mask.candidates_at(Position::new(3, 4)),
            DigitSet::of(Digit::D8)
        );
    }

    #[test]
    fn test_display() {
        let cage = cage(&[(1, 1), (1, 2)], 10);
        assert_eq!(cage.to_string(), "(1,1) + (1,2) = 10");
    }
}
