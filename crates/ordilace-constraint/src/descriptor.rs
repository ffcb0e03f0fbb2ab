//! Plain-data constraint descriptors for puzzle ingestion.

use ordilace_core::Position;

use crate::{BoxedConstraint, Killer, OrdinalArrow, error::ConstraintError};

/// A plain-data description of an extra constraint, as received from a host
/// application.
///
/// Cells are `(row, col)` pairs with both coordinates in 0-8. Descriptors
/// are validated and turned into live constraints with
/// [`into_constraint`](Self::into_constraint).
///
/// # Examples
///
/// ```
/// use ordilace_constraint::{Constraint, ConstraintSpec};
///
/// let spec = ConstraintSpec::Killer {
///     cells: vec![(1, 8), (2, 8)],
///     sum: 10,
/// };
/// let constraint = spec.into_constraint().unwrap();
/// assert_eq!(constraint.name(), "killer cage");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstraintSpec {
    /// A killer cage: the digits in `cells` sum to `sum`.
    Killer {
        /// Cage cells as `(row, col)` pairs.
        cells: Vec<(u8, u8)>,
        /// Target sum.
        sum: u32,
    },
    /// An ordinal arrow: the ordinal sum over `sum_cells` equals the ordinal
    /// product over `product_cells`.
    OrdinalArrow {
        /// Sum-side cells as `(row, col)` pairs.
        sum_cells: Vec<(u8, u8)>,
        /// Product-side cells as `(row, col)` pairs.
        product_cells: Vec<(u8, u8)>,
    },
}

impl ConstraintSpec {
    /// Builds the described constraint, preprocessing its lookup table.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::PositionOutOfRange`] if any cell lies
    /// outside the board, or [`ConstraintError::TooManyCells`] if the scope
    /// exceeds the preprocessing cap.
    pub fn into_constraint(self) -> Result<BoxedConstraint, ConstraintError> {
        match self {
            Self::Killer { cells, sum } => {
                let cells = validate_positions(&cells)?;
                Ok(Box::new(Killer::new(cells, sum)?))
            }
            Self::OrdinalArrow {
                sum_cells,
                product_cells,
            } => {
                let sum_cells = validate_positions(&sum_cells)?;
                let product_cells = validate_positions(&product_cells)?;
                Ok(Box::new(OrdinalArrow::new(sum_cells, product_cells)?))
            }
        }
    }
}

fn validate_positions(cells: &[(u8, u8)]) -> Result<Vec<Position>, ConstraintError> {
    cells
        .iter()
        .map(|&(row, col)| {
            if row < 9 && col < 9 {
                Ok(Position::new(row, col))
            } else {
                Err(ConstraintError::PositionOutOfRange { row, col })
            }
        })
        .collect()
}
