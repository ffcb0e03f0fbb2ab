use crate::dense_multi_cell::MAX_CELLS;

/// Errors that can occur when constructing an extra constraint.
///
/// Runtime constraint evaluation never fails; everything that can go wrong
/// is rejected at construction time.
#[derive(Debug, Clone, Copy, derive_more::Display, derive_more::Error)]
pub enum ConstraintError {
    /// The constraint scope has more cells than the preprocessing table
    /// supports.
    ///
    /// The table has `9^k` entries for a `k`-cell scope; beyond
    /// [`MAX_CELLS`] cells the memory cost is no longer sane.
    #[display("constraint scope has {_0} cells: preprocessing supports at most {MAX_CELLS}")]
    TooManyCells(#[error(not(source))] usize),
    /// A scope cell in a constraint descriptor lies outside the 9×9 board.
    #[display("constraint cell ({row}, {col}) is outside the board")]
    PositionOutOfRange {
        /// Row coordinate of the offending cell.
        row: u8,
        /// Column coordinate of the offending cell.
        col: u8,
    },
}
