//! Tri-state candidate classification board.

use crate::{
    candidate_grid::CandidateGrid, digit::Digit, digit_set::DigitSet, position::Position,
};

/// Classification of one (cell, digit) pair during true-candidate enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriState {
    /// The digit is proven impossible at the cell: no completion places it there.
    Refuted,
    /// The digit has not been classified yet.
    Unknown,
    /// The digit is proven reachable: at least one completion places it there.
    Proven,
}

/// A dense 9×9×9 board with one [`TriState`] entry per (cell, digit) pair.
///
/// Stored as two disjoint [`DigitSet`]s per cell (proven and refuted); a
/// digit in neither set is unknown. This is the working state of
/// true-candidate enumeration: the sweep drives every entry out of
/// `Unknown`, and the surviving `Proven` sets are the answer.
///
/// The persisted boundary form is a 9×9×9 cube of `i8` entries in
/// `{-1, 0, 1}`; see [`to_cube`](Self::to_cube) and
/// [`from_cube`](Self::from_cube).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriStateGrid {
    proven: [DigitSet; 81],
    refuted: [DigitSet; 81],
}

impl TriStateGrid {
    /// Creates a grid with every entry unknown.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            proven: [DigitSet::EMPTY; 81],
            refuted: [DigitSet::EMPTY; 81],
        }
    }

    /// Returns the classification of a digit at a position.
    #[must_use]
    pub fn state(&self, pos: Position, digit: Digit) -> TriState {
        if self.proven[pos.index()].contains(digit) {
            TriState::Proven
        } else if self.refuted[pos.index()].contains(digit) {
            TriState::Refuted
        } else {
            TriState::Unknown
        }
    }

    /// Marks a digit as reachable at a position, overwriting any earlier
    /// classification.
    pub const fn mark_proven(&mut self, pos: Position, digit: Digit) {
        self.refuted[pos.index()].remove(digit);
        self.proven[pos.index()].insert(digit);
    }

    /// Marks a digit as impossible at a position, overwriting any earlier
    /// classification.
    pub const fn mark_refuted(&mut self, pos: Position, digit: Digit) {
        self.proven[pos.index()].remove(digit);
        self.refuted[pos.index()].insert(digit);
    }

    /// Returns the set of digits proven reachable at a position.
    #[must_use]
    pub fn proven_at(&self, pos: Position) -> DigitSet {
        self.proven[pos.index()]
    }

    /// Returns the set of still-unclassified digits at a position.
    #[must_use]
    pub fn unknown_at(&self, pos: Position) -> DigitSet {
        !(self.proven[pos.index()] | self.refuted[pos.index()])
    }

    /// Returns the number of still-unclassified digits at a position.
    #[must_use]
    pub fn unknown_count(&self, pos: Position) -> usize {
        self.unknown_at(pos).len()
    }

    /// Returns the candidate mask of not-yet-refuted digits.
    ///
    /// A digit is permitted at a cell unless it has been proven impossible
    /// there; unknown entries stay permitted so the search may still probe
    /// them.
    #[must_use]
    pub fn to_mask(&self) -> CandidateGrid {
        let mut mask = CandidateGrid::new();
        for pos in Position::ALL {
            mask.set_candidates(pos, !self.refuted[pos.index()]);
        }
        mask
    }

    /// Returns the total `(proven, unknown, refuted)` entry counts.
    #[must_use]
    pub fn counts(&self) -> (usize, usize, usize) {
        let proven: usize = self.proven.iter().map(DigitSet::len).sum();
        let refuted: usize = self.refuted.iter().map(DigitSet::len).sum();
        (proven, 9 * 81 - proven - refuted, refuted)
    }

    /// Converts the grid to the persisted cube layout.
    ///
    /// `cube[row][col][d]` is `1` if digit `d + 1` is proven at `(row, col)`,
    /// `-1` if refuted, and `0` if unknown.
    #[must_use]
    pub fn to_cube(&self) -> [[[i8; 9]; 9]; 9] {
        let mut cube = [[[0i8; 9]; 9]; 9];
        for pos in Position::ALL {
            for digit in Digit::ALL {
                cube[usize::from(pos.row())][usize::from(pos.col())][usize::from(digit.index())] =
                    match self.state(pos, digit) {
                        TriState::Proven => 1,
                        TriState::Unknown => 0,
                        TriState::Refuted => -1,
                    };
            }
        }
        cube
    }

    /// Reconstructs a grid from the persisted cube layout.
    ///
    /// # Errors
    ///
    /// Returns [`TriStateCubeError::InvalidEntry`] if any entry is outside
    /// `{-1, 0, 1}`.
    pub fn from_cube(cube: &[[[i8; 9]; 9]; 9]) -> Result<Self, TriStateCubeError> {
        let mut grid = Self::new();
        for pos in Position::ALL {
            for digit in Digit::ALL {
                let entry = cube[usize::from(pos.row())][usize::from(pos.col())]
                    [usize::from(digit.index())];
                match entry {
                    1 => {
                        grid.proven[pos.index()].insert(digit);
                    }
                    -1 => {
                        grid.refuted[pos.index()].insert(digit);
                    }
                    0 => {}
                    _ => return Err(TriStateCubeError::InvalidEntry(entry)),
                }
            }
        }
        Ok(grid)
    }
}

impl Default for TriStateGrid {
    fn default() -> Self {
        Self::new()
    }
}

/// Errors that can occur when reading a persisted tri-state cube.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum TriStateCubeError {
    /// An entry is outside `{-1, 0, 1}`.
    #[display("invalid tri-state entry {_0}: expected -1, 0, or 1")]
    InvalidEntry(#[error(not(source))] i8),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_all_unknown() {
        let grid = TriStateGrid::new();
        assert_eq!(grid.counts(), (0, 729, 0));
        assert_eq!(grid.state(Position::new(0, 0), Digit::D1), TriState::Unknown);
        assert_eq!(grid.unknown_count(Position::new(4, 4)), 9);
    }

    #[test]
    fn test_marking() {
        let mut grid = TriStateGrid::new();
        let pos = Position::new(2, 7);

        grid.mark_proven(pos, Digit::D3);
        grid.mark_refuted(pos, Digit::D8);

        assert_eq!(grid.state(pos, Digit::D3), TriState::Proven);
        assert_eq!(grid.state(pos, Digit::D8), TriState::Refuted);
        assert_eq!(grid.state(pos, Digit::D1), TriState::Unknown);
        assert_eq!(grid.unknown_count(pos), 7);
        assert_eq!(grid.counts(), (1, 727, 1));
    }

    #[test]
    fn test_to_mask_permits_everything_but_refuted() {
        let mut grid = TriStateGrid::new();
        let pos = Position::new(5, 5);
        grid.mark_refuted(pos, Digit::D2);
        grid.mark_proven(pos, Digit::D6);

        let mask = grid.to_mask();
        assert!(!mask.contains(pos, Digit::D2));
        assert!(mask.contains(pos, Digit::D6));
        // Unknown entries stay permitted
        assert!(mask.contains(pos, Digit::D1));
        assert_eq!(mask.count_at(Position::new(0, 0)), 9);
    }

    #[test]
    fn test_cube_round_trip() {
        let mut grid = TriStateGrid::new();
        grid.mark_proven(Position::new(0, 0), Digit::D9);
        grid.mark_refuted(Position::new(8, 8), Digit::D1);

        let cube = grid.to_cube();
        assert_eq!(cube[0][0][8], 1);
        assert_eq!(cube[8][8][0], -1);
        assert_eq!(cube[4][4][4], 0);

        let reconstructed = TriStateGrid::from_cube(&cube).unwrap();
        assert_eq!(reconstructed, grid);
    }

    #[test]
    fn test_from_cube_rejects_bad_entries() {
        let mut cube = [[[0i8; 9]; 9]; 9];
        cube[1][2][3] = 7;
        assert!(matches!(
            TriStateGrid::from_cube(&cube).unwrap_err(),
            TriStateCubeError::InvalidEntry(7)
        ));
    }
}
