//! Preprocessed tuple table shared by dense multi-cell constraints.

use std::{
    collections::HashMap,
    fmt::{self, Debug},
    sync::{Mutex, PoisonError},
    time::Instant,
};

use ordilace_core::{CandidateGrid, Digit, DigitGrid, DigitSet, Position};

use crate::error::ConstraintError;

/// Maximum number of scope cells a preprocessed table supports.
///
/// The table holds `9^k` booleans; at `k = 7` that is ~4.8 million entries,
/// which is the largest sane size for an eager enumeration.
pub const MAX_CELLS: usize = 7;

/// Bounded size of the per-constraint projection memo.
const CACHE_CAP: usize = 4096;

/// A preprocessed validity table over a small ordered tuple of cells.
///
/// At construction every one of the `9^k` digit tuples over the scope is
/// evaluated against the constraint predicate and recorded in a dense
/// boolean table. Afterwards [`available_candidates`] answers "which digits
/// can still complete this scope?" by projecting the table onto the
/// unassigned scope cells, with no further predicate evaluations.
///
/// Concrete constraints own a `DenseMultiCell` and delegate their candidate
/// propagation to it; the predicate itself is only retained in the table.
///
/// Projections are pure functions of the scope-value tuple, so results are
/// memoised per tuple in a bounded cache.
///
/// [`available_candidates`]: Self::available_candidates
pub struct DenseMultiCell {
    cells: Vec<Position>,
    /// `9^k` entries; the first scope cell varies slowest.
    table: Vec<bool>,
    cache: Mutex<HashMap<Vec<u8>, CandidateGrid>>,
}

impl DenseMultiCell {
    /// Enumerates all digit tuples over `cells` and records which satisfy
    /// `predicate`.
    ///
    /// The predicate receives one digit per scope cell, in scope order, and
    /// must be a pure function of that tuple.
    ///
    /// # Errors
    ///
    /// Returns [`ConstraintError::TooManyCells`] if the scope exceeds
    /// [`MAX_CELLS`].
    pub fn build<F>(cells: Vec<Position>, predicate: F) -> Result<Self, ConstraintError>
    where
        F: Fn(&[Digit]) -> bool,
    {
        let k = cells.len();
        if k > MAX_CELLS {
            return Err(ConstraintError::TooManyCells(k));
        }

        let start = Instant::now();
        let size = (0..k).fold(1usize, |acc, _| acc * 9);
        let mut table = vec![false; size];
        let mut digits = vec![Digit::D1; k];
        let mut valid_count = 0usize;
        for (index, entry) in table.iter_mut().enumerate() {
            decode_tuple(index, &mut digits);
            if predicate(&digits) {
                *entry = true;
                valid_count += 1;
            }
        }
        log::debug!(
            "preprocessed {k}-cell constraint table: {valid_count}/{size} valid tuples in {:?}",
            start.elapsed()
        );

        Ok(Self {
            cells,
            table,
            cache: Mutex::new(HashMap::new()),
        })
    }

    /// Returns the ordered scope of this table.
    #[must_use]
    pub fn cells(&self) -> &[Position] {
        &self.cells
    }

    /// Returns the candidate mask consistent with the current scope
    /// assignment.
    ///
    /// A digit is permitted at an unassigned scope cell iff some valid tuple
    /// agrees with every assigned scope cell and places that digit there.
    /// Cells outside the scope, and assigned scope cells, are left fully
    /// permitted; the caller intersects the mask into its live candidates.
    #[must_use]
    pub fn available_candidates(&self, assigned: &DigitGrid) -> CandidateGrid {
        let values: Vec<u8> = self
            .cells
            .iter()
            .map(|&pos| assigned.get(pos).map_or(0, Digit::value))
            .collect();

        let mut cache = self.cache.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(mask) = cache.get(&values) {
            return mask.clone();
        }

        let mask = self.project(&values);
        if cache.len() >= CACHE_CAP {
            cache.clear();
        }
        cache.insert(values, mask.clone());
        mask
    }

    /// Projects the table onto the unassigned scope coordinates of `values`
    /// (`0` entries).
    fn project(&self, values: &[u8]) -> CandidateGrid {
        let k = self.cells.len();
        let free: Vec<usize> = (0..k).filter(|&i| values[i] == 0).collect();
        let mut mask = CandidateGrid::FULL;
        if free.is_empty() {
            return mask;
        }

        // Table strides per scope coordinate, and the fixed contribution of
        // the assigned coordinates.
        let mut strides = vec![0usize; k];
        let mut stride = 1usize;
        for i in (0..k).rev() {
            strides[i] = stride;
            stride *= 9;
        }
        let base: usize = (0..k)
            .filter(|&i| values[i] != 0)
            .map(|i| usize::from(values[i] - 1) * strides[i])
            .sum();

        let mut allowed = vec![DigitSet::EMPTY; free.len()];
        let combos = (0..free.len()).fold(1usize, |acc, _| acc * 9);
        let mut digits = vec![Digit::D1; free.len()];
        for combo in 0..combos {
            decode_tuple(combo, &mut digits);
            let index = base
                + free
                    .iter()
                    .zip(&digits)
                    .map(|(&i, digit)| usize::from(digit.index()) * strides[i])
                    .sum::<usize>();
            if self.table[index] {
                for (slot, &digit) in allowed.iter_mut().zip(&digits) {
                    slot.insert(digit);
                }
            }
        }

        for (&i, &allow) in free.iter().zip(&allowed) {
            mask.restrict(self.cells[i], allow);
        }
        mask
    }
}

impl Debug for DenseMultiCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DenseMultiCell")
            .field("cells", &self.cells)
            .field("table_len", &self.table.len())
            .finish_non_exhaustive()
    }
}

/// Decodes a linear table index into a digit tuple; the first coordinate
/// varies slowest.
fn decode_tuple(mut index: usize, digits: &mut [Digit]) {
    for slot in digits.iter_mut().rev() {
        #[expect(clippy::cast_possible_truncation, reason = "remainder is below 9")]
        let rem = (index % 9) as u8;
        *slot = Digit::from_index(rem);
        index /= 9;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn init_logging() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn grid_with(cells: &[(Position, Digit)]) -> DigitGrid {
        let mut grid = DigitGrid::new();
        for &(pos, digit) in cells {
            grid.set(pos, Some(digit));
        }
        grid
    }

    #[test]
    fn test_rejects_oversized_scope() {
        let cells: Vec<_> = Position::ALL[..8].to_vec();
        let result = DenseMultiCell::build(cells, |_| true);
        assert!(matches!(result, Err(ConstraintError::TooManyCells(8))));
    }

    #[test]
    fn test_projection_on_empty_scope_assignment() {
        init_logging();
        // Two cells summing to 3: only (1, 2) and (2, 1) are valid.
        let cells = vec![Position::new(0, 0), Position::new(0, 1)];
        let table = DenseMultiCell::build(cells, |digits| {
            digits.iter().map(|d| u32::from(d.value())).sum::<u32>() == 3
        })
        .unwrap();

        let mask = table.available_candidates(&DigitGrid::new());
        let expected: DigitSet = [Digit::D1, Digit::D2].into_iter().collect();
        assert_eq!(mask.candidates_at(Position::new(0, 0)), expected);
        assert_eq!(mask.candidates_at(Position::new(0, 1)), expected);
        // Cells outside the scope are untouched
        assert_eq!(mask.count_at(Position::new(5, 5)), 9);
    }

    #[test]
    fn test_projection_with_partial_assignment() {
        let cells = vec![Position::new(0, 0), Position::new(0, 1)];
        let table = DenseMultiCell::build(cells, |digits| {
            digits.iter().map(|d| u32::from(d.value())).sum::<u32>() == 10
        })
        .unwrap();

        let assigned = grid_with(&[(Position::new(0, 0), Digit::D7)]);
        let mask = table.available_candidates(&assigned);
        assert_eq!(
            mask.candidates_at(Position::new(0, 1)),
            DigitSet::of(Digit::D3)
        );
        // The assigned scope cell itself is left fully permitted
        assert_eq!(mask.count_at(Position::new(0, 0)), 9);
    }

    #[test]
    fn test_unsatisfiable_scope_masks_everything_out() {
        let cells = vec![Position::new(4, 4)];
        let table = DenseMultiCell::build(cells, |_| false).unwrap();

        let mask = table.available_candidates(&DigitGrid::new());
        assert!(mask.candidates_at(Position::new(4, 4)).is_empty());
    }

    #[test]
    fn test_cached_projection_is_stable() {
        let cells = vec![Position::new(2, 2), Position::new(2, 3)];
        let table = DenseMultiCell::build(cells, |digits| digits[0] < digits[1]).unwrap();

        let assigned = grid_with(&[(Position::new(2, 2), Digit::D4)]);
        let first = table.available_candidates(&assigned);
        let second = table.available_candidates(&assigned);
        assert_eq!(first, second);

        let expected: DigitSet = [Digit::D5, Digit::D6, Digit::D7, Digit::D8, Digit::D9]
            .into_iter()
            .collect();
        assert_eq!(first.candidates_at(Position::new(2, 3)), expected);
    }
}
