//! Mutable board state during search.

use std::sync::Arc;

use ordilace_constraint::{BoxedConstraint, Constraint as _};
use ordilace_core::{CandidateGrid, Digit, DigitGrid, DigitSet, Position};

use crate::error::SolveError;

/// The mutable state of a search branch: the partial assignment plus the
/// live candidate bitmap, with the extra-constraint list attached.
///
/// A `SolvingBoard` is cloned before every speculative placement so that the
/// parent branch can backtrack; the constraint list is shared by reference
/// across all clones. [`settle`](Self::settle) and
/// [`quickdrops`](Self::quickdrops) signal failure through their return
/// value and make no attempt to roll the board back - a `false` means the
/// clone is dead and the caller moves on to its next candidate.
#[derive(Debug, Clone)]
pub struct SolvingBoard {
    assigned: DigitGrid,
    candidates: CandidateGrid,
    constraints: Arc<[BoxedConstraint]>,
}

impl SolvingBoard {
    /// Builds a board from a clue puzzle and an initial candidate mask,
    /// settling the clues in reading order.
    ///
    /// The mask is all-true for a plain solve; true-candidate enumeration
    /// passes the not-yet-refuted mask of its tri-state board instead.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::IncompatiblePuzzle`] with the offending
    /// position if a clue cannot be settled.
    pub fn new(
        puzzle: &DigitGrid,
        initial: CandidateGrid,
        constraints: Arc<[BoxedConstraint]>,
    ) -> Result<Self, SolveError> {
        let mut board = Self {
            assigned: DigitGrid::new(),
            candidates: initial,
            constraints,
        };
        for pos in Position::ALL {
            if let Some(digit) = puzzle.get(pos)
                && !board.settle(pos, digit)
            {
                return Err(SolveError::IncompatiblePuzzle(pos));
            }
        }
        Ok(board)
    }

    /// Returns the current partial assignment.
    #[must_use]
    pub fn assigned(&self) -> &DigitGrid {
        &self.assigned
    }

    /// Consumes the board and returns its assignment.
    #[must_use]
    pub fn into_assigned(self) -> DigitGrid {
        self.assigned
    }

    /// Returns the live candidate set at a position.
    #[must_use]
    pub fn candidates_at(&self, pos: Position) -> DigitSet {
        self.candidates.candidates_at(pos)
    }

    /// Intersects the live candidates with an external mask.
    pub fn mask_candidates(&mut self, mask: &CandidateGrid) {
        self.candidates &= mask;
    }

    /// Places `digit` at `pos` and propagates the consequences.
    ///
    /// Eliminates the digit from the candidates of every peer (row, column,
    /// 3×3 block), intersects the candidates with every extra constraint's
    /// mask, and finally checks that no unassigned cell has run out of
    /// candidates.
    ///
    /// Returns `false` if the placement is impossible or leaves the board
    /// dead; the board state is then only good for discarding. Settling an
    /// already-settled cell again also returns `false`, because its own
    /// candidates were cleared by the first settle - the board state is
    /// unchanged in that case.
    pub fn settle(&mut self, pos: Position, digit: Digit) -> bool {
        if !self.candidates.contains(pos, digit) {
            return false;
        }
        match self.assigned.get(pos) {
            Some(assigned) if assigned == digit => return true,
            Some(_) => return false,
            None => {}
        }

        self.assigned.set(pos, Some(digit));
        self.candidates.clear_cell(pos);

        // Peer elimination
        for i in 0..9 {
            self.candidates.remove(Position::new(pos.row(), i), digit);
            self.candidates.remove(Position::new(i, pos.col()), digit);
            self.candidates
                .remove(Position::from_block(pos.block_index(), i), digit);
        }

        // Constraint-driven elimination
        for constraint in self.constraints.iter() {
            self.candidates &= &constraint.available_candidates(&self.assigned);
        }

        // Dead-board check: every unassigned cell needs a live candidate
        for pos in Position::ALL {
            if self.assigned.is_empty(pos) && self.candidates.candidates_at(pos).is_empty() {
                return false;
            }
        }
        true
    }

    /// Runs the cheap inference rules to a fixed point.
    ///
    /// Applies three rules in rotation - naked single, hidden single in a
    /// row, hidden single in a column - settling every find, and stops once
    /// three consecutive rules find nothing new.
    ///
    /// Returns `false` as soon as any settle fails; the board is then dead.
    pub fn quickdrops(&mut self) -> bool {
        let mut checked = 0;
        loop {
            // Naked singles: cells whose candidate set is down to one digit
            let singles: Vec<(Position, Digit)> = Position::ALL
                .into_iter()
                .filter_map(|pos| self.candidates.candidates_at(pos).single().map(|d| (pos, d)))
                .collect();
            if singles.is_empty() {
                checked += 1;
            }
            for (pos, digit) in singles {
                checked = 0;
                if !self.settle(pos, digit) {
                    return false;
                }
            }
            if checked >= 3 {
                break;
            }

            // Hidden singles in rows: a digit with exactly one spot left in a row
            let row_singles = self.hidden_singles(|unit, i| Position::new(unit, i));
            if row_singles.is_empty() {
                checked += 1;
            }
            for (pos, digit) in row_singles {
                checked = 0;
                if !self.settle(pos, digit) {
                    return false;
                }
            }
            if checked >= 3 {
                break;
            }

            // Hidden singles in columns
            let col_singles = self.hidden_singles(|unit, i| Position::new(i, unit));
            if col_singles.is_empty() {
                checked += 1;
            }
            for (pos, digit) in col_singles {
                checked = 0;
                if !self.settle(pos, digit) {
                    return false;
                }
            }
            if checked >= 3 {
                break;
            }
        }
        true
    }

    /// Finds (position, digit) pairs where the digit has exactly one live
    /// spot in a unit; `cell` maps (unit index, index within unit) to a
    /// board position.
    fn hidden_singles(&self, cell: impl Fn(u8, u8) -> Position) -> Vec<(Position, Digit)> {
        let mut found = Vec::new();
        for unit in 0..9 {
            for digit in Digit::ALL {
                let mut spots =
                    (0..9).filter(|&i| self.candidates.contains(cell(unit, i), digit));
                if let (Some(i), None) = (spots.next(), spots.next()) {
                    found.push((cell(unit, i), digit));
                }
            }
        }
        found
    }

    /// Returns the unassigned cell with the fewest live candidates together
    /// with that count, or `None` when the board is fully assigned.
    ///
    /// Ties break to the first cell in reading order.
    #[must_use]
    pub fn least_candidate_pick(&self) -> Option<(Position, usize)> {
        let mut best: Option<(Position, usize)> = None;
        for pos in Position::ALL {
            if self.assigned.get(pos).is_some() {
                continue;
            }
            let count = self.candidates.count_at(pos);
            if best.is_none_or(|(_, least)| count < least) {
                best = Some((pos, count));
            }
        }
        best
    }
}
