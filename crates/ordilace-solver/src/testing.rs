//! Shared fixtures for solver tests.

use ordilace_core::{Digit, DigitGrid, DigitSet, Position};

/// A complete, valid grid (the solution of [`EASY_PUZZLE`]).
pub(crate) const SOLVED: &str =
    "534678912672195348198342567859761423426853791713924856961537284287419635345286179";

/// A well-known easy puzzle with a unique solution ([`SOLVED`]).
pub(crate) const EASY_PUZZLE: &str =
    "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79";

/// The reference ordinal-arrow puzzle: row 1 columns 1-4 sum (as ordinals)
/// to the ordinal of row 1 column 5.
pub(crate) const ARROW_PUZZLE: [[u8; 9]; 9] = [
    [9, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 2, 0, 0, 1, 0, 0, 0, 3],
    [0, 1, 0, 0, 0, 0, 0, 6, 0],
    [0, 0, 0, 4, 0, 0, 0, 7, 0],
    [7, 0, 8, 6, 0, 0, 0, 0, 0],
    [0, 0, 0, 0, 3, 0, 1, 0, 0],
    [4, 0, 0, 0, 0, 0, 2, 0, 0],
];

/// The reference two-cage killer puzzle.
pub(crate) const KILLER_PUZZLE: [[u8; 9]; 9] = [
    [9, 4, 0, 0, 0, 0, 0, 0, 8],
    [0, 0, 0, 0, 0, 0, 5, 0, 0],
    [0, 0, 0, 0, 0, 0, 0, 0, 0],
    [0, 2, 0, 0, 1, 0, 0, 0, 3],
    [0, 1, 0, 0, 0, 0, 0, 6, 0],
    [0, 0, 0, 4, 0, 0, 0, 7, 0],
    [7, 0, 8, 6, 0, 0, 0, 0, 0],
    [2, 0, 0, 0, 3, 0, 0, 0, 1],
    [4, 0, 0, 0, 0, 0, 2, 0, 0],
];

/// Expected true-candidate sets for [`KILLER_PUZZLE`] with its two cages
/// (`(1,1)+(1,2)+(1,3)+(2,3)+(2,4)+(2,5) = 26` and `(1,8)+(2,8) = 10`).
pub(crate) const KILLER_TRUE_CANDIDATES: [[&[u8]; 9]; 9] = [
    [
        &[9],
        &[4],
        &[2, 5, 6],
        &[1, 2, 3, 5],
        &[5, 6, 7],
        &[2, 3, 5, 6, 7],
        &[3, 7],
        &[1, 2],
        &[8],
    ],
    [
        &[1, 3, 6, 8],
        &[7, 8],
        &[2, 3, 6],
        &[1, 3, 8],
        &[6, 7, 8, 9],
        &[6, 7, 8, 9],
        &[5],
        &[1, 2, 9],
        &[4],
    ],
    [
        &[1, 3, 5, 8],
        &[5, 7, 8],
        &[2, 3, 5],
        &[1, 2, 3, 5, 8, 9],
        &[4],
        &[2, 3, 5, 8, 9],
        &[3, 7],
        &[2, 9],
        &[6],
    ],
    [
        &[5, 6, 8],
        &[2],
        &[4, 7],
        &[5, 8, 9],
        &[1],
        &[5, 6, 7, 8, 9],
        &[4, 8, 9],
        &[4, 5],
        &[3],
    ],
    [
        &[3, 5, 8],
        &[1],
        &[4, 7],
        &[2, 3, 5, 8, 9],
        &[5, 7, 8, 9],
        &[2, 3, 5, 7, 8, 9],
        &[4, 8, 9],
        &[6],
        &[2, 5, 9],
    ],
    [
        &[3, 5, 6, 8],
        &[5, 8, 9],
        &[3, 5, 6, 9],
        &[4],
        &[5, 6, 8],
        &[2, 3, 5, 6, 8],
        &[1],
        &[7],
        &[2, 5],
    ],
    [
        &[7],
        &[3],
        &[8],
        &[6],
        &[2],
        &[1],
        &[4, 9],
        &[4, 5],
        &[5, 9],
    ],
    [&[2], &[5, 9], &[5, 9], &[7], &[3], &[4], &[6], &[8], &[1]],
    [
        &[4],
        &[6],
        &[1],
        &[5, 8, 9],
        &[5, 8, 9],
        &[5, 8, 9],
        &[2],
        &[3],
        &[7],
    ],
];

pub(crate) fn digit_set(values: &[u8]) -> DigitSet {
    values.iter().map(|&v| Digit::from_value(v)).collect()
}

/// Asserts that `solution` completes `puzzle`: all clues preserved, every
/// cell filled, and the standard sudoku rules satisfied.
#[track_caller]
pub(crate) fn assert_completes(puzzle: &DigitGrid, solution: &DigitGrid) {
    assert!(solution.is_complete(), "solution has empty cells");
    assert!(solution.satisfies_rules(), "solution violates sudoku rules");
    for pos in Position::ALL {
        if let Some(clue) = puzzle.get(pos) {
            assert_eq!(
                solution.get(pos),
                Some(clue),
                "clue at {pos:?} was not preserved"
            );
        }
    }
}
