//! Cell-centric assignment board.

use std::{
    fmt::{self, Display},
    ops::{Index, IndexMut},
    slice,
    str::FromStr,
};

use crate::{digit::Digit, digit_set::DigitSet, position::Position};

/// A simple cell-centric grid for storing sudoku digits.
///
/// Each cell either contains a digit (1-9) or is empty (`None`); this is the
/// assignment-board view of a puzzle, where empty cells are the ones still to
/// be solved.
///
/// # Examples
///
/// ```
/// use ordilace_core::{Digit, DigitGrid, Position};
///
/// let mut grid = DigitGrid::new();
/// grid.set(Position::new(0, 0), Some(Digit::D5));
/// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D5));
/// ```
///
/// # String Parsing
///
/// `DigitGrid` parses from 81-character strings for easy puzzle input:
///
/// ```
/// use ordilace_core::DigitGrid;
///
/// let grid: DigitGrid = "123456789........................................................................".parse().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitGrid {
    cells: [Option<Digit>; 81],
}

impl Default for DigitGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl DigitGrid {
    /// Creates a new empty grid with all cells set to `None`.
    #[must_use]
    pub const fn new() -> Self {
        Self { cells: [None; 81] }
    }

    /// Creates a grid from an array of 81 cells in reading order.
    #[must_use]
    pub const fn from_array(cells: [Option<Digit>; 81]) -> Self {
        Self { cells }
    }

    /// Creates a grid from nine rows of raw values, where `0` denotes an
    /// empty cell and `1`-`9` a digit.
    ///
    /// This is the ingestion path for the external puzzle-input format.
    ///
    /// # Errors
    ///
    /// Returns [`DigitGridParseError::InvalidValue`] if any entry is greater
    /// than 9.
    ///
    /// # Examples
    ///
    /// ```
    /// use ordilace_core::{Digit, DigitGrid, Position};
    ///
    /// let mut rows = [[0u8; 9]; 9];
    /// rows[0][0] = 9;
    /// let grid = DigitGrid::from_rows(&rows).unwrap();
    /// assert_eq!(grid.get(Position::new(0, 0)), Some(Digit::D9));
    /// assert_eq!(grid.get(Position::new(0, 1)), None);
    /// ```
    pub fn from_rows(rows: &[[u8; 9]; 9]) -> Result<Self, DigitGridParseError> {
        let mut cells = [None; 81];
        for pos in Position::ALL {
            let value = rows[usize::from(pos.row())][usize::from(pos.col())];
            cells[pos.index()] = match value {
                0 => None,
                1..=9 => Some(Digit::from_value(value)),
                _ => return Err(DigitGridParseError::InvalidValue(value)),
            };
        }
        Ok(Self { cells })
    }

    /// Returns the digit at the given position, or `None` if the cell is empty.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Digit> {
        self.cells[pos.index()]
    }

    /// Sets the digit at the given position. Use `None` to clear the cell.
    pub const fn set(&mut self, pos: Position, digit: Option<Digit>) {
        self.cells[pos.index()] = digit;
    }

    /// Returns `true` if the cell at the given position is empty.
    #[must_use]
    pub fn is_empty(&self, pos: Position) -> bool {
        self.cells[pos.index()].is_none()
    }

    /// Returns `true` if every cell contains a digit.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// Returns `true` if no digit appears twice in any row, column, or block.
    ///
    /// Empty cells are ignored; a complete grid that satisfies this predicate
    /// is a solved sudoku.
    #[must_use]
    pub fn satisfies_rules(&self) -> bool {
        for unit in 0..9 {
            let mut row_seen = DigitSet::new();
            let mut col_seen = DigitSet::new();
            let mut block_seen = DigitSet::new();
            for i in 0..9 {
                if let Some(digit) = self.get(Position::new(unit, i))
                    && !row_seen.insert(digit)
                {
                    return false;
                }
                if let Some(digit) = self.get(Position::new(i, unit))
                    && !col_seen.insert(digit)
                {
                    return false;
                }
                if let Some(digit) = self.get(Position::from_block(unit, i))
                    && !block_seen.insert(digit)
                {
                    return false;
                }
            }
        }
        true
    }

    /// Returns an iterator over all cells in reading order.
    pub fn iter(&self) -> slice::Iter<'_, Option<Digit>> {
        self.cells.iter()
    }

    /// Returns the positions of all non-empty cells, in reading order.
    pub fn clue_positions(&self) -> impl Iterator<Item = Position> + '_ {
        Position::ALL
            .into_iter()
            .filter(|pos| self.get(*pos).is_some())
    }
}

impl<'a> IntoIterator for &'a DigitGrid {
    type Item = &'a Option<Digit>;
    type IntoIter = slice::Iter<'a, Option<Digit>>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

impl Index<Position> for DigitGrid {
    type Output = Option<Digit>;

    fn index(&self, pos: Position) -> &Self::Output {
        &self.cells[pos.index()]
    }
}

impl IndexMut<Position> for DigitGrid {
    fn index_mut(&mut self, pos: Position) -> &mut Self::Output {
        &mut self.cells[pos.index()]
    }
}

impl Display for DigitGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            if let Some(digit) = self.get(pos) {
                write!(f, "{digit}")?;
            } else {
                write!(f, ".")?;
            }
            if f.alternate() && (i + 1) % 9 == 0 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Errors that can occur when constructing a [`DigitGrid`] from external input.
#[derive(Debug, derive_more::Display, derive_more::Error)]
pub enum DigitGridParseError {
    /// The input contains a character that is not a digit, '.', '0', or '_'.
    #[display("invalid character '{_0}'")]
    InvalidCharacter(#[error(not(source))] char),
    /// The input does not contain exactly 81 non-whitespace characters.
    #[display("invalid grid length: expected 81, got {_0}")]
    InvalidLength(#[error(not(source))] usize),
    /// A raw cell value is outside the range 0-9.
    #[display("invalid cell value {_0}: expected 0-9")]
    InvalidValue(#[error(not(source))] u8),
}

impl FromStr for DigitGrid {
    type Err = DigitGridParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [None; 81];
        let mut cells_iter = cells.iter_mut();
        let mut chars = s.chars().filter(|c| !c.is_whitespace());

        let mut filled = 0;
        for (cell, ch) in cells_iter.by_ref().zip(chars.by_ref()) {
            filled += 1;
            *cell = match ch {
                '.' | '0' | '_' => None,
                '1'..='9' => Some(Digit::from_value(ch as u8 - b'0')),
                _ => return Err(DigitGridParseError::InvalidCharacter(ch)),
            };
        }

        let rest_chars = chars.count();
        if rest_chars > 0 {
            return Err(DigitGridParseError::InvalidLength(filled + rest_chars));
        }
        if filled < 81 {
            return Err(DigitGridParseError::InvalidLength(filled));
        }

        Ok(Self { cells })
    }
}
