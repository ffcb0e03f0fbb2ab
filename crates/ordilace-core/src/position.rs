//! Board position and coordinate utilities.

/// Board position `(row, col)` with both coordinates in the range 0-8.
///
/// Rows count downward from the top of the board and columns rightward from
/// the left edge. Positions order row-major, matching reading order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    row: u8,
    col: u8,
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.index().cmp(&other.index())
    }
}

impl Position {
    /// All 81 positions in reading order (row-major).
    pub const ALL: [Self; 81] = {
        let mut all = [Self { row: 0, col: 0 }; 81];
        let mut i = 0u8;
        while i < 81 {
            all[i as usize] = Self {
                row: i / 9,
                col: i % 9,
            };
            i += 1;
        }
        all
    };

    /// Creates a new position from row and column coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is greater than or equal to 9.
    #[must_use]
    pub const fn new(row: u8, col: u8) -> Self {
        assert!(row < 9 && col < 9);
        Self { row, col }
    }

    /// Creates a position from a block index and a cell index within that block.
    ///
    /// Blocks are numbered 0-8 in reading order, as are the cells within a block.
    ///
    /// # Panics
    ///
    /// Panics if `block_index` or `cell_index` is greater than or equal to 9.
    #[must_use]
    pub const fn from_block(block_index: u8, cell_index: u8) -> Self {
        assert!(block_index < 9 && cell_index < 9);
        Self::new(
            (block_index / 3) * 3 + cell_index / 3,
            (block_index % 3) * 3 + cell_index % 3,
        )
    }

    /// Returns the row of this position.
    #[must_use]
    pub const fn row(self) -> u8 {
        self.row
    }

    /// Returns the column of this position.
    #[must_use]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Returns the row-major linear index of this position (0-80).
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * 9 + self.col as usize
    }

    /// Returns the index (0-8) of the 3×3 block containing this position.
    #[must_use]
    pub const fn block_index(self) -> u8 {
        (self.row / 3) * 3 + self.col / 3
    }

    /// Returns the relative index (0-8) of this position within its block.
    #[must_use]
    pub const fn block_cell_index(self) -> u8 {
        (self.row % 3) * 3 + self.col % 3
    }

    /// Returns `true` if `other` is a peer of this position.
    ///
    /// Two distinct cells are peers when they share a row, column, or 3×3
    /// block. A position is not its own peer.
    #[must_use]
    pub const fn sees(self, other: Self) -> bool {
        if self.row == other.row && self.col == other.col {
            return false;
        }
        self.row == other.row
            || self.col == other.col
            || self.block_index() == other.block_index()
    }
}
