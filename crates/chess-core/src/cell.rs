//! Board cell coordinates and step directions.

use std::fmt;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: i8 = 8;

/// A cell on the board, addressed by `(row, col)`.
///
/// Rows grow from White's back row (0) towards Black's (7). A cell may hold
/// coordinates outside the board: candidate generation routinely steps off
/// the edge, and callers filter with [`Cell::is_on_board`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    row: i8,
    col: i8,
}

impl Cell {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Cell { row, col }
    }

    /// Creates a cell from an index (0-63), row-major.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Cell::new((index / 8) as i8, (index % 8) as i8))
        } else {
            None
        }
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    /// Returns true if both coordinates lie in `0..8`.
    #[inline]
    pub const fn is_on_board(self) -> bool {
        self.row >= 0 && self.row < BOARD_SIZE && self.col >= 0 && self.col < BOARD_SIZE
    }

    /// Returns the row-major index (0-63), or `None` off the board.
    #[inline]
    pub const fn index(self) -> Option<usize> {
        if self.is_on_board() {
            Some((self.row * BOARD_SIZE + self.col) as usize)
        } else {
            None
        }
    }

    /// Returns the cell shifted by the given deltas. The result may be off the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Self {
        Cell::new(self.row.saturating_add(d_row), self.col.saturating_add(d_col))
    }

    /// Returns the cell `steps` steps away along `dir`.
    #[inline]
    pub const fn step(self, dir: Direction, steps: i8) -> Self {
        self.offset(dir.d_row.saturating_mul(steps), dir.d_col.saturating_mul(steps))
    }

    /// Iterates over all 64 on-board cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..64u8).filter_map(Cell::from_index)
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cell({}, {})", self.row, self.col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i8, i8)> for Cell {
    fn from((row, col): (i8, i8)) -> Self {
        Cell::new(row, col)
    }
}

/// A single step `(d_row, d_col)` used by move patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Direction {
    pub d_row: i8,
    pub d_col: i8,
}

impl Direction {
    #[inline]
    pub const fn new(d_row: i8, d_col: i8) -> Self {
        Direction { d_row, d_col }
    }

    pub const NORTH: Direction = Direction::new(1, 0);
    pub const SOUTH: Direction = Direction::new(-1, 0);
    pub const EAST: Direction = Direction::new(0, 1);
    pub const WEST: Direction = Direction::new(0, -1);
    pub const NORTH_EAST: Direction = Direction::new(1, 1);
    pub const NORTH_WEST: Direction = Direction::new(1, -1);
    pub const SOUTH_EAST: Direction = Direction::new(-1, 1);
    pub const SOUTH_WEST: Direction = Direction::new(-1, -1);

    /// Rook directions.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::NORTH,
        Direction::SOUTH,
        Direction::EAST,
        Direction::WEST,
    ];

    /// Bishop directions.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NORTH_EAST,
        Direction::NORTH_WEST,
        Direction::SOUTH_EAST,
        Direction::SOUTH_WEST,
    ];

    /// Queen directions, also the king's single steps.
    pub const ALL: [Direction; 8] = [
        Direction::NORTH,
        Direction::SOUTH,
        Direction::EAST,
        Direction::WEST,
        Direction::NORTH_EAST,
        Direction::NORTH_WEST,
        Direction::SOUTH_EAST,
        Direction::SOUTH_WEST,
    ];

    /// The eight L-shaped knight jumps.
    pub const KNIGHT_JUMPS: [Direction; 8] = [
        Direction::new(2, 1),
        Direction::new(2, -1),
        Direction::new(-2, 1),
        Direction::new(-2, -1),
        Direction::new(1, 2),
        Direction::new(1, -2),
        Direction::new(-1, 2),
        Direction::new(-1, -2),
    ];
}
