//! Reference board implementation.

use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt;

use chess_core::{Cell, Color, Piece, PieceKind};

use crate::movegen::is_king_attacked;
use crate::zobrist::ZOBRIST;
use crate::{BoardError, BoardQuery, RulesConfig};

/// Back row layout, column 0 to 7.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// An 8×8 mailbox board.
///
/// Keeps a Zobrist hash of its occupancy up to date on every mutation and
/// memoises check answers per `(hash, color)`. The memo lives in a
/// [`RefCell`], so a `Board` is meant for one thread at a time.
#[derive(Clone)]
pub struct Board {
    cells: [Option<Piece>; 64],
    hash: u64,
    check_cache: RefCell<HashMap<u64, bool>>,
    check_cache_capacity: usize,
}

impl Board {
    /// Creates an empty board with the default cache capacity.
    pub fn empty() -> Self {
        Self::with_check_cache_capacity(RulesConfig::default().check_cache_capacity)
    }

    /// Creates an empty board whose check memo holds at most `capacity` entries.
    pub fn with_check_cache_capacity(capacity: usize) -> Self {
        Board {
            cells: [None; 64],
            hash: 0,
            check_cache: RefCell::new(HashMap::new()),
            check_cache_capacity: capacity.max(1),
        }
    }

    /// Creates an empty board configured from `config`.
    pub fn from_config(config: &RulesConfig) -> Self {
        Self::with_check_cache_capacity(config.check_cache_capacity)
    }

    /// Creates a board with the standard initial setup: White on rows 0-1,
    /// Black on rows 6-7.
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (col, kind) in BACK_ROW.iter().enumerate() {
                let col = col as i8;
                board.put(Cell::new(color.back_row(), col), Piece::new(*kind, color));
                board.put(
                    Cell::new(color.home_row(), col),
                    Piece::new(PieceKind::Pawn, color),
                );
            }
        }
        board
    }

    /// Places a piece, returning whatever stood there before.
    pub fn place(&mut self, cell: Cell, piece: Piece) -> Result<Option<Piece>, BoardError> {
        self.set_cell(cell, Some(piece))
    }

    /// Clears a cell, returning whatever stood there before.
    pub fn remove(&mut self, cell: Cell) -> Result<Option<Piece>, BoardError> {
        self.set_cell(cell, None)
    }

    /// Returns the Zobrist hash of the current occupancy.
    #[inline]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Returns the number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Drops every memoised check answer.
    pub fn clear_check_cache(&self) {
        self.check_cache.borrow_mut().clear();
    }

    /// Returns the number of memoised check answers.
    pub fn check_cache_len(&self) -> usize {
        self.check_cache.borrow().len()
    }

    // Setup helper for cells known to be on the board.
    fn put(&mut self, cell: Cell, piece: Piece) {
        if let Some(index) = cell.index() {
            self.write(index, cell, Some(piece));
        }
    }

    fn write(&mut self, index: usize, cell: Cell, piece: Option<Piece>) -> Option<Piece> {
        let previous = std::mem::replace(&mut self.cells[index], piece);
        if let Some(old) = previous {
            self.hash ^= ZOBRIST.piece_key(old, cell);
        }
        if let Some(new) = piece {
            self.hash ^= ZOBRIST.piece_key(new, cell);
        }
        previous
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}

impl BoardQuery for Board {
    #[inline]
    fn get_cell(&self, cell: Cell) -> Option<Piece> {
        cell.index().and_then(|i| self.cells[i])
    }

    fn set_cell(&mut self, cell: Cell, piece: Option<Piece>) -> Result<Option<Piece>, BoardError> {
        let index = cell.index().ok_or(BoardError::OffBoard(cell))?;
        Ok(self.write(index, cell, piece))
    }

    fn is_king_check_cached(&self, color: Color) -> bool {
        let key = self.hash ^ ZOBRIST.check_query_key(color);
        if let Some(&in_check) = self.check_cache.borrow().get(&key) {
            return in_check;
        }

        let in_check = is_king_attacked(self, color);
        let mut cache = self.check_cache.borrow_mut();
        if cache.len() >= self.check_cache_capacity {
            tracing::debug!(entries = cache.len(), "check cache full, flushing");
            cache.clear();
        }
        cache.insert(key, in_check);
        in_check
    }
}

/// Boards compare by occupancy only; the check memo is not part of the position.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash && self.cells == other.cells
    }
}

impl Eq for Board {}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board({:#018x})", self.hash)?;
        for row in (0..8).rev() {
            write!(f, "{} ", row)?;
            for col in 0..8 {
                let symbol = match self.get_cell(Cell::new(row, col)) {
                    Some(piece) => symbol(piece),
                    None => '.',
                };
                write!(f, "{} ", symbol)?;
            }
            writeln!(f)?;
        }
        writeln!(f, "  0 1 2 3 4 5 6 7")
    }
}

fn symbol(piece: Piece) -> char {
    let c = match piece.kind() {
        PieceKind::Pawn => 'p',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Rook => 'r',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    match piece.color() {
        Color::White => c.to_ascii_uppercase(),
        Color::Black => c,
    }
}
