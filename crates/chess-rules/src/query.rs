//! The board surface the rules are written against.
//!
//! The rules never own a board. They read occupancy through [`BoardQuery`]
//! and, in the legality filter, mutate it temporarily through
//! [`BoardQuery::set_cell`]. Any board representation can plug in by
//! implementing the three required methods; [`Board`](crate::Board) is the
//! reference implementation.

use crate::BoardError;
use chess_core::{Cell, Color, Piece, PieceKind};

/// A piece together with the cell it occupies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlacedPiece {
    pub piece: Piece,
    pub cell: Cell,
}

impl PlacedPiece {
    #[inline]
    pub const fn new(piece: Piece, cell: Cell) -> Self {
        PlacedPiece { piece, cell }
    }

    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.piece.kind()
    }

    #[inline]
    pub const fn color(self) -> Color {
        self.piece.color()
    }
}

impl std::fmt::Display for PlacedPiece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} on {}", self.piece, self.cell)
    }
}

/// Occupancy access and mutation for an 8×8 board.
///
/// Off-board cells read as empty from [`get_cell`](BoardQuery::get_cell) and
/// are rejected by [`set_cell`](BoardQuery::set_cell).
pub trait BoardQuery {
    /// Returns the piece on `cell`, or `None` if it is empty or off the board.
    fn get_cell(&self, cell: Cell) -> Option<Piece>;

    /// Places `piece` on `cell` (or clears it when `None`), returning the
    /// previous occupant.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::OffBoard`] if `cell` is not on the board.
    fn set_cell(&mut self, cell: Cell, piece: Option<Piece>) -> Result<Option<Piece>, BoardError>;

    /// Returns true if the king of `color` is currently attacked.
    ///
    /// Called once per candidate by the legality filter, so implementations
    /// are expected to make repeated calls cheap. A side without a king is
    /// never in check.
    fn is_king_check_cached(&self, color: Color) -> bool;

    /// Returns true if `cell` lies on the board.
    #[inline]
    fn is_valid(&self, cell: Cell) -> bool {
        cell.is_on_board()
    }

    /// Returns true if `cell` is on the board and unoccupied.
    #[inline]
    fn cell_is_valid_and_empty(&self, cell: Cell) -> bool {
        self.is_valid(cell) && self.get_cell(cell).is_none()
    }

    /// Returns true if `piece` could stand on `cell`: on the board and either
    /// empty or held by the opposing color.
    #[inline]
    fn piece_can_enter_cell(&self, piece: Piece, cell: Cell) -> bool {
        self.is_valid(cell)
            && match self.get_cell(cell) {
                None => true,
                Some(occupant) => piece.is_opponent_of(occupant),
            }
    }

    /// Returns true if `cell` is on the board and held by the opposing color.
    #[inline]
    fn piece_can_hit_on_cell(&self, piece: Piece, cell: Cell) -> bool {
        self.is_valid(cell)
            && matches!(self.get_cell(cell), Some(occupant) if piece.is_opponent_of(occupant))
    }

    /// Returns every piece of `color`, in ascending cell order.
    fn pieces(&self, color: Color) -> Vec<PlacedPiece> {
        Cell::all()
            .filter_map(|cell| {
                self.get_cell(cell)
                    .filter(|piece| piece.color() == color)
                    .map(|piece| PlacedPiece::new(piece, cell))
            })
            .collect()
    }

    /// Returns the cell of the king of `color`, if it is on the board.
    fn king_cell(&self, color: Color) -> Option<Cell> {
        let king = Piece::new(PieceKind::King, color);
        Cell::all().find(|&cell| self.get_cell(cell) == Some(king))
    }

    /// Returns the piece on `cell` together with its location.
    fn placed(&self, cell: Cell) -> Option<PlacedPiece> {
        self.get_cell(cell).map(|piece| PlacedPiece::new(piece, cell))
    }
}
