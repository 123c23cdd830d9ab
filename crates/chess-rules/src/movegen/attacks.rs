//! Attack detection built on the reachability rules.

use super::reachable_cells;
use crate::{BoardQuery, PlacedPiece};
use chess_core::{Cell, CellSet, Color, PieceKind};

/// Returns the cells on which `placed` could capture an opposing piece.
///
/// Equal to the reachable cells for every kind but the pawn, whose pushes
/// never capture and whose forward diagonals threaten even while empty.
pub fn attacked_cells<B: BoardQuery + ?Sized>(board: &B, placed: PlacedPiece) -> CellSet {
    match placed.kind() {
        PieceKind::Pawn => {
            let forward = placed.color().pawn_direction();
            [-1, 1]
                .into_iter()
                .map(|side| placed.cell.offset(forward, side))
                .filter(|&target| board.piece_can_enter_cell(placed.piece, target))
                .collect()
        }
        _ => reachable_cells(board, placed),
    }
}

/// Returns true if any piece of color `by` attacks `cell`.
pub fn is_cell_attacked<B: BoardQuery + ?Sized>(board: &B, cell: Cell, by: Color) -> bool {
    board
        .pieces(by)
        .into_iter()
        .any(|attacker| attacked_cells(board, attacker).contains(cell))
}

/// Returns true if the king of `color` is attacked by the opposing side.
///
/// A side without a king on the board is never in check.
pub fn is_king_attacked<B: BoardQuery + ?Sized>(board: &B, color: Color) -> bool {
    match board.king_cell(color) {
        Some(king) => is_cell_attacked(board, king, color.opposite()),
        None => false,
    }
}
