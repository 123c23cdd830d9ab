//! Reachability rules.
//!
//! [`reachable_cells`] computes, for one piece, every cell its movement
//! pattern lets it enter given the current occupancy. Whether the move would
//! leave the mover's own king in check is not considered here; that is the
//! job of [`valid_cells`](crate::valid_cells).

mod attacks;

use crate::{BoardQuery, PlacedPiece};
use chess_core::{CellSet, Direction, PieceKind};

pub use attacks::{attacked_cells, is_cell_attacked, is_king_attacked};

/// Returns the cells `placed` can reach by its movement pattern.
///
/// Never mutates the board and never returns an off-board cell.
pub fn reachable_cells<B: BoardQuery + ?Sized>(board: &B, placed: PlacedPiece) -> CellSet {
    match placed.kind() {
        PieceKind::Pawn => pawn_cells(board, placed),
        PieceKind::Knight => step_cells(board, placed, &Direction::KNIGHT_JUMPS),
        PieceKind::Bishop => slide_cells(board, placed, &Direction::DIAGONAL),
        PieceKind::Rook => slide_cells(board, placed, &Direction::ORTHOGONAL),
        PieceKind::Queen => slide_cells(board, placed, &Direction::ALL),
        PieceKind::King => step_cells(board, placed, &Direction::ALL),
    }
}

/// Pawn pushes and captures.
///
/// One step forward onto an empty cell; a second step from the home row if
/// that cell is empty too. A blocked first step forecloses the second.
/// Forward diagonals only when they hold an opposing piece.
fn pawn_cells<B: BoardQuery + ?Sized>(board: &B, placed: PlacedPiece) -> CellSet {
    let mut cells = CellSet::EMPTY;
    let color = placed.color();
    let forward = color.pawn_direction();
    let max_steps = if placed.cell.row() == color.home_row() {
        2
    } else {
        1
    };

    for steps in 1..=max_steps {
        let target = placed.cell.offset(forward * steps, 0);
        if !board.cell_is_valid_and_empty(target) {
            break;
        }
        cells.insert(target);
    }

    for side in [-1, 1] {
        let target = placed.cell.offset(forward, side);
        if board.piece_can_hit_on_cell(placed.piece, target) {
            cells.insert(target);
        }
    }

    cells
}

/// Slides along each direction until blocked.
///
/// An own piece or the board edge stops the slide before the cell; an
/// opposing piece stops it after including the cell.
fn slide_cells<B: BoardQuery + ?Sized>(
    board: &B,
    placed: PlacedPiece,
    directions: &[Direction],
) -> CellSet {
    let mut cells = CellSet::EMPTY;

    for &dir in directions {
        let mut target = placed.cell.step(dir, 1);
        while board.piece_can_enter_cell(placed.piece, target) {
            cells.insert(target);
            if board.piece_can_hit_on_cell(placed.piece, target) {
                break;
            }
            target = target.step(dir, 1);
        }
    }

    cells
}

/// Single jumps or steps: each target on the board and not held by an own piece.
fn step_cells<B: BoardQuery + ?Sized>(
    board: &B,
    placed: PlacedPiece,
    offsets: &[Direction],
) -> CellSet {
    offsets
        .iter()
        .map(|&dir| placed.cell.step(dir, 1))
        .filter(|&target| board.piece_can_enter_cell(placed.piece, target))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Board;
    use chess_core::{Cell, Color, Piece};

    fn put(board: &mut Board, row: i8, col: i8, piece: Piece) -> PlacedPiece {
        let cell = Cell::new(row, col);
        board.place(cell, piece).unwrap();
        PlacedPiece::new(piece, cell)
    }

    fn cells(list: &[(i8, i8)]) -> CellSet {
        list.iter().map(|&(r, c)| Cell::new(r, c)).collect()
    }

    #[test]
    fn pawn_on_home_row_dashes() {
        let mut board = Board::empty();
        let pawn = put(&mut board, 1, 4, Piece::white(PieceKind::Pawn));
        assert_eq!(reachable_cells(&board, pawn), cells(&[(2, 4), (3, 4)]));
    }

    #[test]
    fn black_pawn_moves_down() {
        let mut board = Board::empty();
        let pawn = put(&mut board, 6, 2, Piece::black(PieceKind::Pawn));
        assert_eq!(reachable_cells(&board, pawn), cells(&[(5, 2), (4, 2)]));

        let moved = put(&mut board, 5, 5, Piece::black(PieceKind::Pawn));
        assert_eq!(reachable_cells(&board, moved), cells(&[(4, 5)]));
    }

    #[test]
    fn pawn_off_home_row_steps_once() {
        let mut board = Board::empty();
        let pawn = put(&mut board, 3, 4, Piece::white(PieceKind::Pawn));
        assert_eq!(reachable_cells(&board, pawn), cells(&[(4, 4)]));
    }

    #[test]
    fn blocked_pawn_cannot_dash() {
        let mut board = Board::empty();
        let pawn = put(&mut board, 1, 4, Piece::white(PieceKind::Pawn));
        put(&mut board, 2, 4, Piece::black(PieceKind::Knight));
        assert!(reachable_cells(&board, pawn).is_empty());
    }

    #[test]
    fn pawn_dash_blocked_on_second_cell() {
        let mut board = Board::empty();
        let pawn = put(&mut board, 1, 4, Piece::white(PieceKind::Pawn));
        put(&mut board, 3, 4, Piece::white(PieceKind::Bishop));
        assert_eq!(reachable_cells(&board, pawn), cells(&[(2, 4)]));
    }

    #[test]
    fn pawn_captures_diagonally_only_onto_opponents() {
        let mut board = Board::empty();
        let pawn = put(&mut board, 1, 4, Piece::white(PieceKind::Pawn));
        put(&mut board, 2, 3, Piece::black(PieceKind::Rook));
        put(&mut board, 2, 5, Piece::white(PieceKind::Rook));
        assert_eq!(
            reachable_cells(&board, pawn),
            cells(&[(2, 4), (3, 4), (2, 3)])
        );
    }

    #[test]
    fn pawn_on_edge_column_ignores_off_board_diagonal() {
        let mut board = Board::empty();
        let pawn = put(&mut board, 4, 0, Piece::white(PieceKind::Pawn));
        put(&mut board, 5, 1, Piece::black(PieceKind::Queen));
        assert_eq!(reachable_cells(&board, pawn), cells(&[(5, 0), (5, 1)]));
    }

    #[test]
    fn pawn_on_last_row_has_no_moves() {
        let mut board = Board::empty();
        let pawn = put(&mut board, 7, 3, Piece::white(PieceKind::Pawn));
        assert!(reachable_cells(&board, pawn).is_empty());
    }

    #[test]
    fn rook_slides_until_blocked() {
        let mut board = Board::empty();
        let rook = put(&mut board, 0, 0, Piece::white(PieceKind::Rook));
        put(&mut board, 3, 0, Piece::black(PieceKind::Pawn));
        put(&mut board, 0, 2, Piece::white(PieceKind::Knight));
        assert_eq!(
            reachable_cells(&board, rook),
            cells(&[(1, 0), (2, 0), (3, 0), (0, 1)])
        );
    }

    #[test]
    fn rook_on_empty_board_reaches_fourteen_cells() {
        let mut board = Board::empty();
        let rook = put(&mut board, 3, 3, Piece::black(PieceKind::Rook));
        assert_eq!(reachable_cells(&board, rook).len(), 14);
    }

    #[test]
    fn bishop_slides_diagonally() {
        let mut board = Board::empty();
        let bishop = put(&mut board, 2, 2, Piece::white(PieceKind::Bishop));
        put(&mut board, 4, 4, Piece::black(PieceKind::Pawn));
        put(&mut board, 1, 3, Piece::white(PieceKind::Pawn));
        assert_eq!(
            reachable_cells(&board, bishop),
            cells(&[(3, 3), (4, 4), (3, 1), (4, 0), (1, 1), (0, 0)])
        );
    }

    #[test]
    fn queen_combines_rook_and_bishop() {
        let mut board = Board::empty();
        let queen = put(&mut board, 3, 3, Piece::white(PieceKind::Queen));
        assert_eq!(reachable_cells(&board, queen).len(), 27);

        let rook = PlacedPiece::new(Piece::white(PieceKind::Rook), queen.cell);
        let bishop = PlacedPiece::new(Piece::white(PieceKind::Bishop), queen.cell);
        assert_eq!(
            reachable_cells(&board, queen),
            reachable_cells(&board, rook).union(reachable_cells(&board, bishop))
        );
    }

    #[test]
    fn knight_in_corner_has_two_jumps() {
        let mut board = Board::empty();
        let knight = put(&mut board, 0, 0, Piece::white(PieceKind::Knight));
        assert_eq!(reachable_cells(&board, knight), cells(&[(1, 2), (2, 1)]));
    }

    #[test]
    fn knight_jumps_over_pieces() {
        let mut board = Board::standard();
        let knight = board.placed(Cell::new(0, 1)).unwrap();
        assert_eq!(reachable_cells(&board, knight), cells(&[(2, 0), (2, 2)]));

        let center = put(&mut board, 4, 4, Piece::black(PieceKind::Knight));
        // (6,3) and (6,5) hold black pawns.
        assert_eq!(reachable_cells(&board, center).len(), 6);
    }

    #[test]
    fn king_steps_onto_empty_or_opposing_cells() {
        let mut board = Board::empty();
        let king = put(&mut board, 0, 4, Piece::white(PieceKind::King));
        put(&mut board, 1, 4, Piece::white(PieceKind::Pawn));
        put(&mut board, 1, 5, Piece::black(PieceKind::Pawn));
        assert_eq!(
            reachable_cells(&board, king),
            cells(&[(0, 3), (0, 5), (1, 3), (1, 5)])
        );
    }

    #[test]
    fn starting_position_reachability() {
        let board = Board::standard();
        let total: usize = board
            .pieces(Color::White)
            .into_iter()
            .map(|p| reachable_cells(&board, p).len())
            .sum();
        // Sixteen pawn moves plus four knight moves.
        assert_eq!(total, 20);
    }
}
