//! Property tests for the reachability rules and the legality filter on
//! randomly populated boards.

use chess_core::{Cell, Color, Piece, PieceKind};
use chess_rules::{
    reachable_cells, valid_cells, Board, BoardQuery, EvalConfig, Evaluator, PlacedPiece,
};
use proptest::prelude::*;

fn arb_piece() -> impl Strategy<Value = Piece> {
    (0usize..6, any::<bool>()).prop_map(|(kind, white)| {
        let color = if white { Color::White } else { Color::Black };
        Piece::new(PieceKind::ALL[kind], color)
    })
}

/// A board with up to 24 random placements, plus one king per side on
/// random cells so check detection has something to look at.
fn arb_board() -> impl Strategy<Value = Board> {
    (
        prop::collection::vec((0u8..64, arb_piece()), 0..24),
        0u8..64,
        0u8..64,
    )
        .prop_map(|(placements, white_king, black_king)| {
            let mut board = Board::empty();
            for (index, piece) in placements {
                if let Some(cell) = Cell::from_index(index) {
                    board.place(cell, piece).unwrap();
                }
            }
            for (index, color) in [(white_king, Color::White), (black_king, Color::Black)] {
                if let Some(cell) = Cell::from_index(index) {
                    board.place(cell, Piece::new(PieceKind::King, color)).unwrap();
                }
            }
            board
        })
}

fn all_pieces(board: &Board) -> Vec<PlacedPiece> {
    let mut pieces = board.pieces(Color::White);
    pieces.extend(board.pieces(Color::Black));
    pieces
}

proptest! {
    #[test]
    fn reachable_cells_are_on_board_and_never_own_pieces(board in arb_board()) {
        for placed in all_pieces(&board) {
            for cell in reachable_cells(&board, placed) {
                prop_assert!(cell.is_on_board());
                prop_assert_ne!(cell, placed.cell);
                if let Some(occupant) = board.get_cell(cell) {
                    prop_assert!(placed.piece.is_opponent_of(occupant));
                }
            }
        }
    }

    #[test]
    fn valid_cells_leave_board_untouched(board in arb_board()) {
        let mut board = board;
        let before = board.clone();
        for placed in all_pieces(&before) {
            valid_cells(&mut board, placed).unwrap();
            prop_assert_eq!(&board, &before);
        }
    }

    #[test]
    fn valid_cells_are_reachable_and_safe(board in arb_board()) {
        let mut board = board;
        for placed in all_pieces(&board) {
            let reachable = reachable_cells(&board, placed);
            let valid = valid_cells(&mut board, placed).unwrap();
            prop_assert!(valid.is_subset(reachable));

            for target in valid {
                let mut after = board.clone();
                after.remove(placed.cell).unwrap();
                after.place(target, placed.piece).unwrap();
                prop_assert!(!after.is_king_check_cached(placed.color()));
            }
        }
    }

    #[test]
    fn knight_jumps_are_bounded(index in 0u8..64) {
        let cell = Cell::from_index(index).unwrap();
        let mut board = Board::empty();
        let knight = Piece::white(PieceKind::Knight);
        board.place(cell, knight).unwrap();
        let count = reachable_cells(&board, PlacedPiece::new(knight, cell)).len();
        prop_assert!(count <= 8);
        let corner = matches!((cell.row(), cell.col()), (0 | 7, 0 | 7));
        if corner {
            prop_assert_eq!(count, 2);
        }
    }

    #[test]
    fn base_evaluation_is_color_independent(board in arb_board()) {
        let mut board = board;
        let evaluator = Evaluator::new(EvalConfig::default());
        for placed in all_pieces(&board) {
            let score = evaluator.evaluate(&mut board, placed).unwrap();
            prop_assert_eq!(score, f64::from(placed.kind().base_value()));
        }
    }
}

#[test]
fn mirrored_positions_score_alike_in_threat_mode() {
    let evaluator = Evaluator::new(EvalConfig::with_threat_bonus());

    let mut white_side = Board::empty();
    white_side.place(Cell::new(0, 4), Piece::white(PieceKind::King)).unwrap();
    white_side.place(Cell::new(3, 3), Piece::white(PieceKind::Queen)).unwrap();
    white_side.place(Cell::new(6, 3), Piece::black(PieceKind::Bishop)).unwrap();
    white_side.place(Cell::new(3, 0), Piece::black(PieceKind::Pawn)).unwrap();

    let mut black_side = Board::empty();
    black_side.place(Cell::new(7, 4), Piece::black(PieceKind::King)).unwrap();
    black_side.place(Cell::new(4, 3), Piece::black(PieceKind::Queen)).unwrap();
    black_side.place(Cell::new(1, 3), Piece::white(PieceKind::Bishop)).unwrap();
    black_side.place(Cell::new(4, 0), Piece::white(PieceKind::Pawn)).unwrap();

    let white_queen = white_side.placed(Cell::new(3, 3)).unwrap();
    let black_queen = black_side.placed(Cell::new(4, 3)).unwrap();

    let white_score = evaluator.evaluate(&mut white_side, white_queen).unwrap();
    let black_score = evaluator.evaluate(&mut black_side, black_queen).unwrap();
    assert!((white_score - black_score).abs() < 1e-9);
    assert!((white_score - (900.0 + 4.0 + 1.0)).abs() < 1e-9);
}
