//! Error types for board access and rule evaluation.

use chess_core::{Cell, Piece};
use thiserror::Error;

/// Errors raised by a board when it is mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("cell {0} is off the board")]
    OffBoard(Cell),
}

/// Errors raised by the legality filter and the evaluator.
///
/// Off-board candidate cells are not errors: the rules filter them out.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RulesError {
    /// The board does not hold the expected piece on the given cell.
    #[error("inconsistent board: expected {expected} at {cell}, found {}", describe(.found))]
    InconsistentBoard {
        cell: Cell,
        expected: Piece,
        found: Option<Piece>,
    },

    #[error(transparent)]
    Board(#[from] BoardError),
}

fn describe(found: &Option<Piece>) -> String {
    match found {
        Some(piece) => piece.to_string(),
        None => "an empty cell".to_string(),
    }
}
