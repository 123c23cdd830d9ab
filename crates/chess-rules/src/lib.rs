//! Move generation and legality engine for a chess variant.
//!
//! This crate provides:
//! - [`BoardQuery`] - the occupancy surface the rules are written against
//! - [`Board`] - a mailbox reference board with a memoised check predicate
//! - [`reachable_cells`] - per-kind movement rules, ignoring self-check
//! - [`valid_cells`] - the legal subset, excluding moves that expose the king
//! - [`Evaluator`] - static per-piece scoring with an optional threat bonus
//!
//! # Architecture
//!
//! Rules dispatch on [`PieceKind`](chess_core::PieceKind) with an exhaustive
//! `match`. The legality filter tries each candidate on the board itself
//! through a [`SimulatedMove`] guard that restores the board when dropped,
//! so the board is unchanged after every query. Queries take `&mut` for the
//! duration of the probe, which rules out concurrent use of one board.
//!
//! Castling, en passant and promotion are not modelled.
//!
//! # Example
//!
//! ```
//! use chess_core::{Cell, Color};
//! use chess_rules::{valid_cells, Board, BoardQuery, EvalConfig, Evaluator};
//!
//! let mut board = Board::standard();
//! let knight = board.placed(Cell::new(0, 1)).unwrap();
//! let moves = valid_cells(&mut board, knight).unwrap();
//! assert_eq!(moves.len(), 2);
//!
//! let evaluator = Evaluator::new(EvalConfig::default());
//! assert_eq!(evaluator.evaluate(&mut board, knight).unwrap(), 300.0);
//! assert!(!board.is_king_check_cached(Color::White));
//! ```

mod board;
pub mod config;
mod error;
mod eval;
pub mod legality;
pub mod movegen;
mod query;
mod zobrist;

pub use board::Board;
pub use config::{ConfigError, EvalConfig, RulesConfig};
pub use error::{BoardError, RulesError};
pub use eval::Evaluator;
pub use legality::{has_legal_move, legal_moves, valid_cells, SimulatedMove};
pub use movegen::{attacked_cells, is_cell_attacked, is_king_attacked, reachable_cells};
pub use query::{BoardQuery, PlacedPiece};
