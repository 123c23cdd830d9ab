//! Core types for the rules engine.
//!
//! This crate provides the fundamental value types shared by the rules:
//! - [`Piece`], [`PieceKind`] and [`Color`] for piece representation
//! - [`Cell`] and [`Direction`] for board coordinates and move patterns
//! - [`CellSet`] for the sets of target cells the rules produce

mod cell;
mod cell_set;
mod color;
mod piece;

pub use cell::{Cell, Direction, BOARD_SIZE};
pub use cell_set::{CellSet, CellSetIter};
pub use color::Color;
pub use piece::{Piece, PieceKind};
