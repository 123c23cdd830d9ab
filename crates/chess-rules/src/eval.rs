//! Static per-piece evaluation.
//!
//! Scores are color-independent: a white and a black piece in mirrored
//! situations score the same. Summing with signs across the board is left
//! to the caller.

use crate::legality::valid_cells;
use crate::{BoardQuery, EvalConfig, PlacedPiece, RulesError};
use chess_core::{Color, PieceKind};

/// Scores single pieces according to an [`EvalConfig`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    pub fn new(config: EvalConfig) -> Self {
        Evaluator { config }
    }

    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Returns the material value of a kind.
    #[inline]
    pub fn base_value(kind: PieceKind) -> f64 {
        f64::from(kind.base_value())
    }

    /// Returns the score of `placed`.
    ///
    /// With the threat bonus off this is the base value of its kind. With it
    /// on, every opposing piece standing on one of its legal target cells adds
    /// a fraction of that piece's value, using the smaller king scale for
    /// kings.
    ///
    /// The board is only touched in threat mode, and is restored before this
    /// returns.
    pub fn evaluate<B: BoardQuery + ?Sized>(
        &self,
        board: &mut B,
        placed: PlacedPiece,
    ) -> Result<f64, RulesError> {
        let mut score = Self::base_value(placed.kind());
        if self.config.threat_bonus {
            score += self.threat_bonus(board, placed)?;
        }
        Ok(score)
    }

    fn threat_bonus<B: BoardQuery + ?Sized>(
        &self,
        board: &mut B,
        placed: PlacedPiece,
    ) -> Result<f64, RulesError> {
        let mut bonus = 0.0;
        for cell in valid_cells(board, placed)? {
            if let Some(target) = board.get_cell(cell) {
                let scale = match target.kind() {
                    PieceKind::King => self.config.king_threat_scale,
                    _ => self.config.threat_scale,
                };
                bonus += Self::base_value(target.kind()) * scale;
            }
        }
        Ok(bonus)
    }

    /// Returns the summed score of every piece of `color`.
    pub fn material<B: BoardQuery + ?Sized>(
        &self,
        board: &mut B,
        color: Color,
    ) -> Result<f64, RulesError> {
        let mut total = 0.0;
        for placed in board.pieces(color) {
            total += self.evaluate(board, placed)?;
        }
        Ok(total)
    }
}
