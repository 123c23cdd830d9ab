//! Legal move filtering.
//!
//! A reachable cell is legal when moving there does not leave the mover's
//! own king in check. Each candidate is tried on the board itself through a
//! [`SimulatedMove`] guard, which puts both the mover and any captured
//! piece back when it goes out of scope.

use crate::movegen::reachable_cells;
use crate::{BoardQuery, PlacedPiece, RulesError};
use chess_core::{Cell, CellSet, Color, Piece};

/// A move applied to a board for the duration of a probe.
///
/// Dropping the guard restores the origin and target cells to their prior
/// occupants, on every exit path including unwinding.
pub struct SimulatedMove<'a, B: BoardQuery + ?Sized> {
    board: &'a mut B,
    piece: Piece,
    from: Cell,
    to: Cell,
    captured: Option<Piece>,
}

impl<'a, B: BoardQuery + ?Sized> SimulatedMove<'a, B> {
    /// Moves `placed` onto `to`, remembering whatever stood there.
    ///
    /// On error the board is left as it was.
    pub fn apply(board: &'a mut B, placed: PlacedPiece, to: Cell) -> Result<Self, RulesError> {
        let captured = board.set_cell(to, Some(placed.piece))?;
        if let Err(err) = board.set_cell(placed.cell, None) {
            // `to` was written a moment ago, so writing it again succeeds.
            let _ = board.set_cell(to, captured);
            return Err(err.into());
        }
        Ok(SimulatedMove {
            board,
            piece: placed.piece,
            from: placed.cell,
            to,
            captured,
        })
    }

    /// Returns the board in its simulated state.
    pub fn board(&self) -> &B {
        &*self.board
    }

    /// Returns the piece that stood on the target cell, if any.
    pub fn captured(&self) -> Option<Piece> {
        self.captured
    }

    /// Returns true if the mover's king is not in check after the move.
    pub fn keeps_king_safe(&self) -> bool {
        !self.board.is_king_check_cached(self.piece.color())
    }
}

impl<B: BoardQuery + ?Sized> Drop for SimulatedMove<'_, B> {
    fn drop(&mut self) {
        let restored = self
            .board
            .set_cell(self.from, Some(self.piece))
            .and_then(|_| self.board.set_cell(self.to, self.captured));
        if let Err(err) = restored {
            tracing::error!(%err, from = %self.from, to = %self.to, "failed to restore simulated move");
        }
    }
}

/// Checks that the board holds `placed.piece` on `placed.cell`.
fn ensure_consistent<B: BoardQuery + ?Sized>(
    board: &B,
    placed: PlacedPiece,
) -> Result<(), RulesError> {
    let found = board.get_cell(placed.cell);
    if found == Some(placed.piece) {
        Ok(())
    } else {
        tracing::warn!(piece = %placed.piece, cell = %placed.cell, ?found, "piece is not where the caller says");
        Err(RulesError::InconsistentBoard {
            cell: placed.cell,
            expected: placed.piece,
            found,
        })
    }
}

/// Returns the cells `placed` may legally move to.
///
/// Every reachable cell is tried on the board and kept if the mover's king
/// is safe afterwards. The board is back in its original state when this
/// returns, whether it succeeds or fails.
///
/// # Errors
///
/// Returns [`RulesError::InconsistentBoard`] if the board does not hold
/// `placed.piece` on `placed.cell`, or [`RulesError::Board`] if the board
/// refuses a simulated placement.
pub fn valid_cells<B: BoardQuery + ?Sized>(
    board: &mut B,
    placed: PlacedPiece,
) -> Result<CellSet, RulesError> {
    ensure_consistent(board, placed)?;

    let reachable = reachable_cells(board, placed);
    let mut valid = CellSet::EMPTY;

    for target in reachable {
        let probe = SimulatedMove::apply(board, placed, target)?;
        if probe.keeps_king_safe() {
            valid.insert(target);
        } else {
            tracing::trace!(piece = %placed, %target, "rejected: leaves king in check");
        }
    }

    tracing::debug!(
        piece = %placed,
        reachable = reachable.len(),
        valid = valid.len(),
        "filtered moves"
    );
    Ok(valid)
}

/// Returns every piece of `color` that has at least one legal move, with
/// its legal target cells, in ascending origin order.
pub fn legal_moves<B: BoardQuery + ?Sized>(
    board: &mut B,
    color: Color,
) -> Result<Vec<(PlacedPiece, CellSet)>, RulesError> {
    let mut moves = Vec::new();
    for placed in board.pieces(color) {
        let targets = valid_cells(board, placed)?;
        if !targets.is_empty() {
            moves.push((placed, targets));
        }
    }
    Ok(moves)
}

/// Returns true if `color` has at least one legal move.
pub fn has_legal_move<B: BoardQuery + ?Sized>(
    board: &mut B,
    color: Color,
) -> Result<bool, RulesError> {
    for placed in board.pieces(color) {
        if !valid_cells(board, placed)?.is_empty() {
            return Ok(true);
        }
    }
    Ok(false)
}
