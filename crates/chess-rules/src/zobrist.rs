//! Zobrist hashing of board occupancy.
//!
//! Every (kind, color, cell) triple gets a fixed random key; a board's hash
//! is the XOR of the keys of its occupied cells. Placing and removing a
//! piece toggles one key, so a simulated move followed by its restoration
//! returns the hash to its original value.

use chess_core::{Cell, Color, Piece};

/// Zobrist hash keys.
///
/// Generated using a fixed seed for reproducibility.
pub struct ZobristKeys {
    /// Keys for pieces: [kind][color][cell]
    pub pieces: [[[u64; 64]; 2]; 6],
    /// Keys mixed into a board hash to tell apart check queries per color.
    pub check_query: [u64; 2],
}

impl ZobristKeys {
    /// Initializes Zobrist keys using a simple PRNG.
    pub const fn new() -> Self {
        // xorshift64, usable in const context
        const fn next_random(state: u64) -> (u64, u64) {
            let mut x = state;
            x ^= x << 13;
            x ^= x >> 7;
            x ^= x << 17;
            (x, x)
        }

        let mut state = 0x9E3779B97F4A7C15u64;
        let mut pieces = [[[0u64; 64]; 2]; 6];
        let mut check_query = [0u64; 2];

        let mut kind = 0;
        while kind < 6 {
            let mut color = 0;
            while color < 2 {
                let mut cell = 0;
                while cell < 64 {
                    let (new_state, value) = next_random(state);
                    state = new_state;
                    pieces[kind][color][cell] = value;
                    cell += 1;
                }
                color += 1;
            }
            kind += 1;
        }

        let mut i = 0;
        while i < 2 {
            let (new_state, value) = next_random(state);
            state = new_state;
            check_query[i] = value;
            i += 1;
        }

        ZobristKeys {
            pieces,
            check_query,
        }
    }

    /// Returns the key for a piece on a cell, or 0 for an off-board cell.
    #[inline]
    pub const fn piece_key(&self, piece: Piece, cell: Cell) -> u64 {
        match cell.index() {
            Some(i) => self.pieces[piece.kind().index()][piece.color().index()][i],
            None => 0,
        }
    }

    /// Returns the key distinguishing check queries for `color`.
    #[inline]
    pub const fn check_query_key(&self, color: Color) -> u64 {
        self.check_query[color.index()]
    }
}

/// Global Zobrist keys (initialized at compile time).
pub static ZOBRIST: ZobristKeys = ZobristKeys::new();
