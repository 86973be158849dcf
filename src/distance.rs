//! Per-square distances to the board edge along the eight ray directions.
//!
//! A sliding-piece attack generator walks rays square by square and needs
//! to know where to stop; this table answers that with one lookup instead
//! of a bounds check per step. It is computed once and never mutated, so
//! the engine can share a single instance across threads freely.

use std::fmt::Write;

use itertools::Itertools;
use strum::IntoEnumIterator;

use crate::core::{Direction, Square, BOARD_SIZE, BOARD_WIDTH};

/// The number of squares strictly between each square and the board edge,
/// for all 64 squares and 8 ray directions. Row order follows
/// [`Direction`] discriminants: N, E, S, W, NE, SE, SW, NW.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeDistances {
    table: [[u8; 8]; BOARD_SIZE as usize],
}

impl EdgeDistances {
    /// Computes the full table. Each square's row is independent of the
    /// others: the orthogonal distances fall out of the (file, rank)
    /// projection and the diagonals are pairwise minima of those.
    #[must_use]
    pub fn build() -> Self {
        let mut table = [[0u8; 8]; BOARD_SIZE as usize];
        for square in Square::iter() {
            let file = square.file() as u8;
            let rank = square.rank() as u8;

            let north = BOARD_WIDTH - 1 - rank;
            let south = rank;
            let west = file;
            let east = BOARD_WIDTH - 1 - file;

            table[square as usize] = [
                north,
                east,
                south,
                west,
                north.min(east),
                south.min(east),
                south.min(west),
                north.min(west),
            ];
        }
        Self { table }
    }

    /// Looks up the distance from `square` to the edge along `direction`.
    /// Raw indices are validated by the `TryFrom<u8>` conversions
    /// producing the typed arguments, so the lookup itself cannot go out
    /// of bounds.
    #[must_use]
    pub const fn distance(&self, square: Square, direction: Direction) -> u8 {
        self.table[square as usize][direction as usize]
    }

    /// Renders the table as a nested array literal, 64 rows of 8 in
    /// row-major square order, ready for inclusion in generated source.
    /// The statement wrapping (constant name, type, terminator) belongs to
    /// the emitting tool.
    ///
    /// # Errors
    ///
    /// Propagates formatting failures; writing into a string does not
    /// produce them in practice.
    pub fn serialize(&self) -> anyhow::Result<String> {
        let mut result = String::new();
        result.push_str("[\n");
        for row in &self.table {
            writeln!(result, "    [{}],", row.iter().join(", "))?;
        }
        result.push(']');
        Ok(result)
    }
}
