//! Thin bitboard wrapper for the ASCII visualizer. The engine proper has
//! its own bitboard machinery; the tools only need to take a raw 64-bit
//! integer apart and draw it.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};

use strum::IntoEnumIterator;

use crate::core::{File, Rank, Square};

const FRAME: &str = "  +---+---+---+---+---+---+---+---+";
const FILE_LABELS: &str = "    a   b   c   d   e   f   g   h";

/// A set of squares as a 64-bit integer. Mirroring [`Square`] semantics,
/// the least significant bit corresponds to A1 and the most significant
/// bit to H8.
#[derive(Copy, Clone, PartialEq, Eq)]
pub struct Bitboard {
    bits: u64,
}

impl Bitboard {
    /// Constructs a bitboard from pre-calculated bits.
    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    /// Constructs a bitboard representing an empty set of squares.
    #[must_use]
    pub const fn empty() -> Self {
        Self::from_bits(0)
    }

    /// Returns raw bits.
    #[must_use]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    #[must_use]
    #[allow(missing_docs)]
    pub fn from_squares(squares: &[Square]) -> Self {
        let mut result = Self::empty();
        for square in squares {
            result |= Self::from(*square);
        }
        result
    }

    /// Returns true if this bitboard contains the given square.
    #[must_use]
    pub const fn is_set(self, square: Square) -> bool {
        (self.bits & (1u64 << square as u8)) != 0
    }

    /// One framed row of the drawing, e.g. `5 | X |   | ... |`. Exposed
    /// separately so the visualizer can put several boards side by side.
    #[must_use]
    pub fn rank_line(self, rank: Rank) -> String {
        let mut line = format!("{rank} |");
        for file in File::iter() {
            let mark = if self.is_set(Square::new(file, rank)) {
                'X'
            } else {
                ' '
            };
            line.push(' ');
            line.push(mark);
            line.push_str(" |");
        }
        line
    }
}

impl From<Square> for Bitboard {
    fn from(square: Square) -> Self {
        Self::from_bits(1u64 << square as u8)
    }
}

impl BitOr for Bitboard {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        Self::from_bits(self.bits | rhs.bits)
    }
}

impl BitOrAssign for Bitboard {
    fn bitor_assign(&mut self, rhs: Self) {
        self.bits |= rhs.bits;
    }
}

impl fmt::Display for Bitboard {
    /// Draws the framed board, rank 8 on top, `X` for set squares:
    ///
    /// ```text
    ///   +---+---+---+---+---+---+---+---+
    /// 8 |   |   |   |   |   |   |   |   |
    ///   +---+---+---+---+---+---+---+---+
    ///   ...
    ///     a   b   c   d   e   f   g   h
    /// ```
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{FRAME}")?;
        for rank in Rank::iter().rev() {
            writeln!(f, "{}", self.rank_line(rank))?;
            writeln!(f, "{FRAME}")?;
        }
        write!(f, "{FILE_LABELS}")
    }
}

impl fmt::Debug for Bitboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Bitboard({:#018x})", self.bits)
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn basics() {
        assert_eq!(Bitboard::from(Square::A1).bits(), 1);
        assert_eq!(Bitboard::from(Square::B1).bits(), 2);
        assert_eq!(Bitboard::from(Square::H8).bits(), 1u64 << 63);
        assert_eq!(
            Bitboard::from_squares(&[Square::A1, Square::B1]).bits(),
            0b11
        );
        assert!(Bitboard::from_bits(1 << 28).is_set(Square::E4));
        assert!(!Bitboard::empty().is_set(Square::E4));
    }

    #[test]
    fn empty_board_dump() {
        assert_eq!(
            Bitboard::empty().to_string(),
            "  +---+---+---+---+---+---+---+---+\n\
             8 |   |   |   |   |   |   |   |   |\n\
            \x20 +---+---+---+---+---+---+---+---+\n\
             7 |   |   |   |   |   |   |   |   |\n\
            \x20 +---+---+---+---+---+---+---+---+\n\
             6 |   |   |   |   |   |   |   |   |\n\
            \x20 +---+---+---+---+---+---+---+---+\n\
             5 |   |   |   |   |   |   |   |   |\n\
            \x20 +---+---+---+---+---+---+---+---+\n\
             4 |   |   |   |   |   |   |   |   |\n\
            \x20 +---+---+---+---+---+---+---+---+\n\
             3 |   |   |   |   |   |   |   |   |\n\
            \x20 +---+---+---+---+---+---+---+---+\n\
             2 |   |   |   |   |   |   |   |   |\n\
            \x20 +---+---+---+---+---+---+---+---+\n\
             1 |   |   |   |   |   |   |   |   |\n\
            \x20 +---+---+---+---+---+---+---+---+\n\
            \x20   a   b   c   d   e   f   g   h"
        );
    }

    #[test]
    fn corners_dump() {
        let corners = Bitboard::from_squares(&[Square::A1, Square::H1, Square::A8, Square::H8]);
        assert_eq!(
            corners.to_string(),
            "  +---+---+---+---+---+---+---+---+\n\
             8 | X |   |   |   |   |   |   | X |\n\
            \x20 +---+---+---+---+---+---+---+---+\n\
             7 |   |   |   |   |   |   |   |   |\n\
            \x20 +---+---+---+---+---+---+---+---+\n\
             6 |   |   |   |   |   |   |   |   |\n\
            \x20 +---+---+---+---+---+---+---+---+\n\
             5 |   |   |   |   |   |   |   |   |\n\
            \x20 +---+---+---+---+---+---+---+---+\n\
             4 |   |   |   |   |   |   |   |   |\n\
            \x20 +---+---+---+---+---+---+---+---+\n\
             3 |   |   |   |   |   |   |   |   |\n\
            \x20 +---+---+---+---+---+---+---+---+\n\
             2 |   |   |   |   |   |   |   |   |\n\
            \x20 +---+---+---+---+---+---+---+---+\n\
             1 | X |   |   |   |   |   |   | X |\n\
            \x20 +---+---+---+---+---+---+---+---+\n\
            \x20   a   b   c   d   e   f   g   h"
        );
    }

    #[test]
    fn rank_line_marks() {
        let board = Bitboard::from_squares(&[Square::E4, Square::H4]);
        assert_eq!(board.rank_line(Rank::Four), "4 |   |   |   |   | X |   |   | X |");
        assert_eq!(board.rank_line(Rank::Five), "5 |   |   |   |   |   |   |   |   |");
    }
}
