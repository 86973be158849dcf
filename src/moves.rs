//! Packed move representation and its decoding into human-readable form.
//!
//! The engine exchanges moves as a single integer with three bit-fields
//! (destination, origin, special-move flags). The layout resembles a
//! common [Move Encoding] technique. Only decoding lives here: moves are
//! constructed by the engine's move generator, the tools merely take them
//! apart for debugging.
//!
//! [Move Encoding]: https://www.chessprogramming.org/Encoding_Moves

use std::fmt;
use std::mem;

use anyhow::bail;
use itertools::Itertools;

use crate::core::Square;

const SQUARE_MASK: u32 = 0b11_1111;
const FLAG_MASK: u32 = 0xFF;
const FROM_SHIFT: u32 = 6;
const FLAG_SHIFT: u32 = 12;

bitflags::bitflags! {
    /// Special-move flag codes, subset-matched: a property is considered
    /// present iff every bit of its code is set in the flag byte. Two of
    /// the codes are unions covering a family of sibling codes, so e.g. a
    /// kingside-castle flag also matches [`MoveFlags::CASTLING`].
    ///
    /// The byte values are the engine's wire contract and must stay
    /// byte-identical to its encoder.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct MoveFlags: u8 {
        /// En passant capture of a pawn that just advanced two squares.
        /// Regular captures are not flagged: they can be recovered from
        /// the board, en passant cannot.
        const EN_CAPTURE = 0b0000_0001;
        /// Pawn advancement by 2 squares from its original rank.
        const DOUBLE_PUSH = 0b0000_0010;
        /// Long castle or O-O-O.
        const Q_CASTLE = 0b0000_0100;
        /// Short castle or O-O.
        const K_CASTLE = 0b0000_1000;
        /// Union code matching a castle of either side.
        const CASTLING = Self::Q_CASTLE.bits() | Self::K_CASTLE.bits();
        /// Pawn promotion to a queen.
        const TO_QUEEN = 0b0001_0000;
        /// Pawn promotion to a knight.
        const TO_KNIGHT = 0b0010_0000;
        /// Pawn promotion to a rook.
        const TO_ROOK = 0b0100_0000;
        /// Pawn promotion to a bishop.
        const TO_BISHOP = 0b1000_0000;
        /// Union code matching a promotion to any target.
        const PROMOTION = Self::TO_QUEEN.bits()
            | Self::TO_KNIGHT.bits()
            | Self::TO_ROOK.bits()
            | Self::TO_BISHOP.bits();
    }
}

/// The named properties in their table order. Matching enumerates this
/// table, so the decoder output order is stable.
const PROPERTIES: [(MoveFlags, &str); 10] = [
    (MoveFlags::EN_CAPTURE, "EnCapture"),
    (MoveFlags::DOUBLE_PUSH, "DoublePush"),
    (MoveFlags::CASTLING, "Castling"),
    (MoveFlags::Q_CASTLE, "QCastle"),
    (MoveFlags::K_CASTLE, "KCastle"),
    (MoveFlags::PROMOTION, "Promotion"),
    (MoveFlags::TO_QUEEN, "ToQueen"),
    (MoveFlags::TO_KNIGHT, "ToKnight"),
    (MoveFlags::TO_ROOK, "ToRook"),
    (MoveFlags::TO_BISHOP, "ToBishop"),
];

/// Returns the names of all properties whose code is a bit-subset of the
/// given flag byte, in table order. Empty when nothing matches.
///
/// A malformed byte can match sibling properties that a well-formed
/// encoder would never combine (e.g. `0x05` matches both `EnCapture` and
/// `QCastle`); the decoder reports what the bits say and leaves validation
/// to [`MoveKind`].
#[must_use]
pub fn matched_properties(flags: u8) -> Vec<&'static str> {
    let flags = MoveFlags::from_bits_retain(flags);
    PROPERTIES
        .iter()
        .filter(|(code, _)| flags.contains(*code))
        .map(|(_, name)| *name)
        .collect()
}

/// A move packed into a single integer, low bits first:
///
/// | bits  | width | field | meaning                  |
/// | ----- | ----- | ----- | ------------------------ |
/// | 0-5   | 6     | to    | destination square, 0-63 |
/// | 6-11  | 6     | from  | origin square, 0-63      |
/// | 12-19 | 8     | flags | special-move flag byte   |
///
/// Only the low 20 bits are used; the wider integer leaves headroom the
/// engine reserves for future fields. Nothing forces `from != to`: the
/// engine may encode null moves and decoding stays total.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PackedMove {
    bits: u32,
}

impl PackedMove {
    /// Packs origin, destination and the flag byte. Taking [`Square`]s
    /// makes field overflow unrepresentable; raw indices enter through
    /// `Square::try_from` and fail there.
    #[must_use]
    pub const fn encode(from: Square, to: Square, flags: u8) -> Self {
        Self {
            bits: ((flags as u32) << FLAG_SHIFT) | ((from as u32) << FROM_SHIFT) | to as u32,
        }
    }

    /// Wraps a raw integer as received from the engine. Total: any input
    /// is accepted and the field accessors mask out what they need.
    #[must_use]
    pub const fn from_bits(bits: u32) -> Self {
        Self { bits }
    }

    /// Returns raw bits.
    #[must_use]
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Origin square.
    #[must_use]
    pub const fn from(self) -> Square {
        // Masking to 6 bits guarantees a value in 0..64, so the direct
        // conversion is safe.
        unsafe { mem::transmute(((self.bits >> FROM_SHIFT) & SQUARE_MASK) as u8) }
    }

    /// Destination square.
    #[must_use]
    pub const fn to(self) -> Square {
        unsafe { mem::transmute((self.bits & SQUARE_MASK) as u8) }
    }

    /// The special-move flag byte.
    #[must_use]
    pub const fn flags(self) -> u8 {
        ((self.bits >> FLAG_SHIFT) & FLAG_MASK) as u8
    }

    /// The (from, to) part of the move, used by butterfly-indexed history
    /// tables.
    #[must_use]
    pub const fn butterfly_index(self) -> u16 {
        (self.bits & 0x0FFF) as u16
    }

    /// Interprets the flag byte as a single move kind.
    ///
    /// # Errors
    ///
    /// Fails when the byte is not exactly one legal kind, see
    /// [`MoveKind::try_from`].
    pub fn kind(self) -> anyhow::Result<MoveKind> {
        MoveKind::try_from(self.flags())
    }
}

impl fmt::Display for PackedMove {
    /// Renders the move the way the debugging tools print it: algebraic
    /// coordinates, then (when any flag property matched) a second line
    /// with the comma-joined property names.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from(), self.to())?;
        let matched = matched_properties(self.flags());
        if !matched.is_empty() {
            write!(f, "\n{}", matched.iter().join(", "))?;
        }
        Ok(())
    }
}

/// A pawn can be promoted to a queen, knight, rook or a bishop.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Promotion {
    Queen,
    Knight,
    Rook,
    Bishop,
}

/// The move kinds the flag byte can legitimately encode, one variant per
/// kind. Downstream logic should consume this instead of raw subset
/// matches: the overlapping codes exist only at the wire boundary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveKind {
    /// No special-move flag set.
    Quiet,
    /// Pawn advancement by 2 squares from its original rank.
    DoublePush,
    /// En passant capture.
    EnPassantCapture,
    /// Long castle or O-O-O.
    QueensideCastle,
    /// Short castle or O-O.
    KingsideCastle,
    /// Pawn promotion to the given target.
    Promotion(Promotion),
}

impl MoveKind {
    /// The flag byte encoding this kind.
    #[must_use]
    pub const fn flags(self) -> u8 {
        match self {
            Self::Quiet => 0,
            Self::EnPassantCapture => MoveFlags::EN_CAPTURE.bits(),
            Self::DoublePush => MoveFlags::DOUBLE_PUSH.bits(),
            Self::QueensideCastle => MoveFlags::Q_CASTLE.bits(),
            Self::KingsideCastle => MoveFlags::K_CASTLE.bits(),
            Self::Promotion(Promotion::Queen) => MoveFlags::TO_QUEEN.bits(),
            Self::Promotion(Promotion::Knight) => MoveFlags::TO_KNIGHT.bits(),
            Self::Promotion(Promotion::Rook) => MoveFlags::TO_ROOK.bits(),
            Self::Promotion(Promotion::Bishop) => MoveFlags::TO_BISHOP.bits(),
        }
    }
}

impl TryFrom<u8> for MoveKind {
    type Error = anyhow::Error;

    /// Validates the flag byte into exactly one kind.
    ///
    /// # Errors
    ///
    /// Fails for any byte that combines sibling codes (e.g. `0x05`, both
    /// castle sides, several promotion targets) or sets no recognizable
    /// pattern. A well-formed encoder never produces such bytes; a
    /// malformed one should be caught here, not propagated.
    fn try_from(flags: u8) -> anyhow::Result<Self> {
        match flags {
            0x00 => Ok(Self::Quiet),
            0x01 => Ok(Self::EnPassantCapture),
            0x02 => Ok(Self::DoublePush),
            0x04 => Ok(Self::QueensideCastle),
            0x08 => Ok(Self::KingsideCastle),
            0x10 => Ok(Self::Promotion(Promotion::Queen)),
            0x20 => Ok(Self::Promotion(Promotion::Knight)),
            0x40 => Ok(Self::Promotion(Promotion::Rook)),
            0x80 => Ok(Self::Promotion(Promotion::Bishop)),
            _ => bail!("move flags do not encode a single move kind: {flags:#04x}"),
        }
    }
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn round_trip() {
        for from in Square::iter() {
            for to in Square::iter() {
                for flags in [0x00u8, 0x01, 0x0C, 0x10, 0xF0, 0xFF] {
                    let packed = PackedMove::encode(from, to, flags);
                    assert_eq!(packed.from(), from);
                    assert_eq!(packed.to(), to);
                    assert_eq!(packed.flags(), flags);
                }
            }
        }
        for flags in u8::MIN..=u8::MAX {
            let packed = PackedMove::encode(Square::E2, Square::E4, flags);
            assert_eq!((packed.from(), packed.to(), packed.flags()), (Square::E2, Square::E4, flags));
        }
    }

    #[test]
    fn bit_layout() {
        let packed = PackedMove::encode(Square::E2, Square::E4, 0x02);
        // to = 28, from = 12 << 6, flags = 0x02 << 12.
        assert_eq!(packed.bits(), 28 | (12 << 6) | (0x02 << 12));
        assert_eq!(packed.butterfly_index(), 28 | (12 << 6));
        assert_eq!(PackedMove::from_bits(packed.bits()), packed);
    }

    #[test]
    fn decoding_is_total() {
        // Null move with garbage in the unused high bits.
        let packed = PackedMove::from_bits(0xFFF0_0000);
        assert_eq!(packed.from(), Square::A1);
        assert_eq!(packed.to(), Square::A1);
        assert_eq!(packed.flags(), 0);
    }

    #[test]
    fn castle_properties() {
        assert_eq!(matched_properties(0x04), vec!["QCastle"]);
        assert_eq!(matched_properties(0x08), vec!["KCastle"]);
        assert_eq!(matched_properties(0x0C), vec!["Castling", "QCastle", "KCastle"]);
    }

    #[test]
    fn promotion_properties() {
        assert_eq!(matched_properties(0x10), vec!["ToQueen"]);
        assert_eq!(
            matched_properties(0xF0),
            vec!["Promotion", "ToQueen", "ToKnight", "ToRook", "ToBishop"]
        );
    }

    #[test]
    fn no_properties() {
        assert_eq!(matched_properties(0x00), Vec::<&str>::new());
    }

    // The subset matcher does not validate: sibling codes can both match a
    // malformed byte. MoveKind is the validation boundary.
    #[test]
    fn malformed_byte_matches_siblings() {
        assert_eq!(matched_properties(0x05), vec!["EnCapture", "QCastle"]);
        assert!(MoveKind::try_from(0x05).is_err());
    }

    #[test]
    fn describe() {
        assert_eq!(
            PackedMove::encode(Square::E2, Square::E4, 0).to_string(),
            "e2 -> e4"
        );
        assert_eq!(
            PackedMove::encode(Square::E2, Square::E4, 0x02).to_string(),
            "e2 -> e4\nDoublePush"
        );
        assert_eq!(
            PackedMove::encode(Square::E1, Square::G1, 0x08).to_string(),
            "e1 -> g1\nKCastle"
        );
        assert_eq!(
            PackedMove::encode(Square::A7, Square::A8, 0x10).to_string(),
            "a7 -> a8\nToQueen"
        );
    }

    #[test]
    fn kind_round_trip() {
        let kinds = [
            MoveKind::Quiet,
            MoveKind::DoublePush,
            MoveKind::EnPassantCapture,
            MoveKind::QueensideCastle,
            MoveKind::KingsideCastle,
            MoveKind::Promotion(Promotion::Queen),
            MoveKind::Promotion(Promotion::Knight),
            MoveKind::Promotion(Promotion::Rook),
            MoveKind::Promotion(Promotion::Bishop),
        ];
        for kind in kinds {
            assert_eq!(MoveKind::try_from(kind.flags()).unwrap(), kind);
        }
    }

    #[test]
    fn kind_rejects_ambiguous_bytes() {
        for flags in [0x05u8, 0x0C, 0x30, 0xF0, 0xFF, 0x03] {
            assert!(MoveKind::try_from(flags).is_err(), "accepted {flags:#04x}");
        }
        assert!(PackedMove::encode(Square::E1, Square::G1, 0x0C).kind().is_err());
        assert_eq!(
            PackedMove::encode(Square::E1, Square::G1, 0x08).kind().unwrap(),
            MoveKind::KingsideCastle
        );
    }
}
