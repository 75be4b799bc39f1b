//! Core chess types - colours, piece kinds and board coordinates
//!
//! # Coordinate System
//!
//! A [`Square`] is a `(row, col)` pair. Row 0 is Black's back rank and row 7
//! is White's, so White pawns start on row 6 and advance towards row 0.
//! Columns run left to right from the a-file (0) to the h-file (7).
//!
//! ```text
//!        col 0 1 2 3 4 5 6 7
//! row 0      r n b q k b n r     rank 8
//! row 1      p p p p p p p p     rank 7
//!  ...
//! row 6      P P P P P P P P     rank 2
//! row 7      R N B Q K B N R     rank 1
//! ```
//!
//! Algebraic notation maps onto this grid as `row = 8 - rank`, so `"e2"` is
//! `Square { row: 6, col: 4 }`.

use std::fmt;
use std::str::FromStr;

use crate::error::{ChessRulesError, ChessRulesResult};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side to move / owner of a piece
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceColor {
    #[default]
    White,
    Black,
}

impl PieceColor {
    /// The other side
    pub fn opponent(self) -> Self {
        match self {
            PieceColor::White => PieceColor::Black,
            PieceColor::Black => PieceColor::White,
        }
    }

    /// Forward row direction for pawns of this colour
    pub(crate) fn pawn_direction(self) -> i8 {
        match self {
            PieceColor::White => -1,
            PieceColor::Black => 1,
        }
    }

    /// Row the pawns of this colour start on
    pub(crate) fn pawn_start_row(self) -> u8 {
        match self {
            PieceColor::White => 6,
            PieceColor::Black => 1,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            PieceColor::White => "White",
            PieceColor::Black => "Black",
        }
    }
}

impl fmt::Display for PieceColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceType {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceType {
    /// Lower-case FEN letter
    pub fn fen_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Rook => 'r',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }
}

/// A coloured piece. Empty squares are `None` on the board, never a `Piece`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece {
    pub color: PieceColor,
    pub piece_type: PieceType,
}

impl Piece {
    pub const fn new(color: PieceColor, piece_type: PieceType) -> Self {
        Self { color, piece_type }
    }

    pub fn belongs_to(&self, color: PieceColor) -> bool {
        self.color == color
    }

    /// FEN letter: upper-case for White, lower-case for Black
    pub fn fen_char(&self) -> char {
        let c = self.piece_type.fen_char();
        match self.color {
            PieceColor::White => c.to_ascii_uppercase(),
            PieceColor::Black => c,
        }
    }
}

/// A board coordinate, both components in 0..=7
///
/// Deserialization goes through [`Square::new`], so out-of-range JSON is
/// rejected instead of producing a square that cannot index a board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "SquareRepr"))]
pub struct Square {
    row: u8,
    col: u8,
}

/// Unchecked wire form of a [`Square`]
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct SquareRepr {
    row: u8,
    col: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<SquareRepr> for Square {
    type Error = ChessRulesError;

    fn try_from(repr: SquareRepr) -> Result<Self, Self::Error> {
        Square::new(repr.row, repr.col)
    }
}

impl Square {
    pub fn new(row: u8, col: u8) -> ChessRulesResult<Self> {
        if row > 7 || col > 7 {
            return Err(ChessRulesError::InvalidSquare { row, col });
        }
        Ok(Self { row, col })
    }

    /// Linear index in row-major order (row 0, col 0 is index 0)
    pub fn from_index(index: usize) -> ChessRulesResult<Self> {
        if index >= 64 {
            return Err(ChessRulesError::InvalidIndex { index });
        }
        Ok(Self {
            row: (index / 8) as u8,
            col: (index % 8) as u8,
        })
    }

    #[inline]
    pub fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub fn col(self) -> u8 {
        self.col
    }

    #[inline]
    pub fn index(self) -> usize {
        self.row as usize * 8 + self.col as usize
    }

    /// Step by a signed delta, `None` if the result leaves the board
    pub fn offset(self, drow: i8, dcol: i8) -> Option<Self> {
        let row = (self.row as i8).checked_add(drow)?;
        let col = (self.col as i8).checked_add(dcol)?;
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// All 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(|i| Square { row: i / 8, col: i % 8 })
    }

    /// True for the light squares of a standard board (a8 and h1 are light)
    pub fn is_light(self) -> bool {
        (self.row + self.col) % 2 == 0
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = 8 - self.row;
        write!(f, "{file}{rank}")
    }
}

impl FromStr for Square {
    type Err = ChessRulesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ChessRulesError::InvalidAlgebraic { input: s.to_string() };
        let bytes = s.trim().as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }
        let file = bytes[0].to_ascii_lowercase();
        let rank = bytes[1];
        if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
            return Err(invalid());
        }
        Ok(Self {
            row: 8 - (rank - b'0'),
            col: file - b'a',
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_square_bounds() {
        assert!(Square::new(7, 7).is_ok());
        assert_eq!(
            Square::new(8, 0),
            Err(ChessRulesError::InvalidSquare { row: 8, col: 0 })
        );
        assert!(Square::from_index(64).is_err());
    }

    #[test]
    fn test_algebraic_mapping() {
        let e2: Square = "e2".parse().unwrap();
        assert_eq!((e2.row(), e2.col()), (6, 4));

        let a8: Square = "a8".parse().unwrap();
        assert_eq!((a8.row(), a8.col()), (0, 0));
        assert_eq!(a8.to_string(), "a8");

        assert!("i1".parse::<Square>().is_err());
        assert!("e9".parse::<Square>().is_err());
        assert!("e22".parse::<Square>().is_err());
    }

    #[test]
    fn test_index_round_trip_matches_row_major_order() {
        let sq = Square::new(3, 5).unwrap();
        assert_eq!(sq.index(), 29);
        assert_eq!(Square::from_index(29).unwrap(), sq);
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn test_offset_stays_on_board() {
        let h1 = Square::new(7, 7).unwrap();
        assert_eq!(h1.offset(1, 0), None);
        assert_eq!(h1.offset(-1, -1), Some(Square::new(6, 6).unwrap()));
    }

    #[test]
    fn test_offset_extreme_deltas() {
        let b8 = Square::new(0, 1).unwrap();
        assert_eq!(b8.offset(0, i8::MAX), None);
        assert_eq!(b8.offset(i8::MIN, 0), None);
        assert_eq!(b8.offset(i8::MAX, i8::MIN), None);

        let h1 = Square::new(7, 7).unwrap();
        assert_eq!(h1.offset(i8::MAX, 0), None);
        assert_eq!(h1.offset(-7, -7), Some(Square::new(0, 0).unwrap()));
    }

    #[test]
    fn test_fen_chars() {
        let wq = Piece::new(PieceColor::White, PieceType::Queen);
        let bn = Piece::new(PieceColor::Black, PieceType::Knight);
        assert_eq!(wq.fen_char(), 'Q');
        assert_eq!(bn.fen_char(), 'n');
    }

    #[test]
    fn test_opponent() {
        assert_eq!(PieceColor::White.opponent(), PieceColor::Black);
        assert_eq!(PieceColor::Black.opponent(), PieceColor::White);
    }
}
