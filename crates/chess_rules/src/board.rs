//! Board state - the authoritative 8x8 position
//!
//! Provides the fundamental board operations used throughout the rules:
//! - Square reads and writes
//! - Colour classification of square contents
//! - King lookup

use std::fmt;

use crate::types::{Piece, PieceColor, PieceType, Square};

/// Standard back-rank order from the a-file to the h-file
const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

/// 64 cells of optional pieces, indexed by [`Square::index`]
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: [Option<Piece>; 64],
}

impl Board {
    pub fn empty() -> Self {
        Self {
            squares: [None; 64],
        }
    }

    /// Standard starting position: Black on rows 0-1, White on rows 6-7
    pub fn starting_position() -> Self {
        let mut board = Self::empty();
        for (col, &piece_type) in BACK_ROW.iter().enumerate() {
            let col = col as u8;
            board.place(0, col, Piece::new(PieceColor::Black, piece_type));
            board.place(1, col, Piece::new(PieceColor::Black, PieceType::Pawn));
            board.place(6, col, Piece::new(PieceColor::White, PieceType::Pawn));
            board.place(7, col, Piece::new(PieceColor::White, piece_type));
        }
        board
    }

    fn place(&mut self, row: u8, col: u8, piece: Piece) {
        self.squares[row as usize * 8 + col as usize] = Some(piece);
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.index()]
    }

    #[inline]
    pub fn set(&mut self, square: Square, content: Option<Piece>) {
        self.squares[square.index()] = content;
    }

    /// Remove and return the content of `square`
    #[inline]
    pub fn take(&mut self, square: Square) -> Option<Piece> {
        self.squares[square.index()].take()
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.squares[square.index()].is_none()
    }

    /// Location of `color`'s king, `None` if it is not on the board
    pub fn find_king(&self, color: PieceColor) -> Option<Square> {
        self.pieces()
            .find(|(_, piece)| piece.piece_type == PieceType::King && piece.color == color)
            .map(|(square, _)| square)
    }

    /// Occupied squares in index order
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::starting_position()
    }
}

/// True iff `content` is a piece of `color`. Empty squares belong to neither side.
#[inline]
pub fn belongs_to(content: Option<Piece>, color: PieceColor) -> bool {
    content.is_some_and(|piece| piece.belongs_to(color))
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..8u8 {
            write!(f, "{} ", 8 - row)?;
            for col in 0..8u8 {
                let c = self.squares[row as usize * 8 + col as usize]
                    .map(|piece| piece.fen_char())
                    .unwrap_or('.');
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board")?;
        fmt::Display::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_starting_position_layout() {
        let board = Board::starting_position();

        assert_eq!(board.pieces().count(), 32);
        assert_eq!(
            board.get(sq("e1")),
            Some(Piece::new(PieceColor::White, PieceType::King))
        );
        assert_eq!(
            board.get(sq("d8")),
            Some(Piece::new(PieceColor::Black, PieceType::Queen))
        );
        assert_eq!(
            board.get(Square::new(6, 0).unwrap()),
            Some(Piece::new(PieceColor::White, PieceType::Pawn))
        );
        assert!(board.is_empty(sq("e4")));
    }

    #[test]
    fn test_set_is_visible_immediately() {
        let mut board = Board::empty();
        let knight = Piece::new(PieceColor::Black, PieceType::Knight);

        board.set(sq("c3"), Some(knight));
        assert_eq!(board.get(sq("c3")), Some(knight));

        assert_eq!(board.take(sq("c3")), Some(knight));
        assert!(board.is_empty(sq("c3")));
    }

    #[test]
    fn test_belongs_to() {
        let white_pawn = Some(Piece::new(PieceColor::White, PieceType::Pawn));

        assert!(belongs_to(white_pawn, PieceColor::White));
        assert!(!belongs_to(white_pawn, PieceColor::Black));
        assert!(!belongs_to(None, PieceColor::White));
        assert!(!belongs_to(None, PieceColor::Black));
    }

    #[test]
    fn test_find_king() {
        let board = Board::starting_position();
        assert_eq!(board.find_king(PieceColor::White), Some(sq("e1")));
        assert_eq!(board.find_king(PieceColor::Black), Some(sq("e8")));
        assert_eq!(Board::empty().find_king(PieceColor::White), None);
    }

    #[test]
    fn test_display_diagram() {
        let diagram = Board::starting_position().to_string();
        let lines: Vec<&str> = diagram.lines().collect();

        assert_eq!(lines[0], "8 rnbqkbnr");
        assert_eq!(lines[4], "4 ........");
        assert_eq!(lines[7], "1 RNBQKBNR");
        assert_eq!(lines[8], "  abcdefgh");
    }
}
