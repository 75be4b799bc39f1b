//! Chess piece movement rules
//!
//! Contains the rules for how each chess piece can move.
//! Pure functions with no side effects - easy to test.
//!
//! [`is_pseudo_legal`] answers the geometric question only: it never looks at
//! whose turn it is and never asks whether the move exposes the mover's king.
//! The turn controller layers both of those on top.

use crate::board::{belongs_to, Board};
use crate::types::{PieceType, Square};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether a piece may land on a square held by its own side
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FriendlyFire {
    /// Inherited behaviour: the movement rules ignore the colour of the target
    #[default]
    Allowed,
    Forbidden,
}

/// Configurable rule choices layered over the piece movement rules
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RuleSet {
    pub friendly_fire: FriendlyFire,
}

/// Why a move attempt was turned down
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Rejection {
    /// No piece on the origin square
    EmptyOrigin,
    /// The piece cannot move that way
    PieceRule,
    /// Destination holds a piece of the mover's colour and the rule set forbids it
    FriendlyFire,
    /// The move would leave the mover's own king attacked
    SelfCheck,
}

impl RuleSet {
    pub const fn forbid_friendly_fire() -> Self {
        Self {
            friendly_fire: FriendlyFire::Forbidden,
        }
    }

    /// Piece rule plus the configured friendly-fire rule. Does not test self-check.
    pub fn check_move(&self, board: &Board, from: Square, to: Square) -> Result<(), Rejection> {
        let Some(piece) = board.get(from) else {
            return Err(Rejection::EmptyOrigin);
        };

        if !is_pseudo_legal(board, from, to) {
            return Err(Rejection::PieceRule);
        }

        if self.friendly_fire == FriendlyFire::Forbidden && belongs_to(board.get(to), piece.color) {
            return Err(Rejection::FriendlyFire);
        }

        Ok(())
    }
}

/// Every destination the piece on `from` may reach under `rules`, ignoring self-check
pub fn candidate_destinations(board: &Board, from: Square, rules: &RuleSet) -> Vec<Square> {
    Square::all()
        .filter(|&to| to != from && rules.check_move(board, from, to).is_ok())
        .collect()
}

/// Check if the piece on `from` may move to `to` by its movement rule
///
/// Reads whatever occupies both squares at call time. An empty origin is
/// never legal.
pub fn is_pseudo_legal(board: &Board, from: Square, to: Square) -> bool {
    let Some(piece) = board.get(from) else {
        return false;
    };

    match piece.piece_type {
        PieceType::Pawn => is_valid_pawn_move(from, to, board),
        PieceType::Knight => is_valid_knight_move(from, to),
        PieceType::Bishop => is_valid_bishop_move(from, to, board),
        PieceType::Rook => is_valid_rook_move(from, to, board),
        PieceType::Queen => is_valid_queen_move(from, to, board),
        PieceType::King => is_valid_king_move(from, to),
    }
}

#[inline]
fn deltas(from: Square, to: Square) -> (i8, i8) {
    (
        to.row() as i8 - from.row() as i8,
        to.col() as i8 - from.col() as i8,
    )
}

fn is_valid_pawn_move(from: Square, to: Square, board: &Board) -> bool {
    let Some(pawn) = board.get(from) else {
        return false;
    };
    let direction = pawn.color.pawn_direction();
    let (dr, dc) = deltas(from, to);

    // Forward move
    if dc == 0 && dr == direction {
        return board.is_empty(to);
    }

    // Double move from the start row, both squares must be empty
    if dc == 0 && dr == 2 * direction && from.row() == pawn.color.pawn_start_row() {
        return match from.offset(direction, 0) {
            Some(intermediate) => board.is_empty(intermediate) && board.is_empty(to),
            None => false,
        };
    }

    // Diagonal capture of any occupied square
    if dc.abs() == 1 && dr == direction {
        return !board.is_empty(to);
    }

    false
}

fn is_valid_knight_move(from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    let (dr, dc) = (dr.abs(), dc.abs());
    (dr == 2 && dc == 1) || (dr == 1 && dc == 2)
}

fn is_valid_bishop_move(from: Square, to: Square, board: &Board) -> bool {
    let (dr, dc) = deltas(from, to);

    if dr == 0 || dr.abs() != dc.abs() {
        return false;
    }

    is_path_clear(board, from, to)
}

fn is_valid_rook_move(from: Square, to: Square, board: &Board) -> bool {
    if from == to {
        return false;
    }

    if from.row() != to.row() && from.col() != to.col() {
        return false;
    }

    is_path_clear(board, from, to)
}

fn is_valid_queen_move(from: Square, to: Square, board: &Board) -> bool {
    is_valid_rook_move(from, to, board) || is_valid_bishop_move(from, to, board)
}

/// One square in any direction. `from == to` passes; callers never issue it.
fn is_valid_king_move(from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    dr.abs() <= 1 && dc.abs() <= 1
}

/// True iff every square strictly between `from` and `to` is empty
///
/// `from` and `to` must share a rank, file or diagonal; the caller checks
/// alignment. Equal squares have no intermediate squares and yield `true`.
pub fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let (dr, dc) = deltas(from, to);
    let (step_r, step_c) = (dr.signum(), dc.signum());

    let mut current = from;
    loop {
        let Some(next) = current.offset(step_r, step_c) else {
            return true;
        };
        if next == to {
            return true;
        }
        if !board.is_empty(next) {
            return false;
        }
        current = next;
    }
}
