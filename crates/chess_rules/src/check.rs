//! Check detection
//!
//! A king is in check when any opposing piece could move onto its square by
//! that piece's movement rule. Pins on the attacker are not considered.

use tracing::warn;

use crate::board::{belongs_to, Board};
use crate::rules::is_pseudo_legal;
use crate::types::{PieceColor, Square};

/// True iff `color`'s king is attacked. A missing king reports `false`.
pub fn in_check(board: &Board, color: PieceColor) -> bool {
    let Some(king) = board.find_king(color) else {
        warn!("[CHECK] No {color} king on the board, treating as not in check");
        return false;
    };

    is_square_attacked(board, king, color.opponent())
}

/// True iff any piece of colour `by` may move onto `target`
pub fn is_square_attacked(board: &Board, target: Square, by: PieceColor) -> bool {
    Square::all().any(|from| {
        from != target && belongs_to(board.get(from), by) && is_pseudo_legal(board, from, target)
    })
}

/// Every square holding a piece of colour `by` that attacks `target`
pub fn attackers(board: &Board, target: Square, by: PieceColor) -> Vec<Square> {
    Square::all()
        .filter(|&from| {
            from != target && belongs_to(board.get(from), by) && is_pseudo_legal(board, from, target)
        })
        .collect()
}
