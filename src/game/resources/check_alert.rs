//! Non-blocking check alert
//!
//! Set when a committed move attacks the opponent's king and cleared by the
//! next committed move. The UI shows a banner while it is set.

use bevy::prelude::*;
use chess_rules::PieceColor;

#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CheckAlert {
    /// Side whose king is attacked
    pub in_check: Option<PieceColor>,
}

impl CheckAlert {
    pub fn message(&self) -> Option<String> {
        self.in_check.map(|color| format!("CHECK! {color} king is attacked"))
    }
}
