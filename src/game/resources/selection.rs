//! Selection resource for highlighting the selected square and its moves

use bevy::prelude::*;
use chess_rules::Square;

/// Mirror of the rules engine's selection plus the move hints to draw
#[derive(Resource, Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    pub selected_square: Option<Square>,
    pub possible_moves: Vec<Square>,
}

impl Selection {
    pub fn clear(&mut self) {
        self.selected_square = None;
        self.possible_moves.clear();
    }

    pub fn is_selected(&self) -> bool {
        self.selected_square.is_some()
    }
}
