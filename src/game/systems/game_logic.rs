//! Bookkeeping driven by rules-engine events

use bevy::prelude::*;
use chess_rules::GameEvent;

use crate::core::GameSettings;
use crate::game::events::BoardEvent;
use crate::game::resources::{ChessGame, CheckAlert, Selection};

/// Keep [`Selection`] and [`CheckAlert`] in step with the rules engine
pub fn apply_board_events(
    mut board_events: MessageReader<BoardEvent>,
    game: Res<ChessGame>,
    settings: Res<GameSettings>,
    mut selection: ResMut<Selection>,
    mut check_alert: ResMut<CheckAlert>,
) {
    for BoardEvent(event) in board_events.read() {
        match *event {
            GameEvent::Selected(square) => {
                selection.selected_square = Some(square);
                selection.possible_moves = if settings.show_move_hints {
                    game.legal_destinations(square)
                } else {
                    Vec::new()
                };
            }
            GameEvent::Deselected => selection.clear(),
            GameEvent::Moved { .. } => check_alert.in_check = None,
            GameEvent::Check(color) => check_alert.in_check = Some(color),
            GameEvent::IllegalMove { .. } | GameEvent::TurnChanged(_) => {}
        }
    }
}
