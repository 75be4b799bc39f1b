//! Pointer input and click resolution
//!
//! Square entities carry [`on_square_click`] as an observer. The observer only
//! translates the pointer hit into a [`SquareClicked`] message; the rules are
//! applied in [`resolve_square_clicks`] so that one click is fully resolved
//! before the next is read.

use bevy::picking::events::{Click, Pointer};
use bevy::picking::pointer::PointerButton;
use bevy::prelude::*;
use chess_rules::GameEvent;

use crate::game::events::{BoardEvent, SquareClicked};
use crate::game::resources::ChessGame;
use crate::rendering::utils::BoardSquare;

/// Helper to check if primary button (left click) was used
fn is_primary(button: PointerButton) -> bool {
    matches!(button, PointerButton::Primary)
}

/// Handle click on a square
pub fn on_square_click(
    click: On<Pointer<Click>>,
    square_query: Query<&BoardSquare>,
    mut clicks: MessageWriter<SquareClicked>,
) {
    if !is_primary(click.event.button) {
        return;
    }

    let Ok(board_square) = square_query.get(click.entity) else {
        return;
    };

    debug!("[INPUT] Clicked square {}", board_square.square);
    clicks.write(SquareClicked {
        square: board_square.square,
    });
}

/// Feed queued clicks to the rules engine and publish what happened
pub fn resolve_square_clicks(
    mut clicks: MessageReader<SquareClicked>,
    mut game: ResMut<ChessGame>,
    mut board_events: MessageWriter<BoardEvent>,
) {
    for click in clicks.read() {
        let events = game.handle_square_click(click.square);

        for event in events {
            log_game_event(&event);
            board_events.write(BoardEvent(event));
        }
    }
}

fn log_game_event(event: &GameEvent) {
    match event {
        GameEvent::Selected(square) => debug!("[INPUT] Selected {}", square),
        GameEvent::Deselected => debug!("[INPUT] Selection cleared"),
        GameEvent::Moved {
            from,
            to,
            piece,
            captured,
        } => match captured {
            Some(victim) => info!(
                "[GAME] {} {:?} {}x{} captures {:?}",
                piece.color, piece.piece_type, from, to, victim.piece_type
            ),
            None => info!("[GAME] {} {:?} {}-{}", piece.color, piece.piece_type, from, to),
        },
        GameEvent::IllegalMove { from, to, reason } => {
            debug!("[GAME] Rejected {}-{}: {:?}", from, to, reason)
        }
        GameEvent::Check(color) => info!("[GAME] {} king is in check", color),
        GameEvent::TurnChanged(color) => debug!("[GAME] {} to move", color),
    }
}
