//! Public API for the chess rules
//!
//! Functional entry points that thread a [`GameState`] value through each
//! click instead of mutating it in place.

use crate::game::{GameEvent, GameState};
use crate::rules::RuleSet;
use crate::types::Square;

/// Create a new game with the standard starting position, White to move
pub fn new_game() -> GameState {
    GameState::default()
}

/// Create a new game with explicit rule choices
pub fn new_game_with_rules(rules: RuleSet) -> GameState {
    GameState::new(rules)
}

/// Resolve one click, returning the next state and what happened
pub fn handle_square_click(mut state: GameState, square: Square) -> (GameState, Vec<GameEvent>) {
    let events = state.handle_square_click(square);
    (state, events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceColor;

    #[test]
    fn test_new_game_white_to_move() {
        let state = new_game();
        assert_eq!(state.current_turn, PieceColor::White);
        assert_eq!(state.selected, None);
        assert_eq!(state.move_number, 1);
    }

    #[test]
    fn test_new_game_with_rules_applies_rule_set() {
        let state = new_game_with_rules(RuleSet::forbid_friendly_fire());
        assert_eq!(state.rules, RuleSet::forbid_friendly_fire());
        assert_eq!(state.board, new_game().board);

        // b1 onto d2 is a knight move, but d2 holds a White pawn
        let (state, _) = handle_square_click(state, "b1".parse().unwrap());
        let (state, events) = handle_square_click(state, "d2".parse().unwrap());
        assert!(matches!(
            events.first(),
            Some(GameEvent::IllegalMove {
                reason: crate::rules::Rejection::FriendlyFire,
                ..
            })
        ));
        assert_eq!(state.current_turn, PieceColor::White);
    }

    #[test]
    fn test_handle_square_click_threads_state() {
        let state = new_game();
        let (state, events) = handle_square_click(state, "b1".parse().unwrap());
        assert_eq!(events, vec![GameEvent::Selected("b1".parse().unwrap())]);

        let (state, events) = handle_square_click(state, "c3".parse().unwrap());
        assert_eq!(events.last(), Some(&GameEvent::TurnChanged(PieceColor::Black)));
        assert_eq!(state.current_turn, PieceColor::Black);
    }
}
