//! Turn controller - click-driven selection and move resolution
//!
//! A [`GameState`] is either *idle* (`selected == None`) or has one square of
//! the side to move selected. Every click is resolved synchronously and
//! returns the [`GameEvent`]s the UI should react to.
//!
//! # Move Resolution
//!
//! ```text
//! select -> validate -> tentative apply -> own king attacked?
//!                                            yes: restore both squares, reject
//!                                            no:  commit, check alert, switch turn
//! ```
//!
//! The turn only changes after a committed move. Rejected moves leave the
//! board exactly as it was and clear the selection.

use tracing::{debug, trace};

use crate::board::{belongs_to, Board};
use crate::check::{attackers, in_check};
use crate::rules::{candidate_destinations, Rejection, RuleSet};
use crate::types::{Piece, PieceColor, Square};

/// Notifications emitted while resolving a click, in the order they happen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A piece of the side to move was selected
    Selected(Square),
    /// The selection was cleared
    Deselected,
    /// A move was committed
    Moved {
        from: Square,
        to: Square,
        piece: Piece,
        captured: Option<Piece>,
    },
    /// A move attempt was turned down; the board is unchanged
    IllegalMove {
        from: Square,
        to: Square,
        reason: Rejection,
    },
    /// The given side's king is attacked after the last move
    Check(PieceColor),
    /// The given side is now to move
    TurnChanged(PieceColor),
}

/// Complete game state: position, side to move and the pending selection
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub current_turn: PieceColor,
    pub selected: Option<Square>,
    /// Full-move counter, incremented after Black moves
    pub move_number: u32,
    pub rules: RuleSet,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(RuleSet::default())
    }
}

impl GameState {
    /// Standard starting position, White to move
    pub fn new(rules: RuleSet) -> Self {
        Self::from_board(Board::starting_position(), PieceColor::White, rules)
    }

    /// Arbitrary position with `to_move` to play and nothing selected
    pub fn from_board(board: Board, to_move: PieceColor, rules: RuleSet) -> Self {
        Self {
            board,
            current_turn: to_move,
            selected: None,
            move_number: 1,
            rules,
        }
    }

    pub fn is_in_check(&self, color: PieceColor) -> bool {
        in_check(&self.board, color)
    }

    /// Destinations for the piece on `from` that pass the movement rules and
    /// do not leave its own king attacked
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        let Some(piece) = self.board.get(from) else {
            return Vec::new();
        };

        candidate_destinations(&self.board, from, &self.rules)
            .into_iter()
            .filter(|&to| {
                let mut scratch = self.board;
                let moving = scratch.take(from);
                scratch.set(to, moving);
                !in_check(&scratch, piece.color)
            })
            .collect()
    }

    /// Resolve one click on `square`
    pub fn handle_square_click(&mut self, square: Square) -> Vec<GameEvent> {
        match self.selected {
            None => self.select(square),
            Some(from) if from == square => {
                debug!("[TURN] Deselected {square}");
                self.selected = None;
                vec![GameEvent::Deselected]
            }
            Some(from) => self.attempt_move(from, square),
        }
    }

    fn select(&mut self, square: Square) -> Vec<GameEvent> {
        if !belongs_to(self.board.get(square), self.current_turn) {
            trace!("[TURN] Ignored click on {square}: not a {} piece", self.current_turn);
            return Vec::new();
        }

        debug!("[TURN] {} selected {square}", self.current_turn);
        self.selected = Some(square);
        vec![GameEvent::Selected(square)]
    }

    fn reject(&mut self, from: Square, to: Square, reason: Rejection) -> Vec<GameEvent> {
        debug!("[TURN] Rejected {from}-{to}: {reason:?}");
        self.selected = None;
        vec![
            GameEvent::IllegalMove { from, to, reason },
            GameEvent::Deselected,
        ]
    }

    fn attempt_move(&mut self, from: Square, to: Square) -> Vec<GameEvent> {
        if let Err(reason) = self.rules.check_move(&self.board, from, to) {
            return self.reject(from, to, reason);
        }

        // Tentative apply, remembering the target's content for rollback
        let Some(piece) = self.board.take(from) else {
            return self.reject(from, to, Rejection::EmptyOrigin);
        };
        let captured = self.board.get(to);
        self.board.set(to, Some(piece));

        let mover = self.current_turn;
        if in_check(&self.board, mover) {
            self.board.set(from, Some(piece));
            self.board.set(to, captured);
            return self.reject(from, to, Rejection::SelfCheck);
        }

        self.selected = None;
        debug!("[TURN] {mover} played {from}-{to}");
        trace!("[TURN] Position after {from}-{to}:\n{}", self.board);

        let mut events = vec![
            GameEvent::Moved {
                from,
                to,
                piece,
                captured,
            },
            GameEvent::Deselected,
        ];

        let opponent = mover.opponent();
        if in_check(&self.board, opponent) {
            if let Some(king) = self.board.find_king(opponent) {
                debug!(
                    "[TURN] {opponent} king on {king} in check from {:?}",
                    attackers(&self.board, king, mover)
                );
            }
            events.push(GameEvent::Check(opponent));
        }

        if mover == PieceColor::Black {
            self.move_number += 1;
        }
        self.current_turn = opponent;
        events.push(GameEvent::TurnChanged(opponent));
        events
    }
}
