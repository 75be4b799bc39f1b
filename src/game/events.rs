//! Messages exchanged between input, game logic and rendering

use bevy::prelude::*;
use chess_rules::{GameEvent, Square};

/// A board square was clicked with the primary button
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareClicked {
    pub square: Square,
}

/// A rules-engine event produced while resolving a click
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardEvent(pub GameEvent);
