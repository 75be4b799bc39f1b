//! The authoritative game state as an ECS resource
//!
//! Wraps [`chess_rules::GameState`]. Rendering reads the board from here and
//! never stores piece placement anywhere else.

use std::ops::{Deref, DerefMut};

use bevy::prelude::*;
use chess_rules::{GameState, RuleSet};

use crate::core::GameSettings;

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ChessGame(pub GameState);

impl ChessGame {
    pub fn new(rules: RuleSet) -> Self {
        Self(chess_rules::api::new_game_with_rules(rules))
    }
}

impl FromWorld for ChessGame {
    fn from_world(world: &mut World) -> Self {
        let rules = world
            .get_resource::<GameSettings>()
            .map(|settings| settings.rules)
            .unwrap_or_default();
        Self::new(rules)
    }
}

impl Deref for ChessGame {
    type Target = GameState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for ChessGame {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}
