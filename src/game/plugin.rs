//! Game plugin - rules-engine wiring
//!
//! Registers the game resources and messages and schedules click resolution.
//! Contains no rendering, so it runs headless under `MinimalPlugins`.
//!
//! # Plugin Dependencies
//!
//! Reads [`GameSettings`] when present (inserted by [`crate::core::CorePlugin`]);
//! falls back to default settings otherwise.

use bevy::prelude::*;

use super::events::{BoardEvent, SquareClicked};
use super::resources::*;
use super::system_sets::GameSystems;
use super::systems::*;
use crate::core::GameSettings;

pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<GameSettings>() {
            app.init_resource::<GameSettings>();
        }

        app.init_resource::<ChessGame>()
            .init_resource::<Selection>()
            .init_resource::<CheckAlert>();

        app.add_message::<SquareClicked>()
            .add_message::<BoardEvent>();

        // Input → Execution → Visual
        app.configure_sets(
            Update,
            (
                GameSystems::Input,
                GameSystems::Execution,
                GameSystems::Visual,
            )
                .chain(),
        );

        app.add_systems(
            Update,
            (
                resolve_square_clicks.in_set(GameSystems::Input),
                apply_board_events.in_set(GameSystems::Execution),
            ),
        );
    }
}
