//! In-game status overlay
//!
//! Two Bevy UI panels drawn over the board:
//! - turn indicator with the move number
//! - check banner, shown while [`CheckAlert`] is set
//!
//! The banner never blocks input; play continues while it is visible.

use bevy::prelude::*;
use chess_rules::GameState;

use crate::game::resources::{ChessGame, CheckAlert};
use crate::game::system_sets::GameSystems;

/// Marker component for the turn indicator text
#[derive(Component)]
pub struct TurnText;

/// Marker component for the check banner root node
#[derive(Component)]
pub struct CheckBanner;

/// Marker component for the check banner text
#[derive(Component)]
pub struct CheckBannerText;

pub fn turn_label(state: &GameState) -> String {
    format!("Turn: {} (move {})", state.current_turn, state.move_number)
}

pub fn spawn_game_ui(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(10.0),
                top: Val::Px(10.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            Name::new("Turn UI"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                TurnText,
            ));
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(10.0),
                top: Val::Px(10.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.6, 0.05, 0.05, 0.85)),
            Visibility::Hidden,
            CheckBanner,
            Name::new("Check Banner"),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(""),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                CheckBannerText,
            ));
        });
}

pub fn update_turn_text(game: Res<ChessGame>, mut text_query: Query<&mut Text, With<TurnText>>) {
    if !game.is_changed() {
        return;
    }

    for mut text in text_query.iter_mut() {
        **text = turn_label(&game);
    }
}

pub fn update_check_banner(
    check_alert: Res<CheckAlert>,
    mut banner_query: Query<&mut Visibility, With<CheckBanner>>,
    mut text_query: Query<&mut Text, With<CheckBannerText>>,
) {
    if !check_alert.is_changed() {
        return;
    }

    let message = check_alert.message();

    for mut visibility in banner_query.iter_mut() {
        *visibility = if message.is_some() {
            Visibility::Inherited
        } else {
            Visibility::Hidden
        };
    }

    for mut text in text_query.iter_mut() {
        **text = message.clone().unwrap_or_default();
    }
}

pub struct GameUiPlugin;

impl Plugin for GameUiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_game_ui).add_systems(
            Update,
            (update_turn_text, update_check_banner).in_set(GameSystems::Visual),
        );
    }
}
