//! Board creation and square highlighting
//!
//! Spawns the 2D camera and the 64 square sprites. Each square carries a
//! [`BoardSquare`] component, a click observer and a glyph child that
//! [`crate::rendering::pieces`] keeps in sync with the board.

use bevy::picking::Pickable;
use bevy::prelude::*;

use crate::core::GameSettings;
use crate::game::resources::{ChessGame, CheckAlert, Selection};
use crate::game::system_sets::GameSystems;
use crate::game::systems::on_square_click;
use crate::rendering::pieces::sync_piece_glyphs;
use crate::rendering::utils::{square_to_world, BoardSquare, PieceGlyph, SquareColors};
use chess_rules::Square;

use super::coordinates::create_coordinate_labels;

/// Share of a square's edge used for the piece letter
const GLYPH_SCALE: f32 = 0.7;

pub(crate) fn setup_board_camera(mut commands: Commands) {
    commands.spawn((Camera2d, Name::new("Board Camera")));
}

pub(crate) fn create_board(
    mut commands: Commands,
    settings: Res<GameSettings>,
    colors: Res<SquareColors>,
) {
    let size = settings.square_size;

    for square in Square::all() {
        let position = square_to_world(square, size);

        commands
            .spawn((
                Sprite::from_color(colors.base(square), Vec2::splat(size)),
                Transform::from_translation(position.extend(0.0)),
                Pickable::default(),
                BoardSquare { square },
                Name::new(format!("Square {}", square)),
            ))
            .observe(on_square_click)
            .with_children(|parent| {
                parent.spawn((
                    Text2d::new(""),
                    TextFont {
                        font_size: size * GLYPH_SCALE,
                        ..default()
                    },
                    TextColor(colors.white_piece),
                    Transform::from_xyz(0.0, 0.0, 1.0),
                    Pickable::IGNORE,
                    PieceGlyph { square },
                ));
            });
    }

    info!("[BOARD] Spawned 64 squares at {}px", size);
}

/// Recolour squares for the selection, move hints and a checked king
pub fn update_square_highlights(
    game: Res<ChessGame>,
    selection: Res<Selection>,
    check_alert: Res<CheckAlert>,
    colors: Res<SquareColors>,
    mut squares: Query<(&BoardSquare, &mut Sprite)>,
) {
    if !game.is_changed() && !selection.is_changed() && !check_alert.is_changed() {
        return;
    }

    let checked_king = check_alert
        .in_check
        .and_then(|color| game.board.find_king(color));

    for (board_square, mut sprite) in &mut squares {
        let square = board_square.square;
        sprite.color = if selection.selected_square == Some(square) {
            colors.selected
        } else if checked_king == Some(square) {
            colors.checked_king
        } else if selection.possible_moves.contains(&square) {
            colors.hint
        } else {
            colors.base(square)
        };
    }
}

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SquareColors>()
            .add_systems(
                Startup,
                (setup_board_camera, create_board, create_coordinate_labels),
            )
            .add_systems(
                Update,
                (sync_piece_glyphs, update_square_highlights).in_set(GameSystems::Visual),
            );
    }
}
