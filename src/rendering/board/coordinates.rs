//! Board coordinate labels
//!
//! Spawns file letters (a-h) below the board and rank numbers (1-8) to its
//! left, matching the algebraic names used in the logs.

use bevy::picking::Pickable;
use bevy::prelude::*;

use crate::core::GameSettings;

/// Marker component for coordinate labels
#[derive(Component)]
pub struct CoordinateLabel;

/// Share of a square's edge used for label text
const LABEL_SCALE: f32 = 0.3;

pub fn create_coordinate_labels(mut commands: Commands, settings: Res<GameSettings>) {
    let size = settings.square_size;
    let text_style = TextFont {
        font_size: size * LABEL_SCALE,
        ..default()
    };
    let edge = 4.0 * size + size * 0.3;

    for index in 0..8u8 {
        let offset = (index as f32 - 3.5) * size;

        let file = ((b'a' + index) as char).to_string();
        commands.spawn((
            Text2d::new(file.clone()),
            text_style.clone(),
            TextColor(Color::srgb(0.85, 0.85, 0.85)),
            Transform::from_xyz(offset, -edge, 0.0),
            Pickable::IGNORE,
            CoordinateLabel,
            Name::new(format!("Label File {}", file)),
        ));

        // Row 0 is drawn on top and is rank 8
        let rank = 8 - index;
        commands.spawn((
            Text2d::new(rank.to_string()),
            text_style.clone(),
            TextColor(Color::srgb(0.85, 0.85, 0.85)),
            Transform::from_xyz(-edge, -offset, 0.0),
            Pickable::IGNORE,
            CoordinateLabel,
            Name::new(format!("Label Rank {}", rank)),
        ));
    }
}
