//! Board rendering utilities - square component, colours and layout
//!
//! The board is drawn in screen space with row 0 (Black's back rank) at the
//! top, centred on the origin of the 2D camera.

use bevy::prelude::*;
use chess_rules::{Piece, PieceColor, Square};

/// Marks a board square sprite with the coordinate it stands for
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSquare {
    pub square: Square,
}

/// Marks the text entity that draws the piece on a square
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PieceGlyph {
    pub square: Square,
}

/// Palette for the board and pieces
#[derive(Resource, Debug, Clone, Copy)]
pub struct SquareColors {
    pub light: Color,
    pub dark: Color,
    pub selected: Color,
    pub hint: Color,
    pub checked_king: Color,
    pub white_piece: Color,
    pub black_piece: Color,
}

impl Default for SquareColors {
    fn default() -> Self {
        Self {
            light: Color::srgb(0.80, 0.64, 0.47),
            dark: Color::srgb(0.55, 0.38, 0.25),
            selected: Color::srgb(0.95, 0.80, 0.30),
            hint: Color::srgb(0.55, 0.70, 0.40),
            checked_king: Color::srgb(0.85, 0.25, 0.20),
            white_piece: Color::srgb(0.98, 0.97, 0.93),
            black_piece: Color::srgb(0.08, 0.08, 0.08),
        }
    }
}

impl SquareColors {
    /// Resting colour of a square
    pub fn base(&self, square: Square) -> Color {
        if square.is_light() {
            self.light
        } else {
            self.dark
        }
    }

    pub fn piece(&self, piece: Piece) -> Color {
        match piece.color {
            PieceColor::White => self.white_piece,
            PieceColor::Black => self.black_piece,
        }
    }
}

/// Centre of `square` in world coordinates for squares of edge `size`
pub fn square_to_world(square: Square, size: f32) -> Vec2 {
    Vec2::new(
        (square.col() as f32 - 3.5) * size,
        (3.5 - square.row() as f32) * size,
    )
}

/// Text drawn for a square's content
///
/// The bundled default font has no chess symbols, so pieces are drawn as
/// upper-case letters tinted by side.
pub fn glyph_text(content: Option<Piece>) -> String {
    content
        .map(|piece| piece.fen_char().to_ascii_uppercase().to_string())
        .unwrap_or_default()
}
