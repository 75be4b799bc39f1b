//! Piece glyph rendering
//!
//! Pieces are not entities of their own. Every square owns one text child
//! ([`PieceGlyph`]) whose letter and tint are rewritten from the board
//! whenever the [`ChessGame`] resource changes, so the scene can never drift
//! from the rules state.

use bevy::prelude::*;

use crate::game::resources::ChessGame;
use crate::rendering::utils::{glyph_text, PieceGlyph, SquareColors};

pub fn sync_piece_glyphs(
    game: Res<ChessGame>,
    colors: Res<SquareColors>,
    mut glyphs: Query<(&PieceGlyph, &mut Text2d, &mut TextColor)>,
) {
    if !game.is_changed() {
        return;
    }

    for (glyph, mut text, mut color) in &mut glyphs {
        let content = game.board.get(glyph.square);
        text.0 = glyph_text(content);
        if let Some(piece) = content {
            color.0 = colors.piece(piece);
        }
    }
}
