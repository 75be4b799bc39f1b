//! Rendering module - 2D chess board with Bevy sprites
//!
//! # Architecture
//!
//! - `board` - camera, square sprites, highlights and coordinate labels
//! - `pieces` - piece letters kept in sync with the rules state
//! - `utils` - square component, palette and layout helpers
//!
//! Squares are picked with Bevy's built-in sprite picking. Each square entity
//! has a `Pointer<Click>` observer that turns the click into a
//! [`crate::game::events::SquareClicked`] message.

pub mod board;
pub mod pieces;
pub mod utils;

pub use board::BoardPlugin;
pub use utils::*;
