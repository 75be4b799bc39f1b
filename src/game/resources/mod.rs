//! Chess game resources - global game state
//!
//! - [`ChessGame`] - the rules engine state (board, turn, selection)
//! - [`Selection`] - selected square and move hints for highlighting
//! - [`CheckAlert`] - which king, if any, the last move put in check
//!
//! All resources are registered in [`crate::game::plugin::GamePlugin`].

pub mod check_alert;
pub mod chess_game;
pub mod selection;

pub use check_alert::*;
pub use chess_game::*;
pub use selection::*;
