//! UI module - in-game status overlay built with Bevy UI
//!
//! - **game_ui**: turn indicator and non-blocking check banner

pub mod game_ui;

pub use game_ui::*;
