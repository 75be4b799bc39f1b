//! Window configuration resource
//!
//! Derives the primary window from the board size so the whole grid, the
//! turn label and the check banner fit without scrolling.

use bevy::prelude::*;
use bevy::window::{PresentMode, Window, WindowResolution};

use super::resources::GameSettings;

/// Space around the board in units of one square
const BOARD_MARGIN_SQUARES: f32 = 1.0;

/// Configuration for the primary application window
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    /// Window width in logical pixels
    pub width: u32,
    /// Window height in logical pixels
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self::for_settings(&GameSettings::default())
    }
}

impl WindowConfig {
    pub fn for_settings(settings: &GameSettings) -> Self {
        let side = (settings.square_size * (8.0 + 2.0 * BOARD_MARGIN_SQUARES)).round() as u32;
        Self {
            title: "gridchess".to_string(),
            width: side,
            height: side,
            resizable: true,
        }
    }

    /// Create a Bevy Window from this configuration
    pub fn to_window(&self) -> Window {
        Window {
            title: self.title.clone(),
            resolution: WindowResolution::new(self.width, self.height),
            resizable: self.resizable,
            present_mode: PresentMode::AutoVsync,
            ..default()
        }
    }
}
