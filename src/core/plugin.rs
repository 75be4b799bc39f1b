//! Core plugin for gridchess
//!
//! Inserts the configuration resources every other plugin reads.
//!
//! # Plugin Order
//!
//! 1. [`bevy::DefaultPlugins`] (window and log configured from [`GameSettings`])
//! 2. [`CorePlugin`]
//! 3. [`crate::game::GamePlugin`]
//! 4. [`crate::rendering::BoardPlugin`], [`crate::ui::GameUiPlugin`]

use bevy::prelude::*;

use super::resources::{GameSettings, SettingsReport};
use super::settings_persistence::log_settings_report;
use super::window_config::WindowConfig;

/// Core plugin carrying the settings resolved in `main`
#[derive(Default)]
pub struct CorePlugin {
    pub settings: GameSettings,
    pub report: Option<SettingsReport>,
}

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.settings.clone())
            .insert_resource(WindowConfig::for_settings(&self.settings));

        if let Some(report) = &self.report {
            app.insert_resource(report.clone());
        }

        app.add_systems(Startup, log_settings_report);
    }
}
