//! Core resources for application-wide configuration
//!
//! [`GameSettings`] is read once at startup from `settings.json` (see
//! [`super::settings_persistence`]) and then overridden by command-line flags.

use std::path::PathBuf;
use std::str::FromStr;

use bevy::log::Level;
use bevy::prelude::*;
use chess_rules::{FriendlyFire, RuleSet};
use serde::{Deserialize, Serialize};

use super::error::{CoreError, CoreResult};

/// Smallest and largest accepted board square edge in logical pixels
pub const SQUARE_SIZE_RANGE: (f32, f32) = (24.0, 200.0);

/// User preferences for a game session
#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Rule choices passed to the rules engine
    pub rules: RuleSet,

    /// Edge length of one board square in logical pixels
    pub square_size: f32,

    /// Whether to highlight the destinations of the selected piece
    pub show_move_hints: bool,

    /// Log level name (`error`, `warn`, `info`, `debug`, `trace`)
    pub log_level: String,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            rules: RuleSet::default(),
            square_size: 80.0,
            show_move_hints: true,
            log_level: "info".to_string(),
        }
    }
}

impl GameSettings {
    /// Reject values that would produce an unusable window or logger
    pub fn validate(&self) -> CoreResult<()> {
        self.check_square_size()?;
        self.level()?;
        Ok(())
    }

    /// Reset each unusable value to its default and return what was wrong.
    /// Valid choices, including the rule set, are kept.
    pub fn sanitize(&mut self) -> Vec<CoreError> {
        let defaults = Self::default();
        let mut problems = Vec::new();

        if let Err(e) = self.check_square_size() {
            problems.push(e);
            self.square_size = defaults.square_size;
        }
        if let Err(e) = self.level() {
            problems.push(e);
            self.log_level = defaults.log_level;
        }

        problems
    }

    fn check_square_size(&self) -> CoreResult<()> {
        let (min, max) = SQUARE_SIZE_RANGE;
        if !(min..=max).contains(&self.square_size) {
            return Err(CoreError::InvalidSetting {
                message: format!(
                    "square_size {} is outside {min}-{max}",
                    self.square_size
                ),
            });
        }
        Ok(())
    }

    pub fn level(&self) -> CoreResult<Level> {
        Level::from_str(self.log_level.trim()).map_err(|_| CoreError::InvalidSetting {
            message: format!("unknown log level {:?}", self.log_level),
        })
    }

    pub fn friendly_fire_allowed(&self) -> bool {
        self.rules.friendly_fire == FriendlyFire::Allowed
    }
}

/// Where the active settings came from, logged once the logger is running
#[derive(Resource, Debug, Clone, PartialEq)]
pub enum SettingsReport {
    Loaded(PathBuf),
    Missing(PathBuf),
    Rejected { path: PathBuf, reason: String },
}
