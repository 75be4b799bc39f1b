//! Settings loading
//!
//! Reads [`GameSettings`] from a JSON file. Settings are read-only: the game
//! never writes them back.
//!
//! # File Location
//!
//! `settings.json` in the user's configuration directory, e.g.
//! `~/.config/gridchess/settings.json` on Linux. Falls back to a local
//! `settings.json` if the system config dir cannot be found. The `--settings`
//! flag replaces the location entirely.
//!
//! # Error Handling
//!
//! Loading never fails the application: a missing or unparsable file yields
//! default settings plus a [`SettingsReport`] explaining why, which
//! [`log_settings_report`] logs once the logger is up. A file that parses but
//! holds a bad value keeps its other choices (see [`GameSettings::sanitize`]).

use std::fs;
use std::path::{Path, PathBuf};

use bevy::prelude::*;
use directories::ProjectDirs;

use super::error::CoreResult;
use super::resources::{GameSettings, SettingsReport};

/// Settings filename
const SETTINGS_FILENAME: &str = "settings.json";

/// Helper to resolve the default settings file path
pub fn get_settings_path() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "trilltino", "gridchess") {
        proj_dirs.config_dir().join(SETTINGS_FILENAME)
    } else {
        PathBuf::from(SETTINGS_FILENAME)
    }
}

/// Parse settings from the file at `path`
///
/// Out-of-range values are kept as written; [`GameSettings::sanitize`]
/// replaces them once command-line flags have been applied.
pub fn read_settings(path: &Path) -> CoreResult<GameSettings> {
    let contents = fs::read_to_string(path)?;
    let settings: GameSettings = serde_json::from_str(&contents)?;
    Ok(settings)
}

/// Load settings, falling back to defaults when the file is absent or unreadable
pub fn load_settings(path: &Path) -> (GameSettings, SettingsReport) {
    if !path.exists() {
        return (
            GameSettings::default(),
            SettingsReport::Missing(path.to_path_buf()),
        );
    }

    match read_settings(path) {
        Ok(settings) => (settings, SettingsReport::Loaded(path.to_path_buf())),
        Err(e) => (
            GameSettings::default(),
            SettingsReport::Rejected {
                path: path.to_path_buf(),
                reason: e.to_string(),
            },
        ),
    }
}

/// Log where the active settings came from
pub fn log_settings_report(report: Option<Res<SettingsReport>>, settings: Res<GameSettings>) {
    match report.as_deref() {
        Some(SettingsReport::Loaded(path)) => {
            info!("[SETTINGS] Loaded settings from {:?}", path);
        }
        Some(SettingsReport::Missing(path)) => {
            info!("[SETTINGS] No settings file found at {:?}. Using defaults.", path);
        }
        Some(SettingsReport::Rejected { path, reason }) => {
            warn!(
                "[SETTINGS] Failed to load settings file at {:?}: {}. Using defaults.",
                path, reason
            );
        }
        None => {}
    }
    debug!("[SETTINGS] Active settings: {:?}", *settings);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::CoreError;
    use chess_rules::RuleSet;

    fn temp_settings_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("gridchess-{}-{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("gridchess-does-not-exist.json");
        let (settings, report) = load_settings(&path);

        assert_eq!(settings, GameSettings::default());
        assert_eq!(report, SettingsReport::Missing(path));
    }

    #[test]
    fn test_valid_file_is_loaded() {
        let path = temp_settings_file(
            "valid.json",
            r#"{ "rules": { "friendly_fire": "forbidden" }, "square_size": 64.0 }"#,
        );
        let (settings, report) = load_settings(&path);

        assert_eq!(settings.rules, RuleSet::forbid_friendly_fire());
        assert_eq!(settings.square_size, 64.0);
        assert_eq!(report, SettingsReport::Loaded(path.clone()));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_bad_value_keeps_other_file_choices() {
        let path = temp_settings_file(
            "bad-size.json",
            r#"{ "rules": { "friendly_fire": "forbidden" }, "square_size": 10.0 }"#,
        );
        let (mut settings, report) = load_settings(&path);
        assert_eq!(report, SettingsReport::Loaded(path.clone()));

        assert_eq!(settings.sanitize().len(), 1);
        assert_eq!(settings.rules, RuleSet::forbid_friendly_fire());
        assert_eq!(settings.square_size, GameSettings::default().square_size);
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        let path = temp_settings_file("broken.json", "{ not json");

        assert!(matches!(
            read_settings(&path),
            Err(CoreError::SettingsSerialization(_))
        ));
        let (settings, report) = load_settings(&path);
        assert_eq!(settings, GameSettings::default());
        assert!(matches!(report, SettingsReport::Rejected { .. }));
        fs::remove_file(path).unwrap();
    }
}
