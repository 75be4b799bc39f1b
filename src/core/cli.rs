//! Command-line arguments
//!
//! Flags override whatever the settings file says.

use std::path::PathBuf;

use chess_rules::RuleSet;
use clap::Parser;

use super::resources::GameSettings;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gridchess", version, about = "Two-player chess on a clickable grid")]
pub struct Args {
    /// Read settings from this file instead of the user config directory
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Reject moves that land on a piece of the mover's own colour
    #[arg(long)]
    pub forbid_friendly_fire: bool,

    /// Edge length of one board square in logical pixels
    #[arg(long, value_name = "PX")]
    pub square_size: Option<f32>,

    /// Do not highlight destinations of the selected piece
    #[arg(long)]
    pub no_hints: bool,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Args {
    /// Apply every flag that was given on top of `settings`
    pub fn apply(&self, settings: &mut GameSettings) {
        if self.forbid_friendly_fire {
            settings.rules = RuleSet::forbid_friendly_fire();
        }
        if let Some(size) = self.square_size {
            settings.square_size = size;
        }
        if self.no_hints {
            settings.show_move_hints = false;
        }
        if let Some(level) = &self.log_level {
            settings.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_keep_settings() {
        let args = Args::try_parse_from(["gridchess"]).unwrap();
        let mut settings = GameSettings::default();
        args.apply(&mut settings);
        assert_eq!(settings, GameSettings::default());
    }

    #[test]
    fn test_flags_override_settings() {
        let args = Args::try_parse_from([
            "gridchess",
            "--forbid-friendly-fire",
            "--square-size",
            "60",
            "--no-hints",
            "--log-level",
            "debug",
        ])
        .unwrap();
        let mut settings = GameSettings::default();
        args.apply(&mut settings);

        assert_eq!(settings.rules, RuleSet::forbid_friendly_fire());
        assert_eq!(settings.square_size, 60.0);
        assert!(!settings.show_move_hints);
        assert_eq!(settings.log_level, "debug");
    }

    #[test]
    fn test_bad_flag_does_not_discard_other_flags() {
        let args =
            Args::try_parse_from(["gridchess", "--forbid-friendly-fire", "--square-size", "10"])
                .unwrap();
        let mut settings = GameSettings::default();
        args.apply(&mut settings);

        let problems = settings.sanitize();

        assert_eq!(problems.len(), 1);
        assert_eq!(settings.rules, RuleSet::forbid_friendly_fire());
        assert_eq!(settings.square_size, GameSettings::default().square_size);
    }

    #[test]
    fn test_settings_path_flag() {
        let args = Args::try_parse_from(["gridchess", "--settings", "/tmp/chess.json"]).unwrap();
        assert_eq!(args.settings, Some(PathBuf::from("/tmp/chess.json")));
    }
}
