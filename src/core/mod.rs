//! Core module - configuration and application infrastructure
//!
//! # Resources
//!
//! - [`GameSettings`] - rule choices, board size, hints, log level
//! - [`WindowConfig`] - window settings derived from the board size
//! - [`SettingsReport`] - where the settings came from
//!
//! Settings are resolved before the `App` is built (the window and the
//! logger both need them) in this order: defaults, `settings.json`,
//! command-line flags ([`Args`]).

pub mod cli;
pub mod error;
pub mod plugin;
pub mod resources;
pub mod settings_persistence;
pub mod window_config;

// Re-export commonly used items
pub use cli::Args;
pub use error::{CoreError, CoreResult};
pub use plugin::CorePlugin;
pub use resources::*;
pub use window_config::WindowConfig;
