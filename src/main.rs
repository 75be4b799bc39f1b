use bevy::log::LogPlugin;
use bevy::prelude::*;
use clap::Parser;

use gridchess::core::settings_persistence::{get_settings_path, load_settings};
use gridchess::core::{Args, CorePlugin, WindowConfig};
use gridchess::game::GamePlugin;
use gridchess::rendering::BoardPlugin;
use gridchess::ui::GameUiPlugin;

fn main() {
    let args = Args::parse();

    // Defaults, then settings.json, then command-line flags
    let settings_path = args.settings.clone().unwrap_or_else(get_settings_path);
    let (mut settings, report) = load_settings(&settings_path);
    args.apply(&mut settings);

    for problem in settings.sanitize() {
        // The logger is not running yet
        eprintln!("{problem}. Using the default for this setting.");
    }

    let level = settings.level().unwrap_or(bevy::log::Level::INFO);
    let window = WindowConfig::for_settings(&settings).to_window();

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(window),
                    ..default()
                })
                .set(LogPlugin {
                    level,
                    filter: "wgpu=warn,naga=error".into(),
                    ..default()
                }),
        )
        .add_plugins(CorePlugin {
            settings,
            report: Some(report),
        })
        .add_plugins(GamePlugin)
        .add_plugins(BoardPlugin)
        .add_plugins(GameUiPlugin)
        .run();
}
