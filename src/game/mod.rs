//! Chess game module - rules engine bound to the ECS
//!
//! The position, side to move and selection live in the [`resources::ChessGame`]
//! resource, a thin wrapper over `chess_rules::GameState`. Nothing in the
//! rendered scene is treated as game state.
//!
//! # Module Organization
//!
//! - `events` - `SquareClicked` input and `BoardEvent` output messages
//! - `resources` - `ChessGame`, `Selection`, `CheckAlert`
//! - `systems` - click observer, click resolution, event bookkeeping
//! - `system_sets` - `Input → Execution → Visual` ordering
//! - `plugin` - `GamePlugin` registering all of the above

pub mod events;
pub mod plugin;
pub mod resources;
pub mod system_sets;
pub mod systems;


pub use plugin::GamePlugin;
