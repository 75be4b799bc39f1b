//! System organization using SystemSets
//!
//! Systems run in this order each frame:
//! 1. **Input** - resolve queued square clicks against the rules engine
//! 2. **Execution** - fold the resulting events into selection and alert state
//! 3. **Visual** - redraw glyphs, highlights and labels from that state

use bevy::prelude::*;

/// System execution order for game logic
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, SystemSet)]
pub enum GameSystems {
    /// Click resolution
    Input,

    /// Selection, hint and check-alert bookkeeping
    Execution,

    /// Board and UI redraws
    Visual,
}
