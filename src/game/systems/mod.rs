//! Game systems
//!
//! - `input` - square click observer and click resolution
//! - `game_logic` - selection and check-alert bookkeeping

pub mod game_logic;
pub mod input;

pub use game_logic::*;
pub use input::*;
