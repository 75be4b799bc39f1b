//! Chess rules for gridchess - move legality and check detection
//!
//! Pure game logic with no ECS coupling. The Bevy application in the root
//! package renders *from* a [`GameState`] and feeds square clicks back into
//! it; nothing in this crate knows about windows, sprites or pointers.
//!
//! # Module Structure
//!
//! - `types` - `Square`, `Piece`, `PieceColor`, `PieceType`
//! - `board` - the 8x8 position and the colour classifier
//! - `rules` - path clearance, per-piece movement rules, `RuleSet`
//! - `check` - king lookup and attack scanning
//! - `game` - the click-driven turn controller and its events
//! - `api` - functional entry points (`new_game`, `handle_square_click`)
//!
//! # Example
//!
//! ```
//! use chess_rules::{api, GameEvent, PieceColor, Square};
//!
//! let state = api::new_game();
//! let (state, _) = api::handle_square_click(state, "e2".parse().unwrap());
//! let (state, events) = api::handle_square_click(state, "e4".parse().unwrap());
//!
//! assert!(events.contains(&GameEvent::TurnChanged(PieceColor::Black)));
//! assert!(state.board.get(Square::new(4, 4).unwrap()).is_some());
//! ```

pub mod api;
pub mod board;
pub mod check;
pub mod error;
pub mod game;
pub mod rules;
pub mod types;


pub use board::{belongs_to, Board};
pub use check::in_check;
pub use error::{ChessRulesError, ChessRulesResult};
pub use game::{GameEvent, GameState};
pub use rules::{is_path_clear, is_pseudo_legal, FriendlyFire, Rejection, RuleSet};
pub use types::{Piece, PieceColor, PieceType, Square};
