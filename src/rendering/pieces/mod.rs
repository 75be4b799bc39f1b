//! Chess pieces rendering module
//!
//! Draws the pieces as tinted letters on top of the board squares.

pub mod pieces;

pub use pieces::*;
