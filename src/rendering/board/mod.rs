//! Board rendering module
//!
//! Manages board creation, square highlighting and coordinate labels.

pub mod board;
pub mod coordinates;

pub use board::*;
