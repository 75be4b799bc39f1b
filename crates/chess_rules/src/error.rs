//! Error types for chess rules
//!
//! Only coordinate constructors and parsers can fail. Illegal moves are not
//! errors: the turn controller reports them as [`crate::GameEvent::IllegalMove`].

use thiserror::Error;

/// Errors that can occur when building board coordinates
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessRulesError {
    /// Row or column outside 0..=7
    #[error("Invalid square ({row}, {col}): row and column must be 0-7")]
    InvalidSquare { row: u8, col: u8 },

    /// Square index outside 0..=63
    #[error("Invalid square index: {index} (must be 0-63)")]
    InvalidIndex { index: usize },

    /// Text that is not a square in algebraic notation
    #[error("Invalid algebraic square: {input:?} (expected a1-h8)")]
    InvalidAlgebraic { input: String },
}

/// Result type alias for chess rules operations
pub type ChessRulesResult<T> = Result<T, ChessRulesError>;
