//! Error types for board access and game construction.
//!
//! These cover caller-contract violations only. Rule rejections are not
//! errors; they are reported through
//! [`MoveVerdict`](crate::verdict::MoveVerdict).

use crate::color::Color;
use crate::square::Square;

/// Errors from raw board access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A coordinate pair fell outside the 8x8 board.
    #[error("coordinate ({rank}, {file}) is outside the bounds of the board")]
    OutOfBounds {
        /// Rank index as supplied by the caller.
        rank: i8,
        /// File index as supplied by the caller.
        file: i8,
    },
    /// A piece was placed on a square that already holds one.
    #[error("there is already a piece on {square}")]
    Occupied {
        /// The occupied square.
        square: Square,
    },
    /// A move was executed from a square that holds no piece.
    #[error("there is no piece on {square} to move")]
    Vacant {
        /// The empty square.
        square: Square,
    },
}

/// Errors from constructing a game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Both players were given the same color.
    #[error("both players claim the {color} pieces")]
    MatchingColors {
        /// The duplicated color.
        color: Color,
    },
}
