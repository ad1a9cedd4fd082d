//! Session-level errors.

use gambit_core::{BoardError, GameState};

/// Errors that can occur while running a console session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// A turn was requested after the game had already ended.
    #[error("the game is already over ({state})")]
    GameOver {
        /// The terminal state the game ended in.
        state: GameState,
    },

    /// The move input stream ended before the game did.
    #[error("input closed before the game finished")]
    InputClosed,

    /// A move source produced input the board rejected at the contract
    /// level; this indicates a bug in the source, not a bad move.
    #[error("board rejected a validated move: {source}")]
    Board {
        /// The underlying board error.
        #[from]
        source: BoardError,
    },

    /// An I/O error occurred while reading player input.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
