//! Rule-level outcomes: move verdicts and the derived game state.

use std::fmt;

/// The result of validating a candidate move against the rules.
///
/// Everything except [`MoveVerdict::Valid`] is a rejection specific
/// enough for the caller to show an actionable message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveVerdict {
    /// The move is legal and may be played.
    Valid,
    /// The starting square holds no piece.
    NoPiece,
    /// The starting square holds a piece of the other player.
    WrongPlayer,
    /// A piece blocks the move (own piece at the destination, or any
    /// piece on the path of a slide).
    Blocked,
    /// The piece cannot make that shape of move.
    Illegal,
    /// One of the squares lies outside the board.
    OutOfBounds,
    /// The move would leave the mover's own king in check.
    SelfCheck,
}

impl MoveVerdict {
    /// Whether the move passed validation.
    #[inline]
    pub const fn is_valid(self) -> bool {
        matches!(self, MoveVerdict::Valid)
    }
}

impl fmt::Display for MoveVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            MoveVerdict::Valid => "valid move",
            MoveVerdict::NoPiece => "there is no piece at the starting position",
            MoveVerdict::WrongPlayer => "that isn't the current player's piece",
            MoveVerdict::Blocked => "there is a piece in the way",
            MoveVerdict::Illegal => "that piece isn't allowed to make that move",
            MoveVerdict::OutOfBounds => "that move is outside the bounds of the board",
            MoveVerdict::SelfCheck => "that move would put the current player in check",
        };
        write!(f, "{msg}")
    }
}

/// The derived state of the game with respect to the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    /// Ordinary play.
    #[default]
    Normal,
    /// The side to move is in check but has a legal move.
    Check,
    /// The side to move is in check with no legal move; the game is over.
    Checkmate,
    /// The side to move is not in check but has no legal move; drawn.
    Stalemate,
}

impl GameState {
    /// Whether the game has ended.
    #[inline]
    pub const fn is_over(self) -> bool {
        matches!(self, GameState::Checkmate | GameState::Stalemate)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameState::Normal => "normal",
            GameState::Check => "check",
            GameState::Checkmate => "checkmate",
            GameState::Stalemate => "stalemate",
        };
        write!(f, "{name}")
    }
}
