//! Core chess types: board representation, move legality, and game rules.

mod board;
mod color;
mod error;
mod game;
pub mod moveset;
mod piece;
mod piece_kind;
mod player;
mod square;
mod verdict;

pub use board::{Board, PrettyBoard};
pub use color::Color;
pub use error::{BoardError, GameError};
pub use game::Game;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use player::{Player, PlayerId};
pub use square::{Coord, Square};
pub use verdict::{GameState, MoveVerdict};
