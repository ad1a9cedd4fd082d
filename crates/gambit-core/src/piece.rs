//! Colored chess piece with its per-game move counter.

use std::fmt;

use crate::color::Color;
use crate::piece_kind::PieceKind;

/// A colored chess piece occupying a board square.
///
/// Carries the number of moves the piece itself has made, which decides
/// pawn double-advance and castling eligibility. An empty square is
/// represented as `Option<Piece>::None` rather than a sentinel piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: Color,
    moves_made: u32,
}

impl Piece {
    /// Create a fresh piece that has not moved yet.
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            color,
            moves_made: 0,
        }
    }

    /// Return the piece kind.
    #[inline]
    pub const fn kind(self) -> PieceKind {
        self.kind
    }

    /// Return the color.
    #[inline]
    pub const fn color(self) -> Color {
        self.color
    }

    /// Number of moves this piece has made so far.
    #[inline]
    pub const fn moves_made(self) -> u32 {
        self.moves_made
    }

    /// Whether the piece has moved at least once.
    ///
    /// A piece that moved away and back still counts as moved.
    #[inline]
    pub const fn has_moved(self) -> bool {
        self.moves_made > 0
    }

    /// Whether the piece is limited to single moveset steps.
    #[inline]
    pub const fn is_restricted(self) -> bool {
        self.kind.is_restricted()
    }

    /// Record one completed move by this piece.
    #[inline]
    pub fn record_move(&mut self) {
        self.moves_made += 1;
    }

    /// Return the Unicode glyph for this piece.
    #[inline]
    pub const fn glyph(self) -> char {
        self.kind.glyph(self.color)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
