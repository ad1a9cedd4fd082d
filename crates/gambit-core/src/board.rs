//! The chess board: an 8x8 grid of optional pieces with no rule knowledge.

use std::fmt;

use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-rank piece order from file a to file h.
const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Owned piece storage for one game. Cloning a board is a full
/// structural copy; boards never share piece state.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Option<Piece>; Square::COUNT],
}

impl Board {
    /// Return an empty board.
    pub const fn empty() -> Board {
        Board {
            cells: [None; Square::COUNT],
        }
    }

    /// Return a board with all 32 pieces on their standard starting squares.
    pub fn standard_layout() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            for (file, &kind) in BACK_RANK.iter().enumerate() {
                let sq = Square::at(color.back_rank(), file as u8);
                board.cells[sq.index()] = Some(Piece::new(kind, color));
            }
            for file in 0..8 {
                let sq = Square::at(color.pawn_rank(), file);
                board.cells[sq.index()] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Return a copy of the piece on the given square, if any.
    ///
    /// The returned piece is independent of the board; mutating it does
    /// not touch the stored one.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Return `true` if the given square holds a piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_some()
    }

    /// Place a piece on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError::Occupied`] if the square already holds a piece.
    pub fn place(&mut self, sq: Square, piece: Piece) -> Result<(), BoardError> {
        if self.cells[sq.index()].is_some() {
            return Err(BoardError::Occupied { square: sq });
        }
        self.cells[sq.index()] = Some(piece);
        Ok(())
    }

    /// Remove and return the piece on the given square.
    ///
    /// Clearing an empty square is a no-op returning `None`.
    pub fn clear(&mut self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()].take()
    }

    /// Iterate over all occupied squares and their pieces.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|sq| self.cells[sq.index()].map(|piece| (sq, piece)))
    }

    /// Count the pieces on the board.
    pub fn piece_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Board {
        Board::empty()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {{")?;
        for (sq, piece) in self.pieces() {
            writeln!(f, "    {sq}: {:?} {:?}", piece.color(), piece.kind())?;
        }
        write!(f, "}}")
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid of Unicode glyphs.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        for rank in (0u8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0u8..8 {
                let c = match board.piece_at(Square::at(rank, file)) {
                    Some(piece) => piece.glyph(),
                    None => '·',
                };
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
