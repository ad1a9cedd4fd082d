//! Chess board squares using Little-Endian Rank-File (LERF) encoding.

use std::fmt;

/// A raw (rank-index, file-index) coordinate pair as supplied by callers.
///
/// Unlike [`Square`] a coordinate may lie outside the board; conversion
/// through [`Square::from_coord`] is where bounds are enforced.
pub type Coord = (i8, i8);

/// A square on the chess board, encoded as a `u8` in LERF format.
///
/// Index = rank * 8 + file, so a1 = 0, b1 = 1, ..., h8 = 63. A `Square`
/// is always on the board; out-of-range coordinates are rejected at
/// construction.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square(u8);

impl Square {
    /// Total number of squares.
    pub const COUNT: usize = 64;

    /// Create a square from in-range rank and file indices.
    ///
    /// # Panics
    ///
    /// Debug-asserts that both indices are below 8.
    #[inline]
    pub(crate) const fn at(rank: u8, file: u8) -> Square {
        debug_assert!(rank < 8 && file < 8);
        Square(rank * 8 + file)
    }

    /// Create a square from a raw coordinate pair, returning `None` if
    /// either index falls outside `0..8`.
    #[inline]
    pub const fn from_coord(coord: Coord) -> Option<Square> {
        let (rank, file) = coord;
        if rank >= 0 && rank < 8 && file >= 0 && file < 8 {
            Some(Square(rank as u8 * 8 + file as u8))
        } else {
            None
        }
    }

    /// Create a square from a zero-based index, returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 { Some(Square(index)) } else { None }
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0];
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Some(Square::at(rank_byte - b'1', file_byte - b'a'))
    }

    /// Return the zero-based index (0..63).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the zero-based rank index (0..7).
    #[inline]
    pub const fn rank(self) -> u8 {
        self.0 / 8
    }

    /// Return the zero-based file index (0..7).
    #[inline]
    pub const fn file(self) -> u8 {
        self.0 % 8
    }

    /// Return the raw coordinate pair for this square.
    #[inline]
    pub const fn coord(self) -> Coord {
        (self.rank() as i8, self.file() as i8)
    }

    /// Return the square offset by the given rank and file deltas, or
    /// `None` if the result leaves the board.
    #[inline]
    pub const fn offset(self, rank_delta: i8, file_delta: i8) -> Option<Square> {
        Square::from_coord((
            self.rank() as i8 + rank_delta,
            self.file() as i8 + file_delta,
        ))
    }

    /// Iterate over all 64 squares in index order (a1, b1, ..., h8).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file_char = (b'a' + self.file()) as char;
        write!(f, "{}{}", file_char, self.rank() + 1)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Square;

    #[test]
    fn coord_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::from_coord(sq.coord()), Some(sq));
        }
    }

    #[test]
    fn from_coord_out_of_bounds() {
        assert_eq!(Square::from_coord((-1, 0)), None);
        assert_eq!(Square::from_coord((0, -1)), None);
        assert_eq!(Square::from_coord((8, 3)), None);
        assert_eq!(Square::from_coord((3, 8)), None);
        assert_eq!(Square::from_coord((-1, -1)), None);
        assert_eq!(Square::from_coord((9, 9)), None);
    }

    #[test]
    fn from_index_bounds() {
        for i in 0u8..64 {
            assert!(Square::from_index(i).is_some());
        }
        assert!(Square::from_index(64).is_none());
        assert!(Square::from_index(255).is_none());
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Square::from_algebraic("a1"), Some(Square::at(0, 0)));
        assert_eq!(Square::from_algebraic("e4"), Some(Square::at(3, 4)));
        assert_eq!(Square::from_algebraic("h8"), Some(Square::at(7, 7)));
        assert_eq!(format!("{}", Square::at(3, 4)), "e4");
        assert_eq!(format!("{}", Square::at(0, 0)), "a1");
        assert_eq!(format!("{}", Square::at(7, 7)), "h8");
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
        assert!(Square::from_algebraic("").is_none());
        assert!(Square::from_algebraic("a").is_none());
        assert!(Square::from_algebraic("a1b").is_none());
        assert!(Square::from_algebraic("A1").is_none());
    }

    #[test]
    fn offset_stays_on_board() {
        let e4 = Square::at(3, 4);
        assert_eq!(e4.offset(1, 0), Some(Square::at(4, 4)));
        assert_eq!(e4.offset(-3, -4), Some(Square::at(0, 0)));
        assert_eq!(Square::at(0, 0).offset(-1, 0), None);
        assert_eq!(Square::at(7, 7).offset(0, 1), None);
    }

    #[test]
    fn all_iterator_count() {
        assert_eq!(Square::all().count(), 64);
    }

    #[test]
    fn debug_shows_algebraic() {
        assert_eq!(format!("{:?}", Square::at(3, 4)), "Square(e4)");
    }
}
